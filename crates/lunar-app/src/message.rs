//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::request::{ApiResponse, Ticket};
use crate::route::Route;

/// All possible messages/events in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Periodic tick for toast expiry
    Tick,
    /// Leave the application
    Quit,

    /// First message of a run: open `route`, logging in first when a key is known
    Startup {
        route: Route,
        api_key: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    Navigate(Route),
    /// Go to the current route's back target
    Back,
    /// Rebuild the current screen and refetch its data
    Reload,
    /// End the session and return to the login screen
    Logout,
    TogglePalette,

    // ─────────────────────────────────────────────────────────
    // Confirm Dialog
    // ─────────────────────────────────────────────────────────
    ConfirmAccepted,
    ConfirmDeclined,

    // ─────────────────────────────────────────────────────────
    // Confirmed Mutations
    // ─────────────────────────────────────────────────────────
    DeleteFunction {
        id: String,
    },
    SetFunctionDisabled {
        id: String,
        disabled: bool,
    },
    ActivateVersion {
        id: String,
        version: u32,
    },

    /// A backend call finished
    Api {
        ticket: Ticket,
        response: ApiResponse,
    },
}
