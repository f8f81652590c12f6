//! Application state (Model in TEA pattern)

use std::time::Duration;

use lunar_core::Function;

use crate::command_palette::CommandPaletteState;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::request::{ApiCall, ApiRequest, Ticket};
use crate::route::Route;
use crate::toast::Toasts;
use crate::views::{LoginView, View, ViewContext};

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Route of the screen currently shown
    pub route: Route,

    /// State of the screen currently shown
    pub view: View,

    /// Bumped on every navigation; responses from older screens are dropped
    pub generation: u64,

    pub toasts: Toasts,

    pub palette: CommandPaletteState,

    /// Pending yes/no question; blocks all other keys while set
    pub confirm: Option<ConfirmDialogState>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let toast_duration = Duration::from_millis(settings.ui.toast_duration_ms);
        Self {
            settings,
            route: Route::Login,
            view: View::Login(LoginView::new(Route::FunctionsList)),
            generation: 0,
            toasts: Toasts::new(toast_duration),
            palette: CommandPaletteState::default(),
            confirm: None,
            should_quit: false,
        }
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext {
            page_size: self.settings.ui.page_size,
            base_url: self.settings.server.base_url.clone(),
        }
    }

    /// Ticket for requests made on behalf of the current screen
    pub fn ticket(&self) -> Ticket {
        Ticket::view(self.generation)
    }

    /// Stamp `requests` for the current screen
    pub fn calls(&self, requests: Vec<ApiRequest>) -> Vec<ApiCall> {
        let ticket = self.ticket();
        requests
            .into_iter()
            .map(|request| ApiCall { ticket, request })
            .collect()
    }

    pub fn back_route(&self) -> Option<Route> {
        self.route.back(self.view.execution_function_id())
    }

    /// Function the current screen is about, once loaded
    pub fn current_function(&self) -> Option<&Function> {
        self.view.function()
    }

    /// Function id used for tab switching, including from an execution
    pub fn tab_function_id(&self) -> Option<String> {
        self.route
            .function_id()
            .or_else(|| self.view.execution_function_id())
            .map(str::to_string)
    }
}
