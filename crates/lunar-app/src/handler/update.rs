//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use lunar_api::FunctionPatch;
use tracing::{debug, warn};

use crate::message::Message;
use crate::request::{ApiCall, ApiRequest, ApiResponse, Ticket, TicketScope};
use crate::route::Route;
use crate::state::AppState;
use crate::toast::ToastKind;

use super::navigation::{apply_outcome, auto_login, logout, navigate, require_login};
use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => handle_key(state, key),

        Message::Tick => {
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Startup { route, api_key } => {
            match api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
                Some(key) => {
                    let redirect = match route {
                        Route::Login => Route::FunctionsList,
                        other => other,
                    };
                    auto_login(state, key, redirect)
                }
                None if route.is_public() => navigate(state, route),
                None => require_login(state, route),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => {
            state.palette.close();
            navigate(state, route)
        }
        Message::Back => match state.back_route() {
            Some(route) => navigate(state, route),
            None => UpdateResult::none(),
        },
        Message::Reload => {
            let route = state.route.clone();
            navigate(state, route)
        }
        Message::Logout => logout(state),
        Message::TogglePalette => toggle_palette(state),

        // ─────────────────────────────────────────────────────────
        // Confirm Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::ConfirmAccepted => match state.confirm.take() {
            Some(dialog) => UpdateResult::message(dialog.on_confirm),
            None => UpdateResult::none(),
        },
        Message::ConfirmDeclined => {
            if let Some(dialog) = state.confirm.take() {
                debug!("Declined: {}", dialog.title);
            }
            UpdateResult::none()
        }

        Message::DeleteFunction { id } => dispatch(state, ApiRequest::DeleteFunction { id }),
        Message::SetFunctionDisabled { id, disabled } => dispatch(
            state,
            ApiRequest::UpdateFunction {
                id,
                patch: FunctionPatch::disabled(disabled),
            },
        ),
        Message::ActivateVersion { id, version } => {
            dispatch(state, ApiRequest::ActivateVersion { id, version })
        }

        Message::Api { ticket, response } => handle_api_response(state, ticket, response),
    }
}

fn dispatch(state: &AppState, request: ApiRequest) -> UpdateResult {
    UpdateResult::api(state.calls(vec![request]))
}

fn toggle_palette(state: &mut AppState) -> UpdateResult {
    if state.palette.is_open() {
        state.palette.close();
        return UpdateResult::none();
    }
    if state.route == Route::Login {
        return UpdateResult::none();
    }
    let generation = state.palette.open();
    UpdateResult::api(vec![ApiCall {
        ticket: Ticket::palette(generation),
        request: ApiRequest::ListFunctions {
            limit: state.settings.ui.palette_limit,
            offset: 0,
        },
    }])
}

fn handle_api_response(state: &mut AppState, ticket: Ticket, response: ApiResponse) -> UpdateResult {
    match ticket.scope {
        TicketScope::Palette => {
            if !state.palette.is_open() || ticket.generation != state.palette.generation() {
                debug!("Dropping stale palette response (generation {})", ticket.generation);
                return UpdateResult::none();
            }
            match response {
                ApiResponse::Functions { result: Ok(list), .. } => {
                    state.palette.set_functions(&list.functions)
                }
                ApiResponse::Functions { result: Err(e), .. } if e.is_unauthorized() => {
                    state.palette.close();
                    return session_expired(state, &e.message());
                }
                ApiResponse::Functions { result: Err(e), .. } => {
                    warn!("Failed to load functions for palette: {}", e);
                    state.palette.set_functions(&[]);
                }
                other => debug!("Unexpected palette response: {:?}", other),
            }
            UpdateResult::none()
        }
        TicketScope::View => {
            if ticket.generation != state.generation {
                debug!(
                    "Dropping stale response (generation {} != {})",
                    ticket.generation, state.generation
                );
                return UpdateResult::none();
            }
            if let ApiResponse::LoggedOut(result) = &response {
                if let Err(e) = result {
                    warn!("Logout failed: {}", e);
                }
                return UpdateResult::none();
            }
            let unauthorized = !matches!(response, ApiResponse::LoggedIn(_))
                && response.error().is_some_and(|e| e.is_unauthorized());
            if unauthorized {
                let message = response.error().map(|e| e.message()).unwrap_or_default();
                return session_expired(state, &message);
            }
            let outcome = state.view.handle_response(response);
            apply_outcome(state, outcome)
        }
    }
}

/// A 401 outside the login screen: the session is gone
fn session_expired(state: &mut AppState, message: &str) -> UpdateResult {
    warn!("Unauthorized response, returning to login: {}", message);
    state
        .toasts
        .show("Session expired. Please log in again.", ToastKind::Error, Instant::now());
    navigate(state, Route::Login)
}
