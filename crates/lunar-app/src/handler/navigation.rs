//! Route changes and application of screen outcomes

use std::time::Instant;

use tracing::info;

use crate::request::{ApiCall, ApiRequest};
use crate::route::Route;
use crate::state::AppState;
use crate::views::{LoginView, Outcome, View};

use super::UpdateResult;

/// Replace the current screen with a fresh one for `route`.
///
/// Returns the new screen's initial calls, already stamped with the new
/// generation.
pub(crate) fn enter_route(state: &mut AppState, route: Route) -> Vec<ApiCall> {
    info!("Navigating to {}", route);
    state.generation += 1;
    state.confirm = None;
    let (view, requests) = View::for_route(&route, &state.view_context());
    state.view = view;
    state.route = route;
    state.calls(requests)
}

pub(crate) fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    UpdateResult::api(enter_route(state, route))
}

/// Open the login screen with `api_key` already submitted
pub(crate) fn auto_login(state: &mut AppState, api_key: &str, redirect: Route) -> UpdateResult {
    info!("Logging in with configured API key");
    state.generation += 1;
    let (view, requests) = LoginView::auto(api_key, redirect);
    state.view = View::Login(view);
    state.route = Route::Login;
    UpdateResult::api(state.calls(requests))
}

/// Show the login screen, continuing to `redirect` once signed in
pub(crate) fn require_login(state: &mut AppState, redirect: Route) -> UpdateResult {
    info!("Login required for {}", redirect);
    state.generation += 1;
    state.confirm = None;
    state.view = View::Login(LoginView::new(redirect));
    state.route = Route::Login;
    UpdateResult::none()
}

/// End the session: back to login, then tell the backend
pub(crate) fn logout(state: &mut AppState) -> UpdateResult {
    state.palette.close();
    let mut calls = enter_route(state, Route::Login);
    calls.extend(state.calls(vec![ApiRequest::Logout]));
    UpdateResult::api(calls)
}

/// Carry out the effects a screen asked for
pub(crate) fn apply_outcome(state: &mut AppState, outcome: Outcome) -> UpdateResult {
    let now = Instant::now();
    for (message, kind) in outcome.toasts {
        state.toasts.show(message, kind, now);
    }
    if let Some(dialog) = outcome.confirm {
        state.confirm = Some(dialog);
    }
    let mut calls = state.calls(outcome.requests);
    if let Some(route) = outcome.navigate {
        calls.extend(enter_route(state, route));
    }
    UpdateResult::api(calls)
}
