//! Tests for the update loop: key routing, navigation and response handling

use lunar_api::{ApiError, ApiResult, FunctionPatch};
use lunar_core::{Function, FunctionList};

use super::{update, UpdateAction};
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::pagination::PageState;
use crate::request::{ApiCall, ApiRequest, ApiResponse, Ticket, TicketScope};
use crate::route::Route;
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::views::View;

/// Run `msg` and every follow-up message, collecting dispatched calls
fn run(state: &mut AppState, msg: Message) -> Vec<ApiCall> {
    let mut calls = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        if let Some(UpdateAction::Api(c)) = result.action {
            calls.extend(c);
        }
        next = result.message;
    }
    calls
}

fn key(state: &mut AppState, key: InputKey) -> Vec<ApiCall> {
    run(state, Message::Key(key))
}

/// Deliver a response stamped for the current screen
fn respond(state: &mut AppState, response: ApiResponse) -> Vec<ApiCall> {
    let ticket = state.ticket();
    run(state, Message::Api { ticket, response })
}

fn requests(calls: &[ApiCall]) -> Vec<ApiRequest> {
    calls.iter().map(|c| c.request.clone()).collect()
}

fn function(disabled: bool) -> Function {
    serde_json::from_value(serde_json::json!({
        "id": "f1",
        "name": "hello",
        "disabled": disabled,
        "active_version": {"version": 1, "code": "return 1"}
    }))
    .unwrap()
}

/// A functions list answered for the default first page
fn functions_page(result: ApiResult<FunctionList>) -> ApiResponse {
    ApiResponse::Functions {
        page: PageState { limit: 20, offset: 0 },
        result,
    }
}

fn unauthorized(message: &str) -> ApiError {
    ApiError::Status {
        status: 401,
        message: message.to_string(),
    }
}

/// Settings screen for `f1` with the status section focused
fn settings_state() -> AppState {
    let mut state = AppState::new(Settings::default());
    run(
        &mut state,
        Message::Navigate(Route::FunctionSettings { id: "f1".into() }),
    );
    respond(&mut state, ApiResponse::Function(Ok(function(false))));
    for _ in 0..3 {
        key(&mut state, InputKey::Tab);
    }
    state
}

// ─────────────────────────────────────────────────────────
// Confirm dialog
// ─────────────────────────────────────────────────────────

#[test]
fn test_confirmed_disable_sends_one_update() {
    let mut state = settings_state();
    assert!(key(&mut state, InputKey::Char(' ')).is_empty());
    assert!(key(&mut state, InputKey::CharCtrl('s')).is_empty());
    assert!(state.confirm.is_some());

    let calls = key(&mut state, InputKey::Char('y'));
    assert_eq!(
        requests(&calls),
        vec![ApiRequest::UpdateFunction {
            id: "f1".into(),
            patch: FunctionPatch::disabled(true),
        }]
    );
    assert!(state.confirm.is_none());

    respond(
        &mut state,
        ApiResponse::FunctionUpdated {
            patch: FunctionPatch::disabled(true),
            result: Ok(()),
        },
    );
    let toast = state.toasts.last().unwrap();
    assert_eq!(toast.message, "Function disabled successfully");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn test_declined_disable_sends_nothing() {
    let mut state = settings_state();
    key(&mut state, InputKey::Char(' '));
    key(&mut state, InputKey::CharCtrl('s'));

    let calls = key(&mut state, InputKey::Char('n'));
    assert!(calls.is_empty());
    assert!(state.confirm.is_none());
    assert!(state.toasts.is_empty());
}

#[test]
fn test_dialog_swallows_other_keys() {
    let mut state = settings_state();
    key(&mut state, InputKey::Char(' '));
    key(&mut state, InputKey::CharCtrl('s'));

    assert!(key(&mut state, InputKey::Char('q')).is_empty());
    assert!(!state.should_quit);
    assert!(state.confirm.is_some());
}

// ─────────────────────────────────────────────────────────
// Login & sessions
// ─────────────────────────────────────────────────────────

#[test]
fn test_rejected_login_shows_message_and_stays() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::Login));
    for c in "bad".chars() {
        key(&mut state, InputKey::Char(c));
    }
    let calls = key(&mut state, InputKey::Enter);
    assert_eq!(
        requests(&calls),
        vec![ApiRequest::Login {
            api_key: "bad".into()
        }]
    );

    let calls = respond(&mut state, ApiResponse::LoggedIn(Err(unauthorized("invalid key"))));
    assert!(calls.is_empty());
    assert_eq!(state.route, Route::Login);
    let View::Login(login) = &state.view else {
        panic!("expected login view");
    };
    assert_eq!(login.error.as_deref(), Some("invalid key"));
}

#[test]
fn test_fresh_login_opens_functions() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::Login));
    key(&mut state, InputKey::Char('k'));
    key(&mut state, InputKey::Enter);

    let calls = respond(&mut state, ApiResponse::LoggedIn(Ok(())));
    assert_eq!(state.route, Route::FunctionsList);
    assert_eq!(
        requests(&calls),
        vec![ApiRequest::ListFunctions {
            limit: 20,
            offset: 0
        }]
    );
}

#[test]
fn test_startup_with_key_logs_in_then_redirects() {
    let mut state = AppState::new(Settings::default());
    let calls = run(
        &mut state,
        Message::Startup {
            route: Route::FunctionCode { id: "f1".into() },
            api_key: Some("secret".into()),
        },
    );
    assert_eq!(state.route, Route::Login);
    assert_eq!(
        requests(&calls),
        vec![ApiRequest::Login {
            api_key: "secret".into()
        }]
    );

    respond(&mut state, ApiResponse::LoggedIn(Ok(())));
    assert_eq!(state.route, Route::FunctionCode { id: "f1".into() });
}

#[test]
fn test_startup_without_key_asks_for_login() {
    let mut state = AppState::new(Settings::default());
    let calls = run(
        &mut state,
        Message::Startup {
            route: Route::FunctionVersions { id: "f1".into() },
            api_key: Some("  ".into()),
        },
    );
    assert_eq!(state.route, Route::Login);
    assert!(calls.is_empty());
    match &state.view {
        View::Login(login) => {
            assert_eq!(login.redirect, Route::FunctionVersions { id: "f1".into() })
        }
        other => panic!("expected login, got {other:?}"),
    }
}

#[test]
fn test_startup_without_key_opens_public_route() {
    let mut state = AppState::new(Settings::default());
    let calls = run(
        &mut state,
        Message::Startup {
            route: Route::Preview {
                component: Some("badges".into()),
            },
            api_key: None,
        },
    );
    assert_eq!(
        state.route,
        Route::Preview {
            component: Some("badges".into())
        }
    );
    assert!(calls.is_empty());
}

#[test]
fn test_unauthorized_data_response_returns_to_login() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));
    respond(&mut state, functions_page(Err(unauthorized("unauthorized"))));

    assert_eq!(state.route, Route::Login);
    assert_eq!(state.toasts.last().unwrap().kind, ToastKind::Error);
}

#[test]
fn test_logout_navigates_then_calls_backend() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));
    let calls = key(&mut state, InputKey::CharCtrl('l'));
    assert_eq!(state.route, Route::Login);
    assert_eq!(requests(&calls), vec![ApiRequest::Logout]);
    assert_eq!(calls[0].ticket, state.ticket());
}

// ─────────────────────────────────────────────────────────
// Stale responses
// ─────────────────────────────────────────────────────────

#[test]
fn test_response_for_previous_screen_is_dropped() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));
    let old_ticket = state.ticket();
    run(&mut state, Message::Navigate(Route::FunctionCreate));

    let calls = run(
        &mut state,
        Message::Api {
            ticket: old_ticket,
            response: functions_page(Err(unauthorized("expired"))),
        },
    );
    assert!(calls.is_empty());
    assert_eq!(state.route, Route::FunctionCreate);
    assert!(state.toasts.is_empty());
}

#[test]
fn test_each_navigation_bumps_generation() {
    let mut state = AppState::new(Settings::default());
    let before = state.generation;
    let calls = run(&mut state, Message::Navigate(Route::FunctionsList));
    assert_eq!(state.generation, before + 1);
    assert_eq!(calls[0].ticket, Ticket::view(before + 1));
}

// ─────────────────────────────────────────────────────────
// Command palette
// ─────────────────────────────────────────────────────────

#[test]
fn test_palette_loads_and_navigates() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));

    let calls = key(&mut state, InputKey::CharCtrl('k'));
    assert!(state.palette.is_open());
    assert_eq!(calls[0].ticket.scope, TicketScope::Palette);
    assert_eq!(
        calls[0].request,
        ApiRequest::ListFunctions {
            limit: 100,
            offset: 0
        }
    );

    let list = FunctionList {
        functions: vec![function(false)],
        ..Default::default()
    };
    run(
        &mut state,
        Message::Api {
            ticket: calls[0].ticket,
            response: functions_page(Ok(list)),
        },
    );
    assert_eq!(state.palette.candidates().len(), 7);

    for c in "hello → test".chars() {
        key(&mut state, InputKey::Char(c));
    }
    assert_eq!(state.palette.result_count(), 1);
    key(&mut state, InputKey::Enter);
    assert!(!state.palette.is_open());
    assert_eq!(state.route, Route::FunctionTest { id: "f1".into() });
}

#[test]
fn test_stale_palette_load_is_dropped() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));
    let first = key(&mut state, InputKey::CharCtrl('k'))[0].ticket;
    key(&mut state, InputKey::Esc);
    key(&mut state, InputKey::CharCtrl('k'));

    let list = FunctionList {
        functions: vec![function(false)],
        ..Default::default()
    };
    run(
        &mut state,
        Message::Api {
            ticket: first,
            response: functions_page(Ok(list)),
        },
    );
    assert!(state.palette.loading);
    assert_eq!(state.palette.candidates().len(), 2);
}

#[test]
fn test_palette_unavailable_on_login() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::Login));
    assert!(key(&mut state, InputKey::CharCtrl('k')).is_empty());
    assert!(!state.palette.is_open());
}

// ─────────────────────────────────────────────────────────
// Global keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_digit_switches_function_tab() {
    let mut state = AppState::new(Settings::default());
    run(
        &mut state,
        Message::Navigate(Route::FunctionCode { id: "f1".into() }),
    );
    let calls = key(&mut state, InputKey::Char('2'));
    assert_eq!(state.route, Route::FunctionVersions { id: "f1".into() });
    assert_eq!(calls.len(), 2);

    key(&mut state, InputKey::F(4));
    assert_eq!(state.route, Route::FunctionSettings { id: "f1".into() });
}

#[test]
fn test_escape_goes_back() {
    let mut state = AppState::new(Settings::default());
    run(
        &mut state,
        Message::Navigate(Route::VersionDiff {
            id: "f1".into(),
            old: 1,
            new: 2,
        }),
    );
    key(&mut state, InputKey::Esc);
    assert_eq!(state.route, Route::FunctionCode { id: "f1".into() });
    key(&mut state, InputKey::Esc);
    assert_eq!(state.route, Route::FunctionsList);
}

#[test]
fn test_quit_keys() {
    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionsList));
    key(&mut state, InputKey::Char('q'));
    assert!(state.should_quit);

    let mut state = AppState::new(Settings::default());
    run(&mut state, Message::Navigate(Route::FunctionCreate));
    key(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit);
    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit);
}

#[test]
fn test_view_toasts_reach_state() {
    let mut state = AppState::new(Settings::default());
    run(
        &mut state,
        Message::Navigate(Route::FunctionCode { id: "f1".into() }),
    );
    respond(&mut state, ApiResponse::Function(Ok(function(false))));
    key(&mut state, InputKey::CharCtrl('s'));
    assert_eq!(state.toasts.last().unwrap().message, "No changes to save");
}
