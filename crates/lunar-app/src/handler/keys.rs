//! Key event routing.
//!
//! Priority: Ctrl+C, then the confirm dialog, then the command palette,
//! then function-key tab switching, then the current screen. Keys the
//! screen leaves alone fall back to the global bindings.

use crate::command_palette::PaletteOutcome;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::{FunctionTab, Route};
use crate::state::AppState;

use super::navigation::{apply_outcome, navigate};
use super::UpdateResult;

pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    if state.confirm.is_some() {
        return handle_key_confirm_dialog(key);
    }

    if state.palette.is_open() {
        return handle_key_palette(state, key);
    }

    if key == InputKey::CharCtrl('k') && state.route != Route::Login {
        return UpdateResult::message(Message::TogglePalette);
    }

    if let InputKey::F(n @ 1..=5) = key {
        return switch_tab(state, usize::from(n - 1));
    }

    if let Some(outcome) = state.view.handle_key(&key) {
        return apply_outcome(state, outcome);
    }

    handle_key_global(state, key)
}

fn handle_key_confirm_dialog(key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => {
            UpdateResult::message(Message::ConfirmAccepted)
        }
        InputKey::Char('n' | 'N') | InputKey::Esc => {
            UpdateResult::message(Message::ConfirmDeclined)
        }
        _ => UpdateResult::none(),
    }
}

fn handle_key_palette(state: &mut AppState, key: InputKey) -> UpdateResult {
    match state.palette.handle_key(&key) {
        PaletteOutcome::None => UpdateResult::none(),
        PaletteOutcome::Close => {
            state.palette.close();
            UpdateResult::none()
        }
        PaletteOutcome::Navigate(route) => UpdateResult::message(Message::Navigate(route)),
    }
}

fn handle_key_global(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc => UpdateResult::message(Message::Back),
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        InputKey::Char('r') => UpdateResult::message(Message::Reload),
        InputKey::CharCtrl('l') if state.route != Route::Login => {
            UpdateResult::message(Message::Logout)
        }
        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            switch_tab(state, index)
        }
        _ => UpdateResult::none(),
    }
}

/// Open tab `index` of the function the current screen belongs to
fn switch_tab(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(id) = state.tab_function_id() else {
        return UpdateResult::none();
    };
    let Some(tab) = FunctionTab::ALL.get(index) else {
        return UpdateResult::none();
    };
    let route = tab.route(&id);
    if route == state.route {
        return UpdateResult::none();
    }
    navigate(state, route)
}
