//! API-key login screen

use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;
use crate::text_input::TextInput;

use super::Outcome;

#[derive(Debug, Clone)]
pub struct LoginView {
    pub api_key: TextInput,
    pub submitting: bool,
    /// Shown as help text under the input
    pub error: Option<String>,
    /// Where a successful login lands
    pub redirect: Route,
}

impl LoginView {
    pub fn new(redirect: Route) -> Self {
        Self {
            api_key: TextInput::masked(),
            submitting: false,
            error: None,
            redirect,
        }
    }

    /// Login already in flight with a configured key
    pub fn auto(api_key: &str, redirect: Route) -> (Self, Vec<ApiRequest>) {
        let mut view = Self::new(redirect);
        view.api_key.set_value(api_key);
        let requests = view.submit().requests;
        (view, requests)
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.api_key.value().trim().is_empty()
    }

    pub fn submit(&mut self) -> Outcome {
        if !self.can_submit() {
            return Outcome::none();
        }
        self.submitting = true;
        self.error = None;
        Outcome::request(ApiRequest::Login {
            api_key: self.api_key.value().trim().to_string(),
        })
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::Enter | InputKey::CharCtrl('s') => Some(self.submit()),
            other => {
                let outcome = self.api_key.handle_key(other);
                if outcome.edited() {
                    self.error = None;
                }
                outcome.consumed().then(Outcome::none)
            }
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        let ApiResponse::LoggedIn(result) = response else {
            return Outcome::none();
        };
        self.submitting = false;
        match result {
            Ok(()) => Outcome::navigate(self.redirect.clone()),
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.error = Some(e.message());
                Outcome::none()
            }
        }
    }
}
