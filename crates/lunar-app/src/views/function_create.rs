//! New-function form with a starter template picker

use std::collections::BTreeMap;

use lunar_api::{ApiError, NewFunction};

use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;
use crate::templates::{FunctionTemplate, TEMPLATES};
use crate::text_input::TextInput;

use super::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Name,
    Description,
    Template,
    Submit,
}

impl CreateField {
    const ORDER: [CreateField; 4] = [
        CreateField::Name,
        CreateField::Description,
        CreateField::Template,
        CreateField::Submit,
    ];

    fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ORDER[idx]
    }
}

#[derive(Debug, Clone)]
pub struct FunctionCreateView {
    pub name: TextInput,
    pub description: TextInput,
    /// Index into [`TEMPLATES`]
    pub template: usize,
    pub focus: CreateField,
    /// Field name → message, from local checks or backend validation
    pub errors: BTreeMap<String, String>,
    pub submitting: bool,
}

impl Default for FunctionCreateView {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionCreateView {
    pub fn new() -> Self {
        Self {
            name: TextInput::default(),
            description: TextInput::default(),
            template: 0,
            focus: CreateField::Name,
            errors: BTreeMap::new(),
            submitting: false,
        }
    }

    pub fn selected_template(&self) -> &'static FunctionTemplate {
        &TEMPLATES[self.template.min(TEMPLATES.len() - 1)]
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn submit(&mut self) -> Outcome {
        if self.submitting {
            return Outcome::none();
        }
        self.errors.clear();
        let name = self.name.value().trim();
        if name.is_empty() {
            self.errors.insert("name".into(), "Name is required".into());
            self.focus = CreateField::Name;
            return Outcome::none();
        }
        self.submitting = true;
        Outcome::request(ApiRequest::CreateFunction(NewFunction {
            name: name.to_string(),
            description: self.description.value().trim().to_string(),
            code: self.selected_template().code.to_string(),
        }))
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::CharCtrl('s') => return Some(self.submit()),
            InputKey::Tab | InputKey::Down => {
                self.focus = self.focus.step(true);
                return Some(Outcome::none());
            }
            InputKey::BackTab | InputKey::Up => {
                self.focus = self.focus.step(false);
                return Some(Outcome::none());
            }
            _ => {}
        }

        match self.focus {
            CreateField::Name | CreateField::Description => {
                if *key == InputKey::Enter {
                    self.focus = self.focus.step(true);
                    return Some(Outcome::none());
                }
                let (input, field) = if self.focus == CreateField::Name {
                    (&mut self.name, "name")
                } else {
                    (&mut self.description, "description")
                };
                let outcome = input.handle_key(key);
                if outcome.edited() {
                    self.errors.remove(field);
                }
                outcome.consumed().then(Outcome::none)
            }
            CreateField::Template => match key {
                InputKey::Left | InputKey::Char('h') => {
                    self.template = (self.template + TEMPLATES.len() - 1) % TEMPLATES.len();
                    self.errors.remove("code");
                    Some(Outcome::none())
                }
                InputKey::Right | InputKey::Char('l') | InputKey::Char(' ') => {
                    self.template = (self.template + 1) % TEMPLATES.len();
                    self.errors.remove("code");
                    Some(Outcome::none())
                }
                InputKey::Enter => {
                    self.focus = CreateField::Submit;
                    Some(Outcome::none())
                }
                _ => None,
            },
            CreateField::Submit => match key {
                InputKey::Enter | InputKey::Char(' ') => Some(self.submit()),
                _ => None,
            },
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        let ApiResponse::FunctionCreated(result) = response else {
            return Outcome::none();
        };
        self.submitting = false;
        match result {
            Ok(()) => Outcome::success("Function created successfully")
                .and_navigate(Route::FunctionsList),
            Err(ApiError::Validation { field, message }) => {
                self.errors.insert(field, message);
                Outcome::none()
            }
            Err(e) => {
                tracing::warn!("Failed to create function: {}", e);
                Outcome::error(format!("Failed to create function: {}", e.message()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn typed(text: &str) -> FunctionCreateView {
        let mut view = FunctionCreateView::new();
        for c in text.chars() {
            view.handle_key(&InputKey::Char(c));
        }
        view
    }

    #[test]
    fn test_defaults_to_http_template() {
        let view = FunctionCreateView::new();
        assert_eq!(view.selected_template().id, "http");
    }

    #[test]
    fn test_blank_name_is_rejected_locally() {
        let mut view = FunctionCreateView::new();
        let outcome = view.submit();
        assert!(outcome.requests.is_empty());
        assert_eq!(view.field_error("name"), Some("Name is required"));
    }

    #[test]
    fn test_submit_sends_template_code() {
        let mut view = typed("hello");
        view.focus = CreateField::Template;
        view.handle_key(&InputKey::Left);
        let outcome = view.handle_key(&InputKey::CharCtrl('s')).unwrap();
        match &outcome.requests[..] {
            [ApiRequest::CreateFunction(new)] => {
                assert_eq!(new.name, "hello");
                assert_eq!(new.code, TEMPLATES[4].code);
            }
            other => panic!("unexpected requests {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_lands_on_field() {
        let mut view = typed("Bad Name");
        view.submit();
        let outcome = view.handle_response(ApiResponse::FunctionCreated(Err(
            ApiError::Validation {
                field: "name".into(),
                message: "must be lowercase".into(),
            },
        )));
        assert!(outcome.toasts.is_empty());
        assert_eq!(view.field_error("name"), Some("must be lowercase"));
        assert!(!view.submitting);
    }

    #[test]
    fn test_other_errors_toast() {
        let mut view = typed("x");
        view.submit();
        let outcome = view.handle_response(ApiResponse::FunctionCreated(Err(
            ApiError::Status {
                status: 500,
                message: "db locked".into(),
            },
        )));
        assert_eq!(
            outcome.toasts,
            vec![(
                "Failed to create function: db locked".to_string(),
                ToastKind::Error
            )]
        );
    }

    #[test]
    fn test_success_returns_to_list() {
        let mut view = typed("x");
        view.submit();
        let outcome = view.handle_response(ApiResponse::FunctionCreated(Ok(())));
        assert_eq!(outcome.navigate, Some(Route::FunctionsList));
        assert_eq!(outcome.toasts[0].1, ToastKind::Success);
    }
}
