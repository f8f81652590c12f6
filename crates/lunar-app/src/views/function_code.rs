//! Code tab: the active version's source in an editor

use lunar_api::FunctionPatch;
use lunar_core::Function;

use crate::api_reference::{self, ApiSection, LUA_API_SECTIONS};
use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};
use crate::text_input::TextArea;

use super::{load_failed, Loadable, Outcome};

/// Spaces inserted for Tab while editing
const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct FunctionCodeView {
    pub id: String,
    pub function: Loadable<Function>,
    pub editor: TextArea,
    /// Keys go to the editor instead of screen bindings
    pub editing: bool,
    pub saving: bool,
    /// Selected tab of the API reference panel
    pub api_tab: usize,
}

impl FunctionCodeView {
    pub fn new(id: &str) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            function: Loadable::Loading,
            editor: TextArea::default(),
            editing: false,
            saving: false,
            api_tab: 0,
        };
        (view, vec![ApiRequest::GetFunction { id: id.to_string() }])
    }

    /// Buffer contents, only while they differ from the active version
    pub fn edited_code(&self) -> Option<String> {
        let func = self.function.loaded()?;
        let text = self.editor.text();
        (text != func.active_version.code).then_some(text)
    }

    pub fn api_section(&self) -> &'static ApiSection {
        api_reference::section(self.api_tab)
    }

    fn cycle_api_tab(&mut self, forward: bool) {
        let count = LUA_API_SECTIONS.len();
        self.api_tab = if forward {
            (self.api_tab + 1) % count
        } else {
            (self.api_tab + count - 1) % count
        };
    }

    pub fn save(&mut self) -> Outcome {
        if self.saving {
            return Outcome::none();
        }
        match self.edited_code() {
            Some(code) => {
                self.saving = true;
                Outcome::request(ApiRequest::UpdateFunction {
                    id: self.id.clone(),
                    patch: FunctionPatch::code(code),
                })
            }
            None => Outcome::info("No changes to save"),
        }
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        if *key == InputKey::CharCtrl('s') {
            return Some(self.save());
        }

        if self.editing {
            return match key {
                InputKey::Esc => {
                    self.editing = false;
                    Some(Outcome::none())
                }
                InputKey::Tab => {
                    self.editor.insert_str(INDENT);
                    Some(Outcome::none())
                }
                other => self.editor.handle_key(other).consumed().then(Outcome::none),
            };
        }

        match key {
            InputKey::Enter | InputKey::Char('e') | InputKey::Char('i')
                if self.function.loaded().is_some() =>
            {
                self.editing = true;
                Some(Outcome::none())
            }
            InputKey::Tab | InputKey::Char(']') => {
                self.cycle_api_tab(true);
                Some(Outcome::none())
            }
            InputKey::BackTab | InputKey::Char('[') => {
                self.cycle_api_tab(false);
                Some(Outcome::none())
            }
            InputKey::Up
            | InputKey::Down
            | InputKey::PageUp
            | InputKey::PageDown
            | InputKey::Home
            | InputKey::End => {
                self.editor.handle_key(key);
                Some(Outcome::none())
            }
            _ => None,
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Function(Ok(func)) => {
                // Unsaved edits and the cursor survive a refetch
                let dirty = self.edited_code().is_some();
                if !dirty && self.editor.text() != func.active_version.code {
                    self.editor = TextArea::new(&func.active_version.code);
                }
                self.function = Loadable::Loaded(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => load_failed(&mut self.function, "function", &e),
            ApiResponse::FunctionUpdated { result, .. } => {
                self.saving = false;
                match result {
                    Ok(()) => Outcome::success("Code saved successfully").and_request(
                        ApiRequest::GetFunction {
                            id: self.id.clone(),
                        },
                    ),
                    Err(e) => {
                        tracing::warn!("Failed to save code: {}", e);
                        Outcome::error(format!("Failed to save code: {}", e.message()))
                    }
                }
            }
            _ => Outcome::none(),
        }
    }
}
