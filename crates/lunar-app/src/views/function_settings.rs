//! Settings tab.
//!
//! Five sections share one screen: general fields, environment variables,
//! network info, the enable toggle and the danger zone. Only the focused
//! section receives keys. Status changes and deletion go through the
//! confirm dialog; everything else saves directly with Ctrl+S.

use lunar_api::{ApiError, FunctionPatch};
use lunar_core::Function;

use crate::confirm_dialog::ConfirmDialogState;
use crate::env_editor::EnvEditor;
use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;
use crate::text_input::TextInput;

use super::{load_failed, Loadable, Outcome, ViewContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    General,
    Environment,
    Network,
    Status,
    Danger,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 5] = [
        SettingsSection::General,
        SettingsSection::Environment,
        SettingsSection::Network,
        SettingsSection::Status,
        SettingsSection::Danger,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Environment => "Environment Variables",
            SettingsSection::Network => "Network",
            SettingsSection::Status => "Function Status",
            SettingsSection::Danger => "Danger Zone",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneralField {
    #[default]
    Name,
    Description,
}

/// Methods the invocation endpoint accepts
pub const SUPPORTED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

#[derive(Debug, Clone)]
pub struct FunctionSettingsView {
    pub id: String,
    pub function: Loadable<Function>,
    pub section: SettingsSection,
    pub field: GeneralField,
    pub name: TextInput,
    pub description: TextInput,
    /// Inline error under the name or description input
    pub general_error: Option<(GeneralField, String)>,
    pub env: EnvEditor,
    /// Last failed environment save, shown above the editor
    pub env_error: Option<String>,
    /// Staged value of the enable toggle
    pub enabled: bool,
    pub saving: bool,
    base_url: String,
}

impl FunctionSettingsView {
    pub fn new(id: &str, ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            function: Loadable::Loading,
            section: SettingsSection::General,
            field: GeneralField::Name,
            name: TextInput::default(),
            description: TextInput::default(),
            general_error: None,
            env: EnvEditor::default(),
            env_error: None,
            enabled: true,
            saving: false,
            base_url: ctx.base_url.clone(),
        };
        (view, vec![ApiRequest::GetFunction { id: id.to_string() }])
    }

    /// Public endpoint that runs this function
    pub fn invocation_url(&self) -> String {
        format!("{}/fn/{}", self.base_url.trim_end_matches('/'), self.id)
    }

    /// New name, while it differs from the server copy
    pub fn edited_name(&self) -> Option<String> {
        let func = self.function.loaded()?;
        let value = self.name.value();
        (value != func.name).then(|| value.to_string())
    }

    pub fn edited_description(&self) -> Option<String> {
        let func = self.function.loaded()?;
        let value = self.description.value();
        (value != func.description.as_deref().unwrap_or_default()).then(|| value.to_string())
    }

    /// The `disabled` value to send, when the toggle differs from the server
    pub fn status_change(&self) -> Option<bool> {
        let func = self.function.loaded()?;
        (self.enabled == func.disabled).then_some(!self.enabled)
    }

    /// Load `func` into the inputs. Runs before `self.function` is replaced,
    /// so fields with staged edits are detected against the previous copy
    /// and left alone.
    fn seed(&mut self, func: &Function) {
        if self.edited_name().is_none() {
            self.name = TextInput::new(func.name.as_str());
        }
        if self.edited_description().is_none() {
            self.description = TextInput::new(func.description.as_deref().unwrap_or_default());
        }
        if !self.env.has_changes() {
            self.env = EnvEditor::from_vars(&func.env_vars);
        }
        if self.status_change().is_none() {
            self.enabled = !func.disabled;
        }
    }

    fn refetch(&self) -> ApiRequest {
        ApiRequest::GetFunction {
            id: self.id.clone(),
        }
    }

    pub fn save_general(&mut self) -> Outcome {
        if self.saving {
            return Outcome::none();
        }
        let patch = FunctionPatch {
            name: self.edited_name(),
            description: self.edited_description(),
            ..Default::default()
        };
        if patch.is_empty() {
            return Outcome::info("No changes to save");
        }
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.general_error = Some((GeneralField::Name, "Name is required".to_string()));
            return Outcome::none();
        }
        self.general_error = None;
        self.saving = true;
        Outcome::request(ApiRequest::UpdateFunction {
            id: self.id.clone(),
            patch,
        })
    }

    pub fn save_env(&mut self) -> Outcome {
        if self.saving {
            return Outcome::none();
        }
        if !self.env.has_changes() {
            return Outcome::info("No changes to save");
        }
        self.env_error = None;
        self.saving = true;
        Outcome::request(ApiRequest::UpdateEnv {
            id: self.id.clone(),
            env_vars: self.env.collect(),
        })
    }

    pub fn save_status(&self) -> Outcome {
        match self.status_change() {
            Some(disabled) => {
                Outcome::confirm(ConfirmDialogState::set_disabled(&self.id, disabled))
            }
            None => Outcome::info("No changes to save"),
        }
    }

    pub fn request_delete(&self) -> Outcome {
        match self.function.loaded() {
            Some(func) => Outcome::confirm(ConfirmDialogState::delete_function(&func.id, &func.name)),
            None => Outcome::none(),
        }
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::Tab => {
                self.section = self.section.next();
                return Some(Outcome::none());
            }
            InputKey::BackTab => {
                self.section = self.section.prev();
                return Some(Outcome::none());
            }
            _ => {}
        }
        if self.function.loaded().is_none() {
            return None;
        }

        match self.section {
            SettingsSection::General => self.general_key(key),
            SettingsSection::Environment => self.env_key(key),
            SettingsSection::Network => None,
            SettingsSection::Status => match key {
                InputKey::Char(' ') | InputKey::Enter => {
                    self.enabled = !self.enabled;
                    Some(Outcome::none())
                }
                InputKey::CharCtrl('s') => Some(self.save_status()),
                _ => None,
            },
            SettingsSection::Danger => match key {
                InputKey::Enter | InputKey::Char('d') => Some(self.request_delete()),
                _ => None,
            },
        }
    }

    fn general_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::Up => self.field = GeneralField::Name,
            InputKey::Down => self.field = GeneralField::Description,
            InputKey::CharCtrl('s') => return Some(self.save_general()),
            other => {
                let input = match self.field {
                    GeneralField::Name => &mut self.name,
                    GeneralField::Description => &mut self.description,
                };
                let outcome = input.handle_key(other);
                if outcome.edited() {
                    self.general_error = None;
                }
                return outcome.consumed().then(Outcome::none);
            }
        }
        Some(Outcome::none())
    }

    fn env_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::Up => self.env.select_previous(),
            InputKey::Down => self.env.select_next(),
            InputKey::Enter => self.env.toggle_column(),
            InputKey::CharCtrl('n') => self.env.add(),
            InputKey::CharCtrl('d') => self.env.toggle_remove(self.env.selected),
            InputKey::CharCtrl('s') => return Some(self.save_env()),
            other => return self.env.edit_selected(other).consumed().then(Outcome::none),
        }
        Some(Outcome::none())
    }

    fn general_failed(&mut self, err: ApiError) -> Outcome {
        tracing::warn!("Failed to save settings: {}", err);
        if let ApiError::Validation { field, message } = &err {
            let target = match field.as_str() {
                "name" => Some(GeneralField::Name),
                "description" => Some(GeneralField::Description),
                _ => None,
            };
            if let Some(target) = target {
                self.general_error = Some((target, message.clone()));
                return Outcome::none();
            }
        }
        Outcome::error(format!("Failed to save settings: {}", err.message()))
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Function(Ok(func)) => {
                self.seed(&func);
                self.function = Loadable::Loaded(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => load_failed(&mut self.function, "function", &e),
            ApiResponse::FunctionUpdated { patch, result } => {
                self.saving = false;
                match (patch.disabled, result) {
                    (Some(disabled), Ok(())) => {
                        let verb = if disabled { "disabled" } else { "enabled" };
                        Outcome::success(format!("Function {verb} successfully"))
                            .and_request(self.refetch())
                    }
                    (Some(_), Err(e)) => {
                        tracing::warn!("Failed to update status: {}", e);
                        Outcome::error(format!("Failed to update status: {}", e.message()))
                    }
                    (None, Ok(())) => {
                        Outcome::success("Settings saved successfully").and_request(self.refetch())
                    }
                    (None, Err(e)) => self.general_failed(e),
                }
            }
            ApiResponse::EnvUpdated(result) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        self.env.commit();
                        Outcome::success("Environment variables updated")
                            .and_request(self.refetch())
                    }
                    Err(e) => {
                        tracing::warn!("Failed to update environment variables: {}", e);
                        self.env_error = Some(e.message().to_string());
                        Outcome::none()
                    }
                }
            }
            ApiResponse::FunctionDeleted(Ok(())) => {
                Outcome::success("Function deleted successfully").and_navigate(Route::FunctionsList)
            }
            ApiResponse::FunctionDeleted(Err(e)) => {
                tracing::warn!("Failed to delete function: {}", e);
                Outcome::error(format!("Failed to delete function: {}", e.message()))
            }
            _ => Outcome::none(),
        }
    }
}
