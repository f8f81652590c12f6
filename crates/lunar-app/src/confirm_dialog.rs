//! Confirm dialog state.
//!
//! Data model for yes/no confirmations in front of destructive or
//! state-changing actions. The rendering widget lives in
//! lunar-tui/src/widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Dispatched when the user answers yes
    pub on_confirm: Message,
    /// Styles the dialog as destructive
    pub danger: bool,
}

impl ConfirmDialogState {
    pub fn new(title: impl Into<String>, message: impl Into<String>, on_confirm: Message) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm,
            danger: false,
        }
    }

    pub fn delete_function(id: &str, name: &str) -> Self {
        Self {
            danger: true,
            ..Self::new(
                "Delete Function",
                format!("Are you sure you want to delete \"{name}\"? This action cannot be undone."),
                Message::DeleteFunction { id: id.to_string() },
            )
        }
    }

    pub fn set_disabled(id: &str, disabled: bool) -> Self {
        let verb = if disabled { "disable" } else { "enable" };
        Self {
            danger: disabled,
            ..Self::new(
                if disabled { "Disable Function" } else { "Enable Function" },
                format!("Are you sure you want to {verb} this function?"),
                Message::SetFunctionDisabled {
                    id: id.to_string(),
                    disabled,
                },
            )
        }
    }

    pub fn activate_version(id: &str, version: u32) -> Self {
        Self::new(
            "Activate Version",
            format!("Activate version {version}?"),
            Message::ActivateVersion {
                id: id.to_string(),
                version,
            },
        )
    }
}
