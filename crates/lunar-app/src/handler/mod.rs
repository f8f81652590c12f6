//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key routing between the confirm dialog, palette, screen and globals
//! - `navigation`: Route changes and screen outcome application

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::request::ApiCall;

pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run backend calls on background tasks
    Api(Vec<ApiCall>),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Dispatch `calls`, or nothing when there are none
    pub fn api(calls: Vec<ApiCall>) -> Self {
        if calls.is_empty() {
            Self::none()
        } else {
            Self::action(UpdateAction::Api(calls))
        }
    }
}
