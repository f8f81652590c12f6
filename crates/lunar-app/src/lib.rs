//! # lunar-app - Application state and orchestration
//!
//! The Elm-style core of Lunar Console: [`AppState`] is the model,
//! [`Message`] the events, and [`handler::update`] the only place state
//! changes. Backend calls leave `update()` as [`UpdateAction`]s, run on tokio
//! tasks in [`actions`], and come back as `Message::Api`.
//!
//! Nothing here depends on the terminal; keys arrive as [`InputKey`] so the
//! whole loop can be driven from tests.
//!
//! ## Public API
//! - [`AppState`], [`Message`], [`UpdateAction`], [`UpdateResult`]
//! - [`process::process_message`] - run a message to completion
//! - [`route::Route`] - screen addressing and path grammar
//! - [`views`] - per-screen state
//! - [`config`] - settings file and environment layering
//! - [`api_reference`] - Lua runtime reference shown beside the code editor

pub mod actions;
pub mod api_reference;
pub mod code_examples;
pub mod command_palette;
pub mod config;
pub mod confirm_dialog;
pub mod env_editor;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pagination;
pub mod process;
pub mod request;
pub mod route;
pub mod state;
pub mod templates;
pub mod text_input;
pub mod toast;
pub mod views;

pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use route::Route;
pub use state::AppState;
