//! # lunar-tui - Terminal front end
//!
//! Draws [`lunar_app::AppState`] with ratatui and feeds crossterm input back
//! into the update loop.
//!
//! - [`run`] - Entry point: terminal setup, event loop, teardown
//! - [`render::view`] - Pure frame rendering for the current state
//! - [`widgets`] - Badges, cards, tables, diff and log viewers, overlays

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use render::view;
pub use runner::run;
