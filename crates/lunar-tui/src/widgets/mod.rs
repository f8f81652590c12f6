//! Widget components

pub mod api_reference;
pub mod badge;
pub mod card;
pub mod code_viewer;
pub mod command_palette;
pub mod confirm_dialog;
pub mod diff_viewer;
pub mod form;
pub mod header;
pub mod kbd;
pub mod log_viewer;
pub mod modal_overlay;
pub mod pagination;
pub mod table;
pub mod tabs;
pub mod text;
pub mod toast;

pub use api_reference::ApiReference;
pub use badge::{Badge, BadgeVariant, IdPill};
pub use card::{Card, CardVariant, MessageCard};
pub use code_viewer::CodeViewer;
pub use command_palette::CommandPalette;
pub use confirm_dialog::ConfirmDialog;
pub use diff_viewer::{DiffLegend, DiffViewer};
pub use form::{Button, ButtonVariant, HelpText, InputField, TextAreaField};
pub use header::{FunctionHeader, MainHeader};
pub use kbd::{kbd, KeyHints};
pub use log_viewer::LogViewer;
pub use pagination::PaginationBar;
pub use table::DataTable;
pub use tabs::FunctionTabs;
pub use toast::ToastStack;
