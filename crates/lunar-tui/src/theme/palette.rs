//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const SELECTED_BG: Color = Color::Rgb(36, 44, 58);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Foreground on filled badges and highlighted rows
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Diff ---
pub const DIFF_ADDED_BG: Color = Color::Rgb(18, 48, 30);
pub const DIFF_REMOVED_BG: Color = Color::Rgb(56, 20, 24);

// --- Log level colors ---
pub const LOG_DEBUG: Color = Color::DarkGray;
pub const LOG_INFO: Color = Color::Blue;
pub const LOG_WARN: Color = Color::Yellow;
pub const LOG_ERROR: Color = Color::Red;
