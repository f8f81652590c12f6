//! Small inline labels: status badges, version badges and ID pills

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use lunar_core::ExecutionStatus;

use crate::theme::{palette, styles};

use super::text::truncate;

/// Longest id an [`IdPill`] shows before cutting
const ID_PILL_MAX: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Destructive,
        BadgeVariant::Outline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }

    fn style(&self) -> Style {
        let filled = |bg| {
            Style::default()
                .fg(palette::CONTRAST_FG)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        };
        match self {
            BadgeVariant::Default => filled(palette::ACCENT),
            BadgeVariant::Secondary => filled(palette::TEXT_SECONDARY),
            BadgeVariant::Success => filled(palette::STATUS_GREEN),
            BadgeVariant::Warning => filled(palette::STATUS_YELLOW),
            BadgeVariant::Destructive => filled(palette::STATUS_RED),
            BadgeVariant::Outline => styles::text_secondary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// "Enabled"/"Disabled" for a function
    pub fn function_status(disabled: bool) -> Self {
        if disabled {
            Self::new("Disabled", BadgeVariant::Destructive)
        } else {
            Self::new("Enabled", BadgeVariant::Success)
        }
    }

    pub fn execution_status(status: ExecutionStatus) -> Self {
        let variant = match status {
            ExecutionStatus::Success => BadgeVariant::Success,
            ExecutionStatus::Error => BadgeVariant::Destructive,
            ExecutionStatus::Unknown => BadgeVariant::Secondary,
        };
        Self::new(status.label(), variant)
    }

    /// Badge for an HTTP status code
    pub fn http_status(status: u16) -> Self {
        let variant = match status {
            200..=299 => BadgeVariant::Success,
            400..=499 => BadgeVariant::Warning,
            _ => BadgeVariant::Destructive,
        };
        Self::new(status.to_string(), variant)
    }

    pub fn version(label: impl Into<String>) -> Self {
        Self::new(label, BadgeVariant::Outline)
    }

    pub fn span(&self) -> Span<'static> {
        let text = match self.variant {
            BadgeVariant::Outline => format!("[{}]", self.label),
            _ => format!(" {} ", self.label),
        };
        Span::styled(text, self.variant.style())
    }

    pub fn width(&self) -> u16 {
        self.span().width() as u16
    }
}

impl Widget for Badge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.span()).render(area, buf);
    }
}

/// Monospace ID shown next to a function name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPill {
    id: String,
}

impl IdPill {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!(" {} ", truncate(&self.id, ID_PILL_MAX)),
            Style::default().fg(palette::TEXT_SECONDARY).bg(palette::SELECTED_BG),
        )
    }
}

impl Widget for IdPill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.span()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_status_badges() {
        assert_eq!(Badge::function_status(false).span().content, " Enabled ");
        assert_eq!(Badge::function_status(true).span().content, " Disabled ");
        assert_eq!(
            Badge::execution_status(ExecutionStatus::Error).span().content,
            " ERROR "
        );
    }

    #[test]
    fn test_outline_badge_is_bracketed() {
        let badge = Badge::version("v3");
        assert_eq!(badge.span().content, "[v3]");
        assert_eq!(badge.width(), 4);
    }

    #[test]
    fn test_http_status_variant() {
        assert_eq!(Badge::http_status(201).variant, BadgeVariant::Success);
        assert_eq!(Badge::http_status(404).variant, BadgeVariant::Warning);
        assert_eq!(Badge::http_status(500).variant, BadgeVariant::Destructive);
    }

    #[test]
    fn test_id_pill_renders() {
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(IdPill::new("fn_123"), term.area());
        assert!(term.buffer_contains("fn_123"));
    }

    #[test]
    fn test_id_pill_truncates_long_ids() {
        let pill = IdPill::new("0123456789abcdefghijklmnop");
        assert_eq!(pill.span().content, " 0123456789abcde… ");
    }
}
