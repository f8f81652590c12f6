//! Tab bar shown on every per-function screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use lunar_app::route::FunctionTab;

use crate::theme::styles;

pub struct FunctionTabs {
    /// `None` when no tab matches the screen (e.g. the diff view)
    active: Option<FunctionTab>,
}

impl FunctionTabs {
    pub fn new(active: Option<FunctionTab>) -> Self {
        Self { active }
    }

    /// `1 Code`, `2 Versions` and so on; the digit is the shortcut
    fn titles() -> Vec<Line<'static>> {
        FunctionTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), styles::text_muted()),
                    Span::raw(tab.label()),
                ])
            })
            .collect()
    }
}

impl Widget for FunctionTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(Self::titles())
            .select(self.active.map(|t| t.index()))
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");

        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        tabs.render(padded, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_tabs_render_in_order() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(FunctionTabs::new(Some(FunctionTab::Versions)), term.area());
        let line = &term.lines()[0];
        let positions: Vec<usize> = ["Code", "Versions", "Executions", "Settings", "Test"]
            .iter()
            .map(|label| line.find(label).expect("tab label"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(FunctionTabs::new(Some(FunctionTab::Code)), term.area());
        let line = &term.lines()[0];
        let x = line.find("Code").expect("code") as u16;
        let cell = term.buffer().cell((x, 0)).expect("cell");
        assert_eq!(cell.bg, crate::theme::palette::ACCENT);
    }
}
