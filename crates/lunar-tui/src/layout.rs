//! Screen layout: breadcrumb header, body, key-hint footer

use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas inside a per-function screen
#[derive(Debug, Clone, Copy)]
pub struct FunctionAreas {
    pub title: Rect,
    pub tabs: Rect,
    pub content: Rect,
}

/// Function header (2 rows), a gap, the tab bar, then content
pub fn function_screen(body: Rect) -> FunctionAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(body);

    FunctionAreas {
        title: chunks[0],
        tabs: chunks[2],
        content: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.body.height, 22);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_function_layout() {
        let layout = function_screen(Rect::new(0, 1, 80, 22));
        assert_eq!(layout.title.y, 1);
        assert_eq!(layout.tabs.y, 4);
        assert_eq!(layout.content.y, 5);
        assert_eq!(layout.content.height, 18);
    }
}
