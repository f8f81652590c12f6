use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use lunar_app::views::LoginView;

use crate::widgets::modal_overlay::centered_rect;
use crate::widgets::{Button, Card, HelpText, InputField};

pub(super) fn render(frame: &mut Frame, area: Rect, view: &LoginView) {
    let rect = centered_rect(60, 11, area);
    let inner = Card::new("Lunar Console")
        .subtitle("Enter your API key to continue")
        .focused(true)
        .render_frame(rect, frame.buffer_mut());

    let help = match &view.error {
        Some(error) => HelpText::Error(error),
        None => HelpText::Normal("The key is sent once to start a session"),
    };
    let input = InputField::new("API Key", &view.api_key)
        .focused(!view.submitting)
        .placeholder("Paste your API key")
        .help(Some(help));
    let [input_area, _, button_area] = Layout::vertical([
        Constraint::Length(input.height()),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(input, input_area);
    let label = if view.submitting {
        "Signing in..."
    } else {
        "Sign in"
    };
    frame.render_widget(
        Button::new(label).disabled(!view.can_submit()),
        button_area,
    );
}
