//! Small terminal warning
//!
//! Shown before the main screen when the terminal is below the supported
//! size. Only `y` continues.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::{MIN_HEIGHT, MIN_WIDTH};

/// Render the warning over the whole screen
pub fn render(frame: &mut Frame, width: u16, height: u16) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Window too small! Make sure it is at least {}x{}:",
                MIN_HEIGHT, MIN_WIDTH
            ),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Current columns: {} ; Current rows: {}",
            width, height
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Continue anyway? "),
            Span::styled("[Y / other key]", Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}
