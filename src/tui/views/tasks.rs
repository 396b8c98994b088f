//! Task panel
//!
//! Lists every action with its selection key, followed by any in-place
//! diagnostics.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::action_lines;
use crate::models::ActionKind;
use crate::tui::app::App;

/// Render the task panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Tasks ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    let mut lines = vec![Line::from("")];

    if app.actions.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No actions configured.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut actions = app.actions.iter();
    for text in action_lines(&app.actions, &app.keys) {
        if text.is_empty() {
            lines.push(Line::from(""));
            continue;
        }

        let style = match actions.next() {
            Some(action) if action.amount.is_none() => Style::default().fg(Color::Red),
            Some(action) if action.kind == ActionKind::Earn => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Cyan),
        };
        lines.push(Line::from(Span::styled(format!("   {}", text), style)));
    }

    if !app.messages.is_empty() {
        lines.push(Line::from(""));
        for message in &app.messages {
            lines.push(Line::from(Span::styled(
                format!("   {}", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
