//! Header and prompt lines
//!
//! Shows the point balance, the quit hint and the selection prompt

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_balance;
use crate::tui::app::App;

/// Render the balance line
pub fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let color = if app.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(Span::styled(
        format_balance(app.balance),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the quit hint
pub fn render_hint(frame: &mut Frame, app: &App, area: Rect) {
    let hint = format!(
        "Press '{}' to quit.",
        app.keys.quit_key().to_ascii_uppercase()
    );
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Render the selection prompt
pub fn render_prompt(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("What did you do? ").style(Style::default().fg(Color::White)),
        area,
    );
}
