//! Layout definitions for the TUI
//!
//! Two header lines (balance, quit hint), the task panel inset from the
//! screen edges, and the prompt line near the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Smallest terminal the layout is designed for
pub const MIN_WIDTH: u16 = 30;
/// Smallest terminal the layout is designed for
pub const MIN_HEIGHT: u16 = 14;

const PANEL_MARGIN_X: u16 = 6;
const PROMPT_INDENT: u16 = 10;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Balance line
    pub balance: Rect,
    /// Quit hint line
    pub hint: Rect,
    /// Bordered task list
    pub tasks: Rect,
    /// "What did you do?" line
    pub prompt: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Balance
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Spacer
                Constraint::Min(3),    // Tasks
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Bottom edge
            ])
            .split(area);

        let tasks = inset_horizontal(vertical[3], PANEL_MARGIN_X);
        let prompt = inset_left(vertical[5], PROMPT_INDENT);

        Self {
            balance: vertical[0],
            hint: vertical[1],
            tasks,
            prompt,
        }
    }
}

/// Whether an area is smaller than the layout supports
pub fn is_too_small(width: u16, height: u16) -> bool {
    width < MIN_WIDTH || height < MIN_HEIGHT
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 4);
    Rect::new(
        area.x + margin,
        area.y,
        area.width.saturating_sub(margin * 2),
        area.height,
    )
}

fn inset_left(area: Rect, indent: u16) -> Rect {
    let indent = indent.min(area.width / 4);
    Rect::new(
        area.x + indent,
        area.y,
        area.width.saturating_sub(indent),
        area.height,
    )
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
