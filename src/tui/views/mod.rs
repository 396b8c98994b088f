//! TUI Views module
//!
//! Contains the header lines and the task panel, and routes the active
//! dialog on top of them.

pub mod header;
pub mod tasks;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    if let ActiveDialog::SizeWarning { width, height } = app.active_dialog {
        dialogs::size_warning::render(frame, width, height);
        return;
    }

    let layout = AppLayout::new(frame.area());

    header::render_balance(frame, app, layout.balance);
    header::render_hint(frame, app, layout.hint);
    tasks::render(frame, app, layout.tasks);
    header::render_prompt(frame, layout.prompt);

    match &app.active_dialog {
        ActiveDialog::Confirm(message) => dialogs::confirm::render(frame, message),
        ActiveDialog::Alert(message) => dialogs::confirm::render_alert(frame, message),
        ActiveDialog::SizeWarning { .. } | ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, ActionSet, Balance, KeyMap};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_app() -> App {
        let actions = ActionSet::new(
            vec![Action::earn("Dishes", " 5")],
            vec![Action::spend("Movie", "12x")],
            25,
        )
        .unwrap();
        App::new(actions, KeyMap::default(), Balance::new(42))
    }

    #[test]
    fn test_main_screen() {
        let text = screen_text(&sample_app());

        assert!(text.contains("Point balance: 42"));
        assert!(text.contains("Press 'Q' to quit."));
        assert!(text.contains("Tasks"));
        assert!(text.contains("[EARN] (a) Dishes :: +5 Points"));
        assert!(text.contains("[BUY] (b) Movie :: INVALID COST: 12x"));
        assert!(text.contains("What did you do?"));
    }

    #[test]
    fn test_messages_are_shown() {
        let mut app = sample_app();
        app.push_message("Error: something broke");

        assert!(screen_text(&app).contains("Error: something broke"));
    }

    #[test]
    fn test_confirm_dialog_overlays_screen() {
        let mut app = sample_app();
        app.open_dialog(ActiveDialog::Confirm("Buy item 'Movie' for 12x points?".into()));

        let text = screen_text(&app);
        assert!(text.contains("Confirm"));
        assert!(text.contains("Buy item 'Movie' for 12x points?"));
    }

    #[test]
    fn test_size_warning_replaces_screen() {
        let mut app = sample_app();
        app.open_dialog(ActiveDialog::SizeWarning {
            width: 20,
            height: 10,
        });

        let text = screen_text(&app);
        assert!(text.contains("Window too small!"));
        assert!(!text.contains("Tasks"));
    }
}
