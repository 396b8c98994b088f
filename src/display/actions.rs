//! Action list formatting
//!
//! Shared by the `list` command and the interactive task panel.

use crate::models::{Action, ActionKind, ActionSet, Balance, KeyMap};

/// Format one action as a selectable line
///
/// A value that is not an integer is shown as invalid, with the raw text,
/// so the user can fix the configuration.
pub fn format_action_line(key: char, action: &Action) -> String {
    let detail = match (action.kind, action.amount) {
        (ActionKind::Earn, Some(points)) => format!("{:+} Points", points),
        (ActionKind::Spend, Some(cost)) => match cost.checked_neg() {
            Some(delta) => format!("{:+} Points", delta),
            None => format!("INVALID COST: {}", action.raw_value),
        },
        (ActionKind::Earn, None) => format!("INVALID POINTS: {}", action.raw_value),
        (ActionKind::Spend, None) => format!("INVALID COST: {}", action.raw_value),
    };

    format!(
        "[{}] ({}) {} :: {}",
        action.kind.tag(),
        key,
        action.label,
        detail
    )
}

/// Lines for every action, earn actions first, with a blank line between
/// the two groups
pub fn action_lines(actions: &ActionSet, keys: &KeyMap) -> Vec<String> {
    let mut lines = Vec::with_capacity(actions.len() + 1);

    for (index, action) in actions.iter().enumerate() {
        if index == actions.earn_count() && index > 0 {
            lines.push(String::new());
        }
        let key = keys.key_for(index).unwrap_or('?');
        lines.push(format_action_line(key, action));
    }

    lines
}

/// Format the whole action list for terminal output
pub fn format_action_list(actions: &ActionSet, keys: &KeyMap) -> String {
    if actions.is_empty() {
        return "No actions configured.".to_string();
    }

    let mut output = action_lines(actions, keys).join("\n");
    output.push('\n');
    output
}

/// Balance header text
pub fn format_balance(balance: Balance) -> String {
    format!("Point balance: {}", balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActionSet {
        ActionSet::new(
            vec![Action::earn("Dishes", " 5")],
            vec![Action::spend("Coffee", " 20"), Action::spend("Movie", " 12x")],
            25,
        )
        .unwrap()
    }

    #[test]
    fn test_format_action_line() {
        assert_eq!(
            format_action_line('a', &Action::earn("Dishes", " 5")),
            "[EARN] (a) Dishes :: +5 Points"
        );
        assert_eq!(
            format_action_line('b', &Action::spend("Coffee", "20")),
            "[BUY] (b) Coffee :: -20 Points"
        );
        assert_eq!(
            format_action_line('c', &Action::spend("Movie", " 12x")),
            "[BUY] (c) Movie :: INVALID COST:  12x"
        );
    }

    #[test]
    fn test_action_list_groups_and_keys() {
        let output = format_action_list(&sample(), &KeyMap::default());
        assert_eq!(
            output,
            "[EARN] (a) Dishes :: +5 Points\n\
             \n\
             [BUY] (b) Coffee :: -20 Points\n\
             [BUY] (c) Movie :: INVALID COST:  12x\n"
        );
    }

    #[test]
    fn test_spend_only_list_has_no_leading_blank() {
        let actions = ActionSet::new(vec![], vec![Action::spend("Coffee", "20")], 25).unwrap();
        let lines = action_lines(&actions, &KeyMap::default());
        assert_eq!(lines, vec!["[BUY] (a) Coffee :: -20 Points"]);
    }

    #[test]
    fn test_empty_list() {
        let output = format_action_list(&ActionSet::default(), &KeyMap::default());
        assert_eq!(output, "No actions configured.");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(Balance::new(25)), "Point balance: 25");
    }
}
