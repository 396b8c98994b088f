//! Action model
//!
//! An action is one configured way to earn points (a task) or spend them
//! (a reward). Actions are kept in file order; their position in the
//! combined earn-then-spend sequence is the stable selection index.

use std::fmt;

use crate::error::{PointsError, PointsResult};

/// Whether an action adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Completing a task earns points
    Earn,
    /// Buying a reward costs points
    Spend,
}

impl ActionKind {
    /// Tag shown in front of the action in listings
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Earn => "EARN",
            Self::Spend => "BUY",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earn => write!(f, "earn"),
            Self::Spend => write!(f, "spend"),
        }
    }
}

/// One earnable or purchasable line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Display name, taken from the configuration key
    pub label: String,
    /// Earn or spend
    pub kind: ActionKind,
    /// The value text exactly as configured, kept for diagnostics
    pub raw_value: String,
    /// Point magnitude, `None` when `raw_value` is not an integer
    pub amount: Option<i64>,
}

impl Action {
    /// Create an action, parsing the point value up front
    pub fn new(kind: ActionKind, label: impl Into<String>, raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        Self {
            label: label.into(),
            kind,
            amount: parse_amount(&raw_value),
            raw_value,
        }
    }

    /// Create an earn action
    pub fn earn(label: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self::new(ActionKind::Earn, label, raw_value)
    }

    /// Create a spend action
    pub fn spend(label: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self::new(ActionKind::Spend, label, raw_value)
    }

    /// The point magnitude, or a parse error naming this action
    pub fn amount(&self) -> PointsResult<i64> {
        self.amount
            .ok_or_else(|| PointsError::parse(self.kind, &self.label, &self.raw_value))
    }

    /// The value text without surrounding whitespace
    pub fn display_value(&self) -> &str {
        self.raw_value.trim()
    }

    /// Question shown before the action is applied
    pub fn confirmation_message(&self) -> String {
        match self.kind {
            ActionKind::Earn => format!(
                "Earn {} points from item '{}'?",
                self.display_value(),
                self.label
            ),
            ActionKind::Spend => format!(
                "Buy item '{}' for {} points?",
                self.label,
                self.display_value()
            ),
        }
    }
}

/// Parse a configured point value as a base-10 signed integer
///
/// Surrounding whitespace is skipped; anything else left over makes the
/// value invalid.
pub fn parse_amount(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// All configured actions: earn actions first, then spend actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    actions: Vec<Action>,
    earn_count: usize,
}

impl ActionSet {
    /// Build the combined sequence, enforcing the selectable maximum
    pub fn new(earn: Vec<Action>, spend: Vec<Action>, max: usize) -> PointsResult<Self> {
        let total = earn.len() + spend.len();
        if total > max {
            return Err(PointsError::CapacityExceeded {
                section: "all sections".to_string(),
                found: total,
                max,
            });
        }

        let earn_count = earn.len();
        let mut actions = earn;
        actions.extend(spend);

        Ok(Self {
            actions,
            earn_count,
        })
    }

    /// Total number of actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if no actions are configured
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of earn actions
    pub fn earn_count(&self) -> usize {
        self.earn_count
    }

    /// Number of spend actions
    pub fn spend_count(&self) -> usize {
        self.actions.len() - self.earn_count
    }

    /// Get the action at a selection index
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    /// Iterate over all actions in selection order
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 25"), Some(25));
        assert_eq!(parse_amount("-4"), Some(-4));
        assert_eq!(parse_amount("+7 "), Some(7));
        assert_eq!(parse_amount("12x"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn test_amount_error_keeps_raw_text() {
        let action = Action::spend("Movie night", "12x");
        let err = action.amount().unwrap_err();
        match err {
            PointsError::Parse { kind, label, raw } => {
                assert_eq!(kind, ActionKind::Spend);
                assert_eq!(label, "Movie night");
                assert_eq!(raw, "12x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_confirmation_messages() {
        assert_eq!(
            Action::earn("Dishes", " 5").confirmation_message(),
            "Earn 5 points from item 'Dishes'?"
        );
        assert_eq!(
            Action::spend("Coffee", " 20").confirmation_message(),
            "Buy item 'Coffee' for 20 points?"
        );
    }

    #[test]
    fn test_action_set_orders_earn_before_spend() {
        let set = ActionSet::new(
            vec![Action::earn("a", "1"), Action::earn("b", "2")],
            vec![Action::spend("c", "3")],
            25,
        )
        .unwrap();

        assert_eq!(set.len(), set.earn_count() + set.spend_count());
        assert_eq!(set.get(0).unwrap().label, "a");
        assert_eq!(set.get(2).unwrap().kind, ActionKind::Spend);
        assert!(set.get(3).is_none());
        assert_eq!(set.get(2).unwrap().label, "c");
    }

    #[test]
    fn test_action_set_allows_duplicate_labels() {
        let set = ActionSet::new(
            vec![Action::earn("Run", "5"), Action::earn("Run", "10")],
            vec![],
            25,
        )
        .unwrap();
        assert_eq!(set.get(1).unwrap().amount, Some(10));
    }

    #[test]
    fn test_action_set_capacity() {
        let earn = (0..20).map(|i| Action::earn(format!("e{i}"), "1")).collect();
        let spend = (0..10).map(|i| Action::spend(format!("s{i}"), "1")).collect();

        let err = ActionSet::new(earn, spend, 26).unwrap_err();
        assert!(matches!(
            err,
            PointsError::CapacityExceeded { found: 30, max: 26, .. }
        ));
    }
}
