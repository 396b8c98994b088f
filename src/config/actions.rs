//! Building the action list from the actions file
//!
//! The earn and spend sections are parsed separately from the same source
//! and concatenated into one [`ActionSet`].

use std::path::Path;

use super::ini::{parse_section, read_source, IniEntry};
use super::settings::Settings;
use crate::error::PointsResult;
use crate::models::{Action, ActionKind, ActionSet};

/// Contents written by `points init` when no actions file exists
pub const STARTER_ACTIONS: &str = "\
# Tasks that earn points
[item]
Wash the dishes = 5
Go for a run = 15
Finish a chapter = 10

# Rewards that cost points
[store]
Coffee = 20
Movie night = 50
";

/// Parse the actions configured in `source`
pub fn parse_actions(source: &str, settings: &Settings) -> PointsResult<ActionSet> {
    let max = settings.max_actions;
    let earn = parse_section(source, &settings.earn_section, max)?;
    let spend = parse_section(source, &settings.spend_section, max)?;

    ActionSet::new(
        to_actions(ActionKind::Earn, earn),
        to_actions(ActionKind::Spend, spend),
        max,
    )
}

/// Read and parse the actions file
pub fn load_actions<P: AsRef<Path>>(path: P, settings: &Settings) -> PointsResult<ActionSet> {
    let source = read_source(path)?;
    let actions = parse_actions(&source, settings)?;
    tracing::info!(
        earn = actions.earn_count(),
        spend = actions.spend_count(),
        "loaded actions"
    );
    Ok(actions)
}

fn to_actions(kind: ActionKind, entries: Vec<IniEntry>) -> Vec<Action> {
    entries
        .into_iter()
        .filter(|entry| {
            if entry.key.is_empty() {
                tracing::warn!(%kind, value = %entry.value, "skipping action without a label");
                return false;
            }
            true
        })
        .map(|entry| Action::new(kind, entry.key, entry.value))
        .collect()
}
