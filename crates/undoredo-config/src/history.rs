/// History policy configuration shared by the tracker and the enhancer.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Action type the store dispatches once on creation.
pub const INIT_ACTION: &str = "@@redux/INIT";
pub const UNDO_ACTION: &str = "UNDO";
pub const REDO_ACTION: &str = "REDO";
pub const RESET_ACTION: &str = "RESET";

/// Action types the tracker owns. They can never be filtered out.
pub const CONTROL_ACTION_TYPES: [&str; 4] = [INIT_ACTION, UNDO_ACTION, REDO_ACTION, RESET_ACTION];

/// Where the undo floor sits and what `RESET` clears history back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorMode {
    /// History starts empty; the floor is pivot 0.
    #[default]
    Empty,
    /// History is seeded with the init state; the floor is pivot 1.
    Seeded,
}

/// What `UNDO` returns when the pivot is already at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorValue {
    /// The state captured from the init action.
    #[default]
    Default,
    /// The state handed to the tracker with the `UNDO` action.
    Incoming,
}

/// Which history entry a new state is compared against before recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// The presented entry (`history[pivot - 1]`, or the init state at pivot 0).
    #[default]
    Presented,
    /// The entry at `history[pivot]`, one past the presented one.
    PivotSlot,
}

/// Scalar comparison policy for structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Scalars must have the same type and value.
    #[default]
    Strict,
    /// Numbers, numeric strings and booleans are coerced before comparing.
    Loose,
}

/// Configuration for one history tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Action types that bypass history tracking entirely.
    pub filter_actions: BTreeSet<String>,
    pub floor_mode: FloorMode,
    pub floor_value: FloorValue,
    pub comparison: Comparison,
    pub strictness: Strictness,
}

impl HistoryConfig {
    /// Adds action types to the filter set.
    pub fn with_filter_actions<I, T>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.filter_actions.extend(actions.into_iter().map(Into::into));
        self.sanitize();
        self
    }

    /// Trims filter names and drops empty and control action names.
    pub fn sanitize(&mut self) {
        let cleaned: BTreeSet<String> = self
            .filter_actions
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .filter(|name| {
                let control = CONTROL_ACTION_TYPES.contains(name);
                if control {
                    tracing::warn!("Ignoring control action {name} in filter_actions");
                }
                !control
            })
            .map(str::to_string)
            .collect();
        self.filter_actions = cleaned;
    }

    /// Whether `action_type` bypasses the tracker.
    pub fn is_filtered(&self, action_type: &str) -> bool {
        self.filter_actions.contains(action_type)
    }
}
