/// Linear undo/redo history tracker.
///
/// The tracker receives every state the store is about to present, together
/// with the action type that produced it, and decides what the store should
/// actually present. Distinct states are appended to the history; `UNDO` and
/// `REDO` move a pivot through it; `RESET` collapses it to the floor.
use undoredo_config::history::{
    Comparison, FloorMode, FloorValue, HistoryConfig, INIT_ACTION, REDO_ACTION, RESET_ACTION,
    UNDO_ACTION,
};

use crate::equality::Snapshot;

/// Tracks the undo/redo history of a single store.
///
/// `history[pivot - 1]` is the presented entry when `pivot > 0`; entries at
/// `pivot..` are the redo tail. `0 <= pivot <= history.len()` always holds.
pub struct HistoryTracker<S> {
    /// Recorded snapshots, oldest first.
    history: Vec<S>,
    /// One past the presented entry.
    pivot: usize,
    /// State captured from the init action.
    default_value: Option<S>,
    config: HistoryConfig,
}

impl<S> std::fmt::Debug for HistoryTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryTracker")
            .field("history_len", &self.history.len())
            .field("pivot", &self.pivot)
            .field("has_default", &self.default_value.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<S: Snapshot> HistoryTracker<S> {
    /// Creates a tracker with empty history.
    pub fn new(mut config: HistoryConfig) -> Self {
        config.sanitize();
        Self {
            history: Vec::new(),
            pivot: 0,
            default_value: None,
            config,
        }
    }

    /// Adds action types that bypass the tracker.
    pub fn with_filter_actions<I, T>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config = self.config.with_filter_actions(actions);
        self
    }

    /// Decides the next presented state for `state` produced by `action_type`.
    pub fn track(&mut self, state: S, action_type: &str) -> S {
        if self.config.is_filtered(action_type) {
            tracing::trace!("Action {action_type} is filtered, history untouched");
            return state;
        }
        match action_type {
            UNDO_ACTION => self.undo(state),
            REDO_ACTION => self.redo(state),
            RESET_ACTION => self.reset(state),
            INIT_ACTION => self.init(state),
            _ => self.record(state, action_type),
        }
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// One past the index of the presented snapshot.
    pub fn pivot(&self) -> usize {
        self.pivot
    }

    /// Whether `UNDO` would move the pivot.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.pivot > self.floor()
    }

    /// Whether `REDO` would move the pivot.
    pub fn can_redo(&self) -> bool {
        self.pivot < self.history.len()
    }

    /// The snapshot currently presented, falling back to the init state.
    pub fn present(&self) -> Option<&S> {
        match self.pivot.checked_sub(1) {
            Some(index) => self.history.get(index),
            None => self.default_value.as_ref(),
        }
    }

    /// The state captured from the init action, if any.
    pub fn default_value(&self) -> Option<&S> {
        self.default_value.as_ref()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    fn floor(&self) -> usize {
        match self.config.floor_mode {
            FloorMode::Empty => 0,
            FloorMode::Seeded => 1,
        }
    }

    fn default_or(&self, state: S) -> S {
        self.default_value.clone().unwrap_or(state)
    }

    fn undo(&mut self, state: S) -> S {
        if self.history.is_empty() || self.pivot <= self.floor() {
            tracing::trace!("Undo at floor (pivot {})", self.pivot);
            return match self.config.floor_value {
                FloorValue::Default => self.default_or(state),
                FloorValue::Incoming => state,
            };
        }
        self.pivot -= 1;
        tracing::trace!("Undo to pivot {}", self.pivot);
        match self.pivot.checked_sub(1) {
            Some(index) => self.history[index].clone(),
            None => self.default_or(state),
        }
    }

    fn redo(&mut self, state: S) -> S {
        if self.pivot >= self.history.len() {
            tracing::trace!("Nothing to redo (pivot {})", self.pivot);
            return state;
        }
        self.pivot += 1;
        tracing::trace!("Redo to pivot {}", self.pivot);
        self.history[self.pivot - 1].clone()
    }

    fn reset(&mut self, state: S) -> S {
        self.history.clear();
        self.pivot = 0;
        if let (FloorMode::Seeded, Some(default)) = (self.config.floor_mode, &self.default_value) {
            self.history.push(default.clone());
            self.pivot = 1;
        }
        tracing::debug!("History reset to {} entries", self.history.len());
        self.default_or(state)
    }

    fn init(&mut self, state: S) -> S {
        self.default_value = Some(state.clone());
        if self.config.floor_mode == FloorMode::Seeded && self.history.is_empty() {
            self.history.push(state.clone());
            self.pivot = 1;
        }
        tracing::debug!("Captured initial state");
        state
    }

    fn record(&mut self, state: S, action_type: &str) -> S {
        let strictness = self.config.strictness;
        let unchanged = self
            .comparison_entry()
            .is_some_and(|entry| state.same_as(entry, strictness));
        if unchanged {
            tracing::trace!("Action {action_type} left state unchanged");
            return state;
        }

        if self.pivot < self.history.len() {
            tracing::trace!("Dropping {} redo entries", self.history.len() - self.pivot);
        }
        self.history.truncate(self.pivot);
        self.history.push(state.clone());
        self.pivot += 1;
        tracing::trace!("Recorded {action_type} at pivot {}", self.pivot);
        state
    }

    fn comparison_entry(&self) -> Option<&S> {
        match self.config.comparison {
            Comparison::Presented => self.present(),
            Comparison::PivotSlot => self.history.get(self.pivot),
        }
    }
}

impl<S: Snapshot> Default for HistoryTracker<S> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
