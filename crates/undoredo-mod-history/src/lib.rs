/// Linear undo/redo history tracking for reducer-driven state.
///
/// Provides a `HistoryTracker` that sits behind a reducer and records each
/// distinct resulting state, answering `UNDO`, `REDO` and `RESET` from its
/// own snapshots. Snapshot comparison is structural (see `equality`).
pub mod equality;
pub mod tracker;

pub use equality::{structurally_equal, Snapshot};
pub use tracker::HistoryTracker;
pub use undoredo_config::{Comparison, FloorMode, FloorValue, HistoryConfig, Strictness};
