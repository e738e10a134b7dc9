/// Redux-style store with a pluggable enhancer seam and an undo/redo enhancer.
///
/// `create_store` builds a `Store` from a reducer and a preloaded state,
/// letting a `StoreEnhancer` reshape the reducer first. `UndoRedoEnhancer`
/// places a `HistoryTracker` behind the consumer reducer so `UNDO`, `REDO`
/// and `RESET` work on any store it enhances.
pub mod action;
pub mod enhancer;
pub mod logger;
pub mod store;

pub use action::{Action, ControlAction, JsonAction};
pub use enhancer::{reducer_wrapper, UndoRedoCreator, UndoRedoEnhancer};
pub use logger::{LoggerCreator, LoggerEnhancer};
pub use store::{
    compose, create_store, Compose, CreateStore, Listener, ListenerId, Reducer, Store,
    StoreCreator, StoreEnhancer,
};
pub use undoredo_config::{Comparison, FloorMode, FloorValue, HistoryConfig, Strictness};
pub use undoredo_mod_history::{HistoryTracker, Snapshot};
