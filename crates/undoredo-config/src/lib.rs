pub mod config;
pub mod history;

pub use config::AppConfig;
pub use history::{
    Comparison, FloorMode, FloorValue, HistoryConfig, Strictness, INIT_ACTION, REDO_ACTION,
    RESET_ACTION, UNDO_ACTION,
};
