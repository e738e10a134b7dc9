/// Replay scripts: a starting graph plus a list of actions to dispatch.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use undoredo_core::{
    compose, create_store, HistoryConfig, JsonAction, LoggerEnhancer, UndoRedoEnhancer,
};

use crate::graph::{graph_reducer, GraphState};

/// A replay script as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub initial_state: GraphState,
    pub actions: Vec<JsonAction>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse script: {}", path.display()))
    }
}

/// The state presented after one dispatched action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub action: String,
    pub state: GraphState,
}

/// Dispatches every scripted action through an undo/redo-enhanced store.
pub fn replay(script: Script, config: HistoryConfig) -> Vec<Frame> {
    let enhancer = compose(LoggerEnhancer, UndoRedoEnhancer::new(config));
    let mut store = create_store(graph_reducer(), script.initial_state, enhancer);

    let mut frames = Vec::with_capacity(script.actions.len());
    for action in script.actions {
        let action_type = action.action_type.clone();
        let state = store.dispatch(action).clone();
        frames.push(Frame {
            action: action_type,
            state,
        });
    }
    tracing::info!("Replayed {} actions", frames.len());
    frames
}
