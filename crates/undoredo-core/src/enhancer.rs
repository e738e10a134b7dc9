/// The undo/redo store enhancer.
///
/// Wraps the consumer reducer so every dispatched action first runs through
/// it and then through a `HistoryTracker`, which decides the state the
/// store presents. `UNDO`, `REDO` and `RESET` are answered from recorded
/// snapshots; the consumer reducer is never replayed for them.
use undoredo_config::HistoryConfig;
use undoredo_mod_history::{HistoryTracker, Snapshot};

use crate::action::Action;
use crate::store::{Reducer, Store, StoreCreator, StoreEnhancer};

/// Composes `reducer` with `tracker`: consumer first, tracker on its result.
pub fn reducer_wrapper<S, A>(
    mut reducer: Reducer<S, A>,
    mut tracker: HistoryTracker<S>,
) -> Reducer<S, A>
where
    S: Snapshot + 'static,
    A: Action + 'static,
{
    Box::new(move |state: &S, action: &A| {
        let next = reducer(state, action);
        tracker.track(next, action.action_type())
    })
}

/// Adds linear undo/redo history to any store it enhances.
///
/// Each store created through the enhanced creator gets its own tracker.
#[derive(Debug, Clone, Default)]
pub struct UndoRedoEnhancer {
    config: HistoryConfig,
}

impl UndoRedoEnhancer {
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// Adds action types that bypass history tracking.
    pub fn with_filter_actions<I, T>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config = self.config.with_filter_actions(actions);
        self
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl<S, A, C> StoreEnhancer<S, A, C> for UndoRedoEnhancer
where
    S: Snapshot + 'static,
    A: Action + 'static,
    C: StoreCreator<S, A>,
{
    type Creator = UndoRedoCreator<C>;

    fn enhance(self, next: C) -> UndoRedoCreator<C> {
        UndoRedoCreator {
            next,
            config: self.config,
        }
    }
}

/// Store creator produced by `UndoRedoEnhancer`.
#[derive(Debug, Clone)]
pub struct UndoRedoCreator<C> {
    next: C,
    config: HistoryConfig,
}

impl<S, A, C> StoreCreator<S, A> for UndoRedoCreator<C>
where
    S: Snapshot + 'static,
    A: Action + 'static,
    C: StoreCreator<S, A>,
{
    fn create_store(self, reducer: Reducer<S, A>, preloaded: S) -> Store<S, A> {
        tracing::debug!(
            "Creating store with undo/redo history ({} filtered action types)",
            self.config.filter_actions.len()
        );
        let tracker = HistoryTracker::new(self.config);
        self.next.create_store(reducer_wrapper(reducer, tracker), preloaded)
    }
}
