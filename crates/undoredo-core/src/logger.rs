/// Enhancer that logs every reduced action.
use crate::action::Action;
use crate::store::{Reducer, Store, StoreCreator, StoreEnhancer};

/// Logs each action type at `debug` before it reaches the reducer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerEnhancer;

#[derive(Debug, Clone, Copy)]
pub struct LoggerCreator<C>(C);

impl<S, A, C> StoreEnhancer<S, A, C> for LoggerEnhancer
where
    S: 'static,
    A: Action + 'static,
    C: StoreCreator<S, A>,
{
    type Creator = LoggerCreator<C>;

    fn enhance(self, next: C) -> LoggerCreator<C> {
        LoggerCreator(next)
    }
}

impl<S, A, C> StoreCreator<S, A> for LoggerCreator<C>
where
    S: 'static,
    A: Action + 'static,
    C: StoreCreator<S, A>,
{
    fn create_store(self, mut reducer: Reducer<S, A>, preloaded: S) -> Store<S, A> {
        tracing::debug!("Creating logged store");
        let logged: Reducer<S, A> = Box::new(move |state: &S, action: &A| {
            tracing::debug!(action = action.action_type(), "Reducing action");
            reducer(state, action)
        });
        self.0.create_store(logged, preloaded)
    }
}
