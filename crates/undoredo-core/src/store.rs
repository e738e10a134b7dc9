/// Store, store creators and the enhancer seam.
///
/// A `Store` owns the current state and a reducer. Store creation goes
/// through a `StoreCreator`; enhancers wrap a creator to reshape the reducer
/// before the store is built, the way `createStore` enhancers do in Redux.
use crate::action::{Action, ControlAction};

/// Computes the next state from the current state and an action.
pub type Reducer<S, A> = Box<dyn FnMut(&S, &A) -> S>;

/// Called with the new state after every dispatch.
pub type Listener<S> = Box<dyn FnMut(&S)>;

/// Handle returned by `Store::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holds the current state and routes dispatched actions through the reducer.
///
/// Dispatch takes `&mut self`, so actions are always reduced one at a time.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(ListenerId, Listener<S>)>,
    next_listener: u64,
}

impl<S, A> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S, A: Action> Store<S, A> {
    /// Creates a store and dispatches the init action through `reducer`.
    pub fn new(reducer: Reducer<S, A>, preloaded: S) -> Self {
        let mut store = Self {
            state: preloaded,
            reducer,
            listeners: Vec::new(),
            next_listener: 0,
        };
        store.dispatch(A::control(ControlAction::Init));
        store
    }

    /// Returns the current state.
    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// Reduces `action` into the next state and notifies listeners.
    pub fn dispatch(&mut self, action: A) -> &S {
        tracing::trace!("Dispatching {}", action.action_type());
        self.state = (self.reducer)(&self.state, &action);
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    /// Dispatches `UNDO`.
    pub fn undo(&mut self) -> &S {
        self.dispatch(A::control(ControlAction::Undo))
    }

    /// Dispatches `REDO`.
    pub fn redo(&mut self) -> &S {
        self.dispatch(A::control(ControlAction::Redo))
    }

    /// Dispatches `RESET`.
    pub fn reset(&mut self) -> &S {
        self.dispatch(A::control(ControlAction::Reset))
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

/// Builds a store from a reducer and a preloaded state.
pub trait StoreCreator<S, A> {
    fn create_store(self, reducer: Reducer<S, A>, preloaded: S) -> Store<S, A>;
}

/// The base creator: builds a plain `Store`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateStore;

impl<S, A: Action> StoreCreator<S, A> for CreateStore {
    fn create_store(self, reducer: Reducer<S, A>, preloaded: S) -> Store<S, A> {
        Store::new(reducer, preloaded)
    }
}

/// Wraps a store creator, usually to reshape the reducer it receives.
pub trait StoreEnhancer<S, A, C: StoreCreator<S, A>> {
    type Creator: StoreCreator<S, A>;

    fn enhance(self, next: C) -> Self::Creator;
}

/// The identity enhancer.
impl<S, A, C: StoreCreator<S, A>> StoreEnhancer<S, A, C> for () {
    type Creator = C;

    fn enhance(self, next: C) -> C {
        next
    }
}

/// Two enhancers applied as `outer(inner(next))`.
#[derive(Debug, Clone, Default)]
pub struct Compose<O, I> {
    outer: O,
    inner: I,
}

/// Composes two enhancers; `outer` receives the creator built by `inner`.
pub fn compose<O, I>(outer: O, inner: I) -> Compose<O, I> {
    Compose { outer, inner }
}

impl<S, A, C, O, I> StoreEnhancer<S, A, C> for Compose<O, I>
where
    C: StoreCreator<S, A>,
    I: StoreEnhancer<S, A, C>,
    O: StoreEnhancer<S, A, I::Creator>,
{
    type Creator = O::Creator;

    fn enhance(self, next: C) -> Self::Creator {
        self.outer.enhance(self.inner.enhance(next))
    }
}

/// Creates a store, letting `enhancer` reshape the base creator first.
///
/// Pass `()` for a plain store.
pub fn create_store<S, A, E>(reducer: Reducer<S, A>, preloaded: S, enhancer: E) -> Store<S, A>
where
    A: Action,
    E: StoreEnhancer<S, A, CreateStore>,
{
    enhancer.enhance(CreateStore).create_store(reducer, preloaded)
}
