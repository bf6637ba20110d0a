//! Observable state container.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

/// Callback invoked with the new state after every change.
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`StateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the current state of one reducer.
///
/// `dispatch` runs the reducer under the state lock, then calls every
/// subscriber synchronously with the new state. Subscribers are called
/// only when the state actually changed, and never while the lock is held,
/// so they may read the store again.
pub struct StateStore<R: Reducer> {
    state: Mutex<R::State>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<R::State>)>>,
    next_id: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> StateStore<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Mutex::new(initial),
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            _reducer: PhantomData,
        }
    }

    /// Clone of the current state.
    pub fn get(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Read the current state without cloning all of it.
    pub fn with<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state.lock())
    }

    /// Apply an intent and return the resulting state.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let (next, changed) = {
            let mut state = self.state.lock();
            let previous = state.clone();
            *state = R::reduce(std::mem::take(&mut *state), intent);
            let changed = *state != previous;
            (state.clone(), changed)
        };

        if changed {
            self.notify(&next);
        }
        next
    }

    pub fn subscribe(&self, listener: impl Fn(&R::State) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.read().len()
    }

    fn notify(&self, state: &R::State) {
        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

impl<R: Reducer> Default for StateStore<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
