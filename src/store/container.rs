//! Single-owner observable state container.
//!
//! [`Store`] keeps one state value behind a shared snapshot handle, applies
//! actions through a [`Reducer`], and calls registered observers after every
//! state-changing dispatch. Everything runs synchronously on the caller's
//! thread; the container is deliberately `!Send` and `!Sync`.
//!
//! # Notification protocol
//!
//! 1. `dispatch` asks the reducer for a [`Transition`]
//! 2. `Unchanged` returns immediately; the snapshot `Rc` is untouched
//! 3. `Changed` swaps the snapshot, then calls observers in subscription order
//! 4. Observers get no payload and re-read state through [`Store::snapshot`]
//!
//! Observers registered during a notification round are first called on the
//! next dispatch. Observers removed during a round are skipped if they have
//! not run yet.

use super::reducer::{Reducer, Transition};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<RefCell<dyn FnMut()>>;
type ObserverList = RefCell<Vec<(SubscriptionId, Callback)>>;

/// Observable state container driven by a [`Reducer`].
///
/// Cloning a `Store` yields another handle to the same container, which is
/// how observers that need to read state get access to it.
///
/// # Example
///
/// ```
/// use bookstacks::store::{catalog_store, CatalogAction};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let store = catalog_store();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// let subscription = store.subscribe(move || counter.set(counter.get() + 1));
///
/// assert!(!store.dispatch(CatalogAction::Init));
/// assert_eq!(seen.get(), 0);
///
/// assert!(subscription.unsubscribe());
/// ```
pub struct Store<R: Reducer> {
    inner: Rc<Inner<R>>,
}

struct Inner<R: Reducer> {
    reducer: R,
    state: RefCell<Rc<R::State>>,
    observers: Rc<ObserverList>,
    next_subscription: Cell<u64>,
}

impl<R: Reducer> Store<R> {
    /// Builds a store and computes its initial state.
    pub fn new(reducer: R) -> Self {
        let initial = reducer.initial_state();
        tracing::debug!("store constructed");
        Self {
            inner: Rc::new(Inner {
                reducer,
                state: RefCell::new(Rc::new(initial)),
                observers: Rc::new(RefCell::new(Vec::new())),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Returns the current state.
    ///
    /// The handle is shared: two snapshots taken without a state change in
    /// between are the same allocation (`Rc::ptr_eq`).
    #[must_use]
    pub fn snapshot(&self) -> Rc<R::State> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Applies `action` and notifies observers if the state changed.
    ///
    /// Returns `true` when the reducer produced a new state.
    pub fn dispatch(&self, action: R::Action) -> bool {
        let _span = tracing::debug_span!("store_dispatch", action = ?action).entered();

        let current = self.snapshot();
        match self.inner.reducer.reduce(&current, &action) {
            Transition::Unchanged => {
                tracing::debug!("dispatch left state unchanged");
                false
            }
            Transition::Changed(next) => {
                *self.inner.state.borrow_mut() = Rc::new(next);
                self.notify();
                true
            }
        }
    }

    /// Registers an observer called after each state-changing dispatch.
    ///
    /// Every call creates an independent registration, even for the same
    /// closure logic; each must be revoked through its own [`Subscription`].
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);

        let callback: Callback = Rc::new(RefCell::new(observer));
        self.inner.observers.borrow_mut().push((id, callback));

        tracing::debug!(subscription = id.0, "observer subscribed");
        Subscription {
            id,
            observers: Rc::downgrade(&self.inner.observers),
        }
    }

    /// Number of live observer registrations.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Detaches every observer. Called when the application stops.
    ///
    /// The state stays readable; later dispatches still reduce but notify no one.
    pub fn shutdown(&self) {
        let removed = {
            let mut observers = self.inner.observers.borrow_mut();
            let count = observers.len();
            observers.clear();
            count
        };
        tracing::debug!(observers_removed = removed, "store shut down");
    }

    fn notify(&self) {
        let round: Vec<(SubscriptionId, Callback)> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();

        tracing::debug!(observer_count = round.len(), "notifying observers");

        for (id, callback) in round {
            let still_registered = self.inner.observers.borrow().iter().any(|(live, _)| *live == id);
            if !still_registered {
                continue;
            }

            // A nested dispatch from inside an observer would re-enter that
            // same observer; it already sees the newest state when it reads.
            match callback.try_borrow_mut() {
                Ok(mut observer) => (*observer)(),
                Err(_) => {
                    tracing::warn!(subscription = id.0, "observer re-entered during its own notification, skipped");
                }
            }
        }
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

/// Deregistration handle returned by [`Store::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[must_use = "an observer stays registered until `unsubscribe` is called"]
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    observers: Weak<ObserverList>,
}

impl Subscription {
    /// Identifier of this registration.
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the observer is still registered with a live store.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.observers
            .upgrade()
            .is_some_and(|list| list.borrow().iter().any(|(id, _)| *id == self.id))
    }

    /// Removes this registration.
    ///
    /// Returns `false` if it was already gone (store shut down or dropped).
    pub fn unsubscribe(self) -> bool {
        let Some(list) = self.observers.upgrade() else {
            return false;
        };
        let mut observers = list.borrow_mut();
        let before = observers.len();
        observers.retain(|(id, _)| *id != self.id);
        let removed = observers.len() < before;
        drop(observers);

        tracing::debug!(subscription = self.id.0, removed = removed, "observer unsubscribed");
        removed
    }
}
