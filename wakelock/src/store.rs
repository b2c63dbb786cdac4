// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! A minimal observable value, independent of any UI framework.

use std::{
    cell::{Cell, RefCell},
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

type Observer<T> = Rc<dyn Fn(&T)>;

/// Identifies a subscription so that it can later be removed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

/// A value which notifies its subscribers whenever it is updated.
pub struct Store<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: Cell<u64>,
}

impl<T: Clone> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Calls the given function with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Applies the given changes as a single update, then notifies every subscriber once.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut value = self.value.borrow_mut();
            f(&mut value);
            value.clone()
        };
        // Observers may subscribe, unsubscribe or update the store again, so don't hold any
        // borrows while calling them.
        let observers = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect::<Vec<_>>();
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Registers a function to be called with the new value after every update.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Removes the given subscription. Returns false if it had already been removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Removes all subscriptions.
    pub fn clear_subscribers(&self) {
        self.observers.borrow_mut().clear();
    }
}

impl<T: Debug> Debug for Store<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_after_update() {
        let store = Store::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        store.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        store.update(|value| *value += 1);
        store.update(|value| *value *= 10);

        assert_eq!(store.get(), 20);
        assert_eq!(*seen.borrow(), vec![2, 20]);
    }

    #[test]
    fn unsubscribe() {
        let store = Store::new(0);
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let id = store.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        store.update(|value| *value = 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|value| *value = 2);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn observer_may_update_store() {
        let store = Rc::new(Store::new(0));
        let store_clone = store.clone();
        store.subscribe(move |&value| {
            if value == 1 {
                store_clone.update(|value| *value = 2);
            }
        });

        store.update(|value| *value = 1);

        assert_eq!(store.get(), 2);
    }

    #[test]
    fn with_borrows_current_value() {
        let store = Store::new(vec![1, 2, 3]);
        assert_eq!(store.with(Vec::len), 3);
    }
}
