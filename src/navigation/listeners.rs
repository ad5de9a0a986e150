//! Route change listeners.
//!
//! # Design Decisions
//! - Dispatch iterates a snapshot, so a listener may unsubscribe itself (or
//!   others) mid-dispatch without a borrow conflict
//! - A `Subscription` holds a weak reference; dropping it does not
//!   unsubscribe, only `unsubscribe()` does
//! - Unsubscribing twice, or after the registry is gone, is a no-op

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::navigation::route::RouteChange;

type Listener = Rc<dyn Fn(&RouteChange<'_>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Ordered set of listeners.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn add<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RouteChange<'_>) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Invoke every listener registered at the time of the call.
    pub fn notify(&self, change: &RouteChange<'_>) {
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(change);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}

/// Handle returned by `subscribe`.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener. Safe to call any number of times.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }

    /// True while the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|r| r.borrow().listeners.iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::navigation::route::{CurrentRoute, NavigationCause};
    use crate::routing::RouteTable;

    fn change_fixture() -> (CurrentRoute, CurrentRoute) {
        let table = RouteTable::new();
        (
            CurrentRoute::resolve(&table, "/a"),
            CurrentRoute::resolve(&table, "/b"),
        )
    }

    #[test]
    fn test_notify_in_order() {
        let listeners = Listeners::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let log = log.clone();
            listeners.add(move |_| log.borrow_mut().push(tag));
        }

        let (from, to) = change_fixture();
        listeners.notify(&RouteChange {
            from: &from,
            to: &to,
            cause: NavigationCause::Push,
        });
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let listeners = Listeners::new();
        let sub = listeners.add(|_| {});
        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_unsubscribe_during_dispatch() {
        let listeners = Listeners::new();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let sub = {
            let calls = calls.clone();
            let slot = slot.clone();
            listeners.add(move |_| {
                calls.set(calls.get() + 1);
                if let Some(sub) = slot.borrow().as_ref() {
                    sub.unsubscribe();
                }
            })
        };
        *slot.borrow_mut() = Some(sub);

        let (from, to) = change_fixture();
        let change = RouteChange {
            from: &from,
            to: &to,
            cause: NavigationCause::External,
        };
        listeners.notify(&change);
        listeners.notify(&change);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_after_registry_dropped() {
        let listeners = Listeners::new();
        let sub = listeners.add(|_| {});
        drop(listeners);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
