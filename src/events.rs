//! Observer lists for menu notifications.
//!
//! [`EventHub`] is a cheaply clonable handle to a shared list of listeners.
//! Listeners are invoked in subscription order. Notification works on a
//! snapshot of the list, so a listener may subscribe or unsubscribe (on any
//! clone of the hub) while it is being notified; the change takes effect on
//! the next notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies one subscription on an [`EventHub`].
    pub struct SubscriptionId;
}

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Listeners<T> {
    slots: SlotMap<SubscriptionId, Listener<T>>,
    order: Vec<SubscriptionId>,
}

/// Multi-subscriber invocation list.
pub struct EventHub<T> {
    inner: Rc<RefCell<Listeners<T>>>,
}

impl<T> EventHub<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            })),
        }
    }

    /// Registers a listener and returns the id used to remove it.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.slots.insert(Rc::new(RefCell::new(listener)));
        inner.order.push(id);
        id
    }

    /// Removes a listener. Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.slots.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|&other| other != id);
        true
    }

    /// Removes every listener.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.slots.clear();
        inner.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every listener registered at the time of the call.
    pub fn notify(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = {
            let inner = self.inner.borrow();
            inner
                .order
                .iter()
                .filter_map(|id| inner.slots.get(*id).cloned())
                .collect()
        };

        for listener in snapshot {
            // A listener that re-enters the hub it is subscribed to would
            // otherwise alias its own closure.
            let Ok(mut callback) = listener.try_borrow_mut() else {
                log::warn!("Skipping re-entrant menu event listener");
                continue;
            };
            (&mut *callback)(event);
        }
    }
}

impl<T> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listeners_run_in_subscription_order() {
        let hub = EventHub::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            hub.subscribe(move |v| log.borrow_mut().push(format!("{tag}{v}")));
        }
        hub.notify(&7);

        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn unsubscribe_during_notify_applies_next_time() {
        let hub = EventHub::<()>::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let victim = hub.subscribe(move |()| counter.set(counter.get() + 1));
        let remover = hub.clone();
        hub.subscribe(move |()| {
            remover.unsubscribe(victim);
        });

        hub.notify(&());
        hub.notify(&());
        assert_eq!(calls.get(), 1);
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn subscribe_during_notify_skips_current_round() {
        let hub = EventHub::<()>::new();
        let calls = Rc::new(Cell::new(0));

        let adder = hub.clone();
        let counter = Rc::clone(&calls);
        hub.subscribe(move |()| {
            let counter = Rc::clone(&counter);
            adder.subscribe(move |()| counter.set(counter.get() + 1));
        });

        hub.notify(&());
        assert_eq!(calls.get(), 0);
        hub.notify(&());
        assert_eq!(calls.get(), 1);
    }
}
