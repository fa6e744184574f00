//! Subscription management for media streams.
//!
//! This module provides subscription IDs and a manager for tracking
//! callbacks attached to a stream of values (raw media changes, print
//! transitions).

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// A subscription to a stream of `T`.
pub struct Subscription<T: ?Sized> {
    /// Unique identifier
    id: SubscriptionId,
    /// Callback to invoke on each value
    callback: Box<dyn Fn(&T)>,
    /// Whether this subscription is active
    active: Cell<bool>,
}

impl<T: ?Sized> Subscription<T> {
    /// Creates a new subscription.
    pub fn new<F>(id: SubscriptionId, callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            id,
            callback: Box::new(callback),
            active: Cell::new(true),
        }
    }

    /// Returns the subscription ID.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns whether this subscription is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Deactivates this subscription.
    #[inline]
    pub fn deactivate(&self) {
        self.active.set(false);
    }

    /// Notifies this subscription of a value.
    pub fn notify(&self, value: &T) {
        if self.active.get() {
            (self.callback)(value);
        }
    }
}

/// Manages the subscriptions of one stream.
///
/// Subscriptions are notified in subscription order. Owners usually keep the
/// manager in a `RefCell`; `snapshot()` lets them release that borrow before
/// invoking callbacks, so a callback may subscribe or unsubscribe
/// re-entrantly. A subscription removed mid-dispatch is deactivated and
/// skipped for the rest of that dispatch.
pub struct SubscriptionManager<T: ?Sized> {
    /// Active subscriptions
    subscriptions: Vec<Rc<Subscription<T>>>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl<T: ?Sized> Default for SubscriptionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> SubscriptionManager<T> {
    /// Creates a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Subscribes with the given callback.
    ///
    /// Returns the subscription ID that can be used to unsubscribe.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        self.subscriptions.push(Rc::new(Subscription::new(id, callback)));

        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.subscriptions.iter().position(|sub| sub.id() == id) {
            Some(index) => {
                self.subscriptions.remove(index).deactivate();
                true
            }
            None => false,
        }
    }

    /// Returns the current subscriptions for dispatch outside a borrow.
    pub fn snapshot(&self) -> Vec<Rc<Subscription<T>>> {
        self.subscriptions.clone()
    }

    /// Returns the number of subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Clears all subscriptions.
    pub fn clear(&mut self) {
        for sub in self.subscriptions.drain(..) {
            sub.deactivate();
        }
    }
}
