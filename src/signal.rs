//! Single-threaded observable values.
//!
//! A [`Signal`] holds the latest value of a continuous input (pointer
//! position, scroll progress) and pushes every change to its subscribers.
//! Subscribing hands back a [`Subscription`]; dropping it detaches the
//! listener, so a component that keeps the guard inside an effect is
//! unsubscribed on unmount.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// Two handles are equal when they point at the same source, which is what
// Yew needs to decide whether a context or effect dependency changed.
impl<T> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores `value` and notifies subscribers in subscription order.
    /// Setting the value it already holds notifies nobody.
    pub fn set(&self, value: T) {
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Borrow released: listeners may read or subscribe re-entrantly.
        for listener in listeners {
            listener(&value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Keeps a listener attached to its [`Signal`] for as long as it lives.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_see_every_change() {
        let signal = Signal::new(0.0_f64);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            signal.subscribe(move |v| seen.borrow_mut().push(*v))
        };

        signal.set(0.25);
        signal.set(0.5);

        assert_eq!(*seen.borrow(), vec![0.25, 0.5]);
        assert_eq!(signal.get(), 0.5);
    }

    #[test]
    fn setting_the_same_value_is_silent() {
        let signal = Signal::new(3_i32);
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = calls.clone();
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };

        signal.set(3);
        assert_eq!(calls.get(), 0);
        signal.set(4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let signal = Signal::new(0_i32);
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = calls.clone();
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };

        signal.set(1);
        drop(sub);
        signal.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_signal_drops_cleanly() {
        let signal = Signal::new(0_i32);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn listener_may_read_signal_while_notified() {
        let signal = Signal::new(1_i32);
        let observed = Rc::new(Cell::new(0));
        let _sub = {
            let reader = signal.clone();
            let observed = observed.clone();
            signal.subscribe(move |_| observed.set(reader.get()))
        };

        signal.set(7);
        assert_eq!(observed.get(), 7);
    }

    #[test]
    fn clones_share_identity() {
        let a = Signal::new(0_u8);
        let b = a.clone();
        assert!(a == b);
        assert!(a != Signal::new(0_u8));
    }
}
