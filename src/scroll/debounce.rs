//! Trailing-edge debouncing.
//!
//! [`Debouncer`] holds the latest value and hands out a ticket per push;
//! only the newest ticket may take the value. [`DebouncedTimer`] pairs it
//! with a `gloo` timeout that is dropped (and so cancelled) on every re-arm.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::schedule::{Generation, Ticket};

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: Generation,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: Generation::new(),
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending value; earlier tickets can no longer fire.
    pub fn push(&mut self, value: T) -> Ticket {
        self.pending = Some(value);
        self.generation.advance()
    }

    /// Takes the pending value if `ticket` is the newest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if self.generation.is_current(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation.invalidate();
    }
}

/// Calls `callback` once `wait_ms` has passed without another trigger.
pub struct DebouncedTimer<T: 'static> {
    wait_ms: u32,
    state: Rc<RefCell<Debouncer<T>>>,
    timeout: RefCell<Option<Timeout>>,
    callback: Rc<dyn Fn(T)>,
}

impl<T: 'static> DebouncedTimer<T> {
    pub fn new(wait_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait_ms,
            state: Rc::new(RefCell::new(Debouncer::new())),
            timeout: RefCell::new(None),
            callback: Rc::new(callback),
        }
    }

    pub fn trigger(&self, value: T) {
        let ticket = self.state.borrow_mut().push(value);
        let state = self.state.clone();
        let callback = self.callback.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            let value = state.borrow_mut().fire(ticket);
            if let Some(value) = value {
                callback(value);
            }
        });
        // Replacing the handle drops (and cancels) the previous timeout.
        self.timeout.replace(Some(timeout));
    }
}

impl<T: 'static> Drop for DebouncedTimer<T> {
    fn drop(&mut self) {
        self.state.borrow_mut().cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<_> = (1..=5).map(|n| debouncer.push(n)).collect();

        let fired: Vec<_> = tickets
            .into_iter()
            .filter_map(|ticket| debouncer.fire(ticket))
            .collect();
        assert_eq!(fired, vec![5]);
    }

    #[test]
    fn ticket_fires_only_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push("scroll");
        assert_eq!(debouncer.fire(ticket), Some("scroll"));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push(10.0);
        assert_eq!(debouncer.fire(first), Some(10.0));
        let second = debouncer.push(20.0);
        assert_eq!(debouncer.fire(second), Some(20.0));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push(1);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }
}
