//! Tickets for timers and frame loops that may be superseded.
//!
//! A callback is handed the ticket that was current when it was scheduled
//! and only acts if that ticket is still current when it runs.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared counter; advancing it makes every outstanding ticket stale.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }

    /// Stale-out everything without starting anything new.
    pub fn invalidate(&self) {
        self.advance();
    }
}

/// Evenly spaced delays for revealing a run of items one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub initial_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub fn new(step_ms: u32) -> Self {
        Self { initial_ms: 0, step_ms }
    }

    pub fn after(self, initial_ms: u32) -> Self {
        Self { initial_ms, ..self }
    }

    pub fn delay(&self, index: usize) -> u32 {
        self.initial_ms + self.step_ms.saturating_mul(index as u32)
    }

    /// Wait between item `index - 1` appearing and item `index` appearing.
    pub fn gap(&self, index: usize) -> u32 {
        match index {
            0 => self.delay(0),
            _ => self.delay(index).saturating_sub(self.delay(index - 1)),
        }
    }
}
