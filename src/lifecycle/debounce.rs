//! Debouncing for resize-triggered layout passes
//!
//! Every scheduled pass gets a ticket. Only the most recent ticket may fire;
//! timers holding an older ticket find it stale and do nothing, so a burst of
//! resize events collapses into one pass after the quiet period.

/// Identifies one scheduled pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period_ms: u32,
    generation: u64,
    armed: bool,
}

impl Debouncer {
    pub fn new(quiet_period_ms: u32) -> Self {
        Self {
            quiet_period_ms,
            generation: 0,
            armed: false,
        }
    }

    pub fn quiet_period_ms(&self) -> u32 {
        self.quiet_period_ms
    }

    /// Schedule a pass, superseding any pass scheduled earlier
    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation += 1;
        self.armed = true;
        DebounceTicket(self.generation)
    }

    /// Whether a timer holding `ticket` should run its pass
    ///
    /// Returns true at most once per ticket, and only for the latest one.
    pub fn should_fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Drop whatever is scheduled
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}
