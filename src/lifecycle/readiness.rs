//! Readiness aggregation for grid items
//!
//! Layout waits for every item to settle before the post-load pass. An item
//! settles when its media is decoded or has failed for good; failures count
//! so a single broken image cannot hold the whole grid back.

/// Outcome of marking an item as settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessChange {
    /// Still waiting on this many items
    Pending(usize),

    /// The last outstanding item just settled; emitted once per tracker
    AllReady,

    /// Index was already settled or out of range
    Unchanged,
}

/// Tracks which items of a fixed-size set have settled
#[derive(Debug, Clone)]
pub struct ReadinessTracker {
    settled: Vec<bool>,
    remaining: usize,
}

impl ReadinessTracker {
    pub fn new(total: usize) -> Self {
        Self {
            settled: vec![false; total],
            remaining: total,
        }
    }

    pub fn total(&self) -> usize {
        self.settled.len()
    }

    /// Number of items still outstanding
    pub fn pending(&self) -> usize {
        self.remaining
    }

    pub fn is_all_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Record an item that was already ready at registration time
    ///
    /// Unlike `mark_settled` this never reports `AllReady`; the caller checks
    /// `is_all_ready` once registration is done.
    pub fn register_ready(&mut self, index: usize) {
        self.settle(index);
    }

    /// Record that an item finished loading (or failed to)
    pub fn mark_settled(&mut self, index: usize) -> ReadinessChange {
        if !self.settle(index) {
            return ReadinessChange::Unchanged;
        }

        if self.remaining == 0 {
            ReadinessChange::AllReady
        } else {
            ReadinessChange::Pending(self.remaining)
        }
    }

    fn settle(&mut self, index: usize) -> bool {
        match self.settled.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.remaining -= 1;
                true
            }
            Some(_) => false,
            None => {
                log::warn!(
                    "Readiness signal for unknown item {} (tracking {})",
                    index,
                    self.settled.len()
                );
                false
            }
        }
    }
}
