//! Event-driven scheduling of layout passes
//!
//! Bookkeeping only: these types decide *whether* a pass should run and know
//! nothing about timers or the DOM.

pub mod debounce;
pub mod readiness;

pub use debounce::{DebounceTicket, Debouncer};
pub use readiness::{ReadinessChange, ReadinessTracker};
