//! Masonry Layout Engine
//!
//! Pure position computation. Nothing in this module touches the DOM; the
//! `dom` module applies the resulting display list.

pub mod display_list;
pub mod engine;

pub use display_list::{MasonryLayout, Placement, SkippedItem};
pub use engine::compute_layout;
