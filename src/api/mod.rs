//! Masonry WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, config parsing, error conversion and console logging
//! - `layout`: stateless layout computations
//! - `grid`: grids mounted on the page

pub mod helpers;
pub mod grid;
pub mod layout;

pub use grid::{mount_masonry, MasonryGrid};
pub use layout::{column_count_for_width_js, compute_masonry_layout, parse_aspect_ratio};
