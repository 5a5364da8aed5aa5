//! Models module for the masonry grid
//!
//! Configuration and item types shared by the layout engine, the DOM layer
//! and the JavaScript API.

pub mod config;
pub mod item;

// Re-export commonly used types
pub use config::*;
pub use item::*;
