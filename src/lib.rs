//! Masonry Grid WASM Module
//!
//! Lays out photo grids as masonry columns: each item goes to the currently
//! shortest column. The layout core is pure and runs anywhere; the `dom` and
//! `api` modules bind it to the browser.

pub mod api;
pub mod dom;
pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod models;

// Re-export commonly used types
pub use error::LayoutError;
pub use layout::{compute_layout, MasonryLayout, Placement, SkippedItem};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            log::warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("Masonry WASM module initialized");
}
