//! Browser glue
//!
//! Reads the grid from the document, hands it to the layout engine, and writes
//! the results back. Everything here needs a real `window`.

pub mod grid;
pub mod mount;
pub mod renderer;

pub use grid::{measure_image, read_grid, GridSnapshot};
pub use mount::GridHandle;
pub use renderer::{apply_layout, RevealMode};
