//! Error types for masonry layout
//!
//! Only whole-pass failures live here. A single bad item never fails a pass;
//! it is recorded as a `SkippedItem` on the layout instead.

use thiserror::Error;

/// Layout pass error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Container width is negative, NaN or infinite
    #[error("Invalid container width: {0}")]
    InvalidContainerWidth(f64),

    /// Gap is negative, NaN or infinite
    #[error("Invalid gap: {0}")]
    InvalidGap(f64),

    /// Columns would have zero or negative width
    #[error("Container width {container_width}px is too narrow for {column_count} columns with {gap}px gap")]
    ContainerTooNarrow {
        container_width: f64,
        column_count: usize,
        gap: f64,
    },

    /// Aspect ratio is missing, zero, negative or non-finite
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(String),

    /// Grid configuration is inconsistent
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// A browser API call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
