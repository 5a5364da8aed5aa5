//! Grid configuration and per-pass layout configuration
//!
//! `GridConfig` is the long-lived, user-supplied configuration (usually handed
//! over from JavaScript as a plain object). `LayoutConfig` is resolved from it
//! on every layout pass for the container width measured at that moment.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Default spacing between columns and between items in a column (pixels)
pub const DEFAULT_GAP: f64 = 16.0;

/// Default quiet period before a resize burst triggers a layout pass
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Default delay between fade-in and adding the initialized class
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 500;

/// A container-width threshold at which the column count changes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Widths at or above this value use `columns`
    pub min_width: f64,

    /// Number of columns from this breakpoint up to the next one
    pub columns: usize,
}

impl Breakpoint {
    pub const fn new(min_width: f64, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

/// Which width drives the breakpoint lookup
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum BreakpointBasis {
    /// The measured width of the grid container
    #[default]
    Container,

    /// The window's inner width (columns are still sized from the container)
    Viewport,
}

/// Grid configuration supplied once when a grid is mounted
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Fixed pixel spacing between columns and between stacked items
    pub gap: f64,

    /// Breakpoint table; order does not matter, widest match wins
    pub breakpoints: Vec<Breakpoint>,

    /// Column count below the narrowest breakpoint
    pub min_columns: usize,

    pub breakpoint_basis: BreakpointBasis,

    /// Quiet period for coalescing resize events
    pub debounce_ms: u32,

    /// Delay before the initialized class is added on first reveal
    pub reveal_delay_ms: u32,

    /// Element id of the grid container
    pub container_id: String,

    /// Class name carried by every grid item
    pub item_class: String,

    /// Class added to items once their first reveal finished
    pub initialized_class: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            breakpoints: vec![Breakpoint::new(1024.0, 4), Breakpoint::new(640.0, 3)],
            min_columns: 2,
            breakpoint_basis: BreakpointBasis::Container,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            container_id: "masonry-grid".to_string(),
            item_class: "photo-item".to_string(),
            initialized_class: "initialized".to_string(),
        }
    }
}

impl GridConfig {
    /// Check the configuration for values that could never produce a layout
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LayoutError::InvalidGap(self.gap));
        }

        if self.min_columns == 0 {
            return Err(LayoutError::InvalidConfig(
                "minColumns must be at least 1".to_string(),
            ));
        }

        for bp in &self.breakpoints {
            if bp.columns == 0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "breakpoint at {}px has zero columns",
                    bp.min_width
                )));
            }
            if !bp.min_width.is_finite() {
                return Err(LayoutError::InvalidConfig(format!(
                    "breakpoint width {} is not finite",
                    bp.min_width
                )));
            }
        }

        Ok(())
    }

    /// Width fed to the breakpoint table for one pass
    ///
    /// A viewport basis with no known viewport width falls back to the
    /// container width.
    pub fn breakpoint_width(&self, container_width: f64, viewport_width: Option<f64>) -> f64 {
        match self.breakpoint_basis {
            BreakpointBasis::Container => container_width,
            BreakpointBasis::Viewport => viewport_width.unwrap_or(container_width),
        }
    }
}

/// Column count for a given width according to the breakpoint table
///
/// The breakpoint with the largest `min_width` not exceeding `width` wins.
/// Widths below every breakpoint (and NaN) fall back to `min_columns`.
pub fn column_count_for_width(width: f64, config: &GridConfig) -> usize {
    config
        .breakpoints
        .iter()
        .filter(|bp| width >= bp.min_width)
        .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
        .map(|bp| bp.columns)
        .unwrap_or(config.min_columns)
}

/// Configuration for a single layout pass
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Measured container width in pixels
    pub container_width: f64,

    /// Derived from the breakpoint table
    pub column_count: usize,

    pub gap: f64,

    /// `(container_width - gap * (column_count - 1)) / column_count`
    pub column_width: f64,
}

impl LayoutConfig {
    /// Resolve the pass configuration for a container width
    ///
    /// `breakpoint_width` is the width fed to the breakpoint table. It equals
    /// `container_width` unless the grid is configured with a viewport basis.
    pub fn resolve(
        container_width: f64,
        breakpoint_width: f64,
        config: &GridConfig,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let column_count = column_count_for_width(breakpoint_width, config);
        Self::with_columns(container_width, column_count, config.gap)
    }

    /// Resolve for a container whose own width drives the breakpoints
    pub fn for_container(container_width: f64, config: &GridConfig) -> Result<Self, LayoutError> {
        Self::resolve(container_width, container_width, config)
    }

    /// Build a pass configuration with an explicit column count
    pub fn with_columns(
        container_width: f64,
        column_count: usize,
        gap: f64,
    ) -> Result<Self, LayoutError> {
        if !container_width.is_finite() || container_width < 0.0 {
            return Err(LayoutError::InvalidContainerWidth(container_width));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(LayoutError::InvalidGap(gap));
        }
        if column_count == 0 {
            return Err(LayoutError::InvalidConfig(
                "column count must be at least 1".to_string(),
            ));
        }

        let gutters = gap * (column_count - 1) as f64;
        let column_width = (container_width - gutters) / column_count as f64;
        if column_width <= 0.0 {
            return Err(LayoutError::ContainerTooNarrow {
                container_width,
                column_count,
                gap,
            });
        }

        Ok(Self {
            container_width,
            column_count,
            gap,
            column_width,
        })
    }

    /// Horizontal offset of a column's left edge
    pub fn column_x(&self, column: usize) -> f64 {
        column as f64 * (self.column_width + self.gap)
    }
}
