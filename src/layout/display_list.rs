//! Display list for masonry rendering
//!
//! This module defines the output structure returned from the layout engine to
//! the rendering step. A `MasonryLayout` carries every pre-calculated position
//! and width, so the renderer applies values without doing any layout itself.

use serde::{Deserialize, Serialize};

use crate::models::LayoutConfig;

/// Complete result of one layout pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasonryLayout {
    pub container_width: f64,

    pub column_count: usize,

    pub column_width: f64,

    pub gap: f64,

    /// Placed items, in input order
    pub placements: Vec<Placement>,

    /// Items left out of this pass, in input order
    pub skipped: Vec<SkippedItem>,

    /// Accumulated height of each column, trailing gap included
    pub column_heights: Vec<f64>,

    /// Height of the tallest column
    pub total_height: f64,
}

/// A single placed item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Index of the item in the input sequence
    pub index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub column: usize,

    /// X position (left edge)
    pub x: f64,

    /// Y position (top edge)
    pub y: f64,

    /// Width (always the column width)
    pub width: f64,

    /// Rendered height derived from the aspect ratio
    pub height: f64,
}

/// An item the layout pass could not place
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable reason, suitable for logging
    pub reason: String,
}

impl MasonryLayout {
    /// A layout with no items for the given pass configuration
    pub fn empty(config: &LayoutConfig) -> Self {
        Self {
            container_width: config.container_width,
            column_count: config.column_count,
            column_width: config.column_width,
            gap: config.gap,
            placements: Vec::new(),
            skipped: Vec::new(),
            column_heights: vec![0.0; config.column_count],
            total_height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement of the item at `index` in the input sequence, if it was placed
    pub fn placement_for(&self, index: usize) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|pos| &self.placements[pos])
    }

    /// Placements in a single column, top to bottom
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.column == column)
    }

    /// CSS value for the container's `height`
    pub fn css_height(&self) -> String {
        format!("{}px", self.total_height)
    }
}

impl Placement {
    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// CSS value for the item's `transform`
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }

    /// CSS value for the item's `width`
    pub fn css_width(&self) -> String {
        format!("{}px", self.width)
    }
}
