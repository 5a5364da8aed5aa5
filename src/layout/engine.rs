//! Masonry layout engine
//!
//! Greedy shortest-column packing. Items are visited in input order and each
//! one goes to the column that is currently shortest, leftmost on ties. Every
//! pass starts from empty columns, so the result depends only on the items and
//! the pass configuration.

use super::display_list::{MasonryLayout, Placement, SkippedItem};
use crate::error::LayoutError;
use crate::models::{LayoutConfig, MasonryItem};

/// Compute a complete layout for `items`
pub fn compute_layout(items: &[MasonryItem], config: &LayoutConfig) -> MasonryLayout {
    let mut layout = MasonryLayout::empty(config);
    if layout.column_heights.is_empty() {
        log::warn!("Masonry layout requested with zero columns");
        return layout;
    }

    for (index, item) in items.iter().enumerate() {
        let height = match item_height(item, config.column_width) {
            Ok(height) => height,
            Err(e) => {
                log::warn!("Skipping masonry item {} ({:?}): {}", index, item.id, e);
                layout.skipped.push(SkippedItem {
                    index,
                    id: item.id.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let column = shortest_column(&layout.column_heights);
        let y = layout.column_heights[column];

        layout.placements.push(Placement {
            index,
            id: item.id.clone(),
            column,
            x: config.column_x(column),
            y,
            width: config.column_width,
            height,
        });

        layout.column_heights[column] += height + config.gap;
    }

    layout.total_height = layout.column_heights.iter().copied().fold(0.0, f64::max);

    log::debug!(
        "Masonry layout: {} placed, {} skipped, {} columns of {}px, height {}px",
        layout.placements.len(),
        layout.skipped.len(),
        config.column_count,
        config.column_width,
        layout.total_height
    );

    layout
}

/// Rendered height of an item at `column_width`; must be finite
fn item_height(item: &MasonryItem, column_width: f64) -> Result<f64, LayoutError> {
    let ratio = item.ratio()?;
    let height = ratio.height_for_width(column_width);
    if height.is_finite() {
        Ok(height)
    } else {
        Err(LayoutError::InvalidAspectRatio(format!(
            "{} gives a non-finite height at {}px",
            ratio, column_width
        )))
    }
}

/// Index of the shortest column; the first one wins on ties
fn shortest_column(heights: &[f64]) -> usize {
    let mut index = 0;
    let mut best = heights.first().copied().unwrap_or(0.0);
    for (i, height) in heights.iter().copied().enumerate().skip(1) {
        if height < best {
            best = height;
            index = i;
        }
    }
    index
}
