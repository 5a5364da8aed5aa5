//! Stateless layout API
//!
//! Pure computations exposed to JavaScript. None of these touch the DOM, so
//! callers can lay out items they measure themselves.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, grid_config_from_js, layout_error, serialize};
use crate::layout::compute_layout;
use crate::models::{
    column_count_for_width, AspectRatio, BreakpointBasis, LayoutConfig, MasonryItem,
};
use crate::{wasm_log, wasm_warn};

/// Compute a masonry layout for measured items
///
/// # Parameters
/// - `items_js`: array of `{ id?, aspectRatio }`
/// - `container_width`: container width in pixels
/// - `config_js`: optional grid config (gap, breakpoints, ...)
/// - `viewport_width`: optional window width, used for the breakpoints when
///   the config has `breakpointBasis: "viewport"`
///
/// # Returns
/// The layout: placements in input order, skipped items, column heights and
/// total height
#[wasm_bindgen(js_name = computeMasonryLayout)]
pub fn compute_masonry_layout(
    items_js: JsValue,
    container_width: f64,
    config_js: JsValue,
    viewport_width: Option<f64>,
) -> Result<JsValue, JsValue> {
    let items: Vec<MasonryItem> = deserialize(items_js, "Invalid masonry items")?;
    let config = grid_config_from_js(config_js)?;

    if config.breakpoint_basis == BreakpointBasis::Viewport && viewport_width.is_none() {
        wasm_warn!("breakpointBasis is viewport but no viewport width was given; using the container width");
    }
    let breakpoint_width = config.breakpoint_width(container_width, viewport_width);
    let pass_config =
        LayoutConfig::resolve(container_width, breakpoint_width, &config).map_err(layout_error)?;

    wasm_log!(
        "computeMasonryLayout: {} items, width={}, columns={}",
        items.len(),
        container_width,
        pass_config.column_count
    );

    let layout = compute_layout(&items, &pass_config);
    if !layout.skipped.is_empty() {
        wasm_warn!("{} items skipped", layout.skipped.len());
    }

    serialize(&layout, "Failed to serialize layout")
}

/// Number of columns the breakpoint table gives for `width`
#[wasm_bindgen(js_name = columnCountForWidth)]
pub fn column_count_for_width_js(width: f64, config_js: JsValue) -> Result<usize, JsValue> {
    let config = grid_config_from_js(config_js)?;
    Ok(column_count_for_width(width, &config))
}

/// Parse a CSS `aspect-ratio` value into width / height
#[wasm_bindgen(js_name = parseAspectRatio)]
pub fn parse_aspect_ratio(css: &str) -> Result<f64, JsValue> {
    AspectRatio::parse_css(css)
        .map(AspectRatio::get)
        .map_err(layout_error)
}
