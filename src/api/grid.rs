//! Mounted grid API
//!
//! `MasonryGrid` owns a grid attached to the page and keeps its listeners
//! alive for as long as JavaScript holds on to it.

use wasm_bindgen::prelude::*;

use super::helpers::{grid_config_from_js, layout_error, serialize};
use crate::dom::GridHandle;
use crate::wasm_info;

#[wasm_bindgen]
pub struct MasonryGrid {
    handle: GridHandle,
}

#[wasm_bindgen]
impl MasonryGrid {
    /// Run a layout pass now; returns the layout, or `null` when nothing was laid out
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        match self.handle.layout() {
            Some(layout) => serialize(&layout, "Failed to serialize layout"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Re-read the item set after the page swapped grid content
    pub fn refresh(&mut self) -> Result<JsValue, JsValue> {
        match self.handle.refresh().map_err(layout_error)? {
            Some(layout) => serialize(&layout, "Failed to serialize layout"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Result of the most recent pass, or `null`
    #[wasm_bindgen(js_name = lastLayout)]
    pub fn last_layout(&self) -> Result<JsValue, JsValue> {
        match self.handle.last_layout() {
            Some(layout) => serialize(&layout, "Failed to serialize layout"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Number of layout passes run since mount
    #[wasm_bindgen(js_name = passCount)]
    pub fn pass_count(&self) -> f64 {
        self.handle.pass_count() as f64
    }

    /// Stop reacting to image loads and resizes
    pub fn detach(&mut self) {
        wasm_info!("Detaching masonry grid '{}'", self.handle.config().container_id);
        self.handle.detach();
    }
}

/// Mount the masonry grid described by `config_js`
///
/// Call once the document content is ready. The container is looked up by
/// `containerId` (default `masonry-grid`).
#[wasm_bindgen(js_name = mountMasonry)]
pub fn mount_masonry(config_js: JsValue) -> Result<MasonryGrid, JsValue> {
    let config = grid_config_from_js(config_js)?;
    wasm_info!("mountMasonry: #{}", config.container_id);

    let handle = GridHandle::mount(config).map_err(layout_error)?;
    Ok(MasonryGrid { handle })
}
