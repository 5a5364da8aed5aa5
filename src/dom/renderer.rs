//! Applying a masonry layout to the DOM
//!
//! All geometry comes from the display list; this module only writes styles.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::grid::GridSnapshot;
use crate::layout::MasonryLayout;

/// How newly positioned items become visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// First pass after mount: fade in on the next animation frame, then mark
    /// items initialized so later moves animate
    Initial,

    /// Every later pass: visible right away
    Immediate,
}

/// Write positions, widths and the container height
///
/// Skipped items are left exactly as they were.
pub fn apply_layout(
    snapshot: &GridSnapshot,
    layout: &MasonryLayout,
    reveal: RevealMode,
    initialized_class: &str,
    reveal_delay_ms: u32,
) -> Result<(), JsValue> {
    let mut placed = Vec::with_capacity(layout.placements.len());

    for placement in &layout.placements {
        let Some(element) = snapshot.elements.get(placement.index) else {
            log::warn!(
                "Placement for item {} but the grid only has {} elements",
                placement.index,
                snapshot.elements.len()
            );
            continue;
        };

        let style = element.style();
        style.set_property("transform", &placement.css_transform())?;
        style.set_property("width", &placement.css_width())?;

        if reveal == RevealMode::Immediate {
            style.set_property("opacity", "1")?;
        }
        placed.push(element.clone());
    }

    snapshot
        .container
        .style()
        .set_property("height", &layout.css_height())?;

    if reveal == RevealMode::Initial && !placed.is_empty() {
        schedule_reveal(placed, initialized_class.to_string(), reveal_delay_ms)?;
    }

    Ok(())
}

/// Fade items in on the next frame, then add the initialized class
fn schedule_reveal(
    elements: Vec<HtmlElement>,
    initialized_class: String,
    delay_ms: u32,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let on_frame = Closure::once_into_js(move || {
        for element in &elements {
            if let Err(e) = element.style().set_property("opacity", "1") {
                log::warn!("Failed to reveal item: {:?}", e);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_timeout = Closure::once_into_js(move || {
            for element in &elements {
                if let Err(e) = element.class_list().add_1(&initialized_class) {
                    log::warn!("Failed to mark item initialized: {:?}", e);
                }
            }
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.unchecked_ref(),
            delay_ms as i32,
        ) {
            log::error!("Failed to schedule initialized class: {:?}", e);
        }
    });

    window.request_animation_frame(on_frame.unchecked_ref())?;
    Ok(())
}
