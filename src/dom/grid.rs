//! Reading the grid out of the DOM
//!
//! Produces a `GridSnapshot`: the container, its item elements, and one
//! `MasonryItem` per element, in document order.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::error::LayoutError;
use crate::models::{AspectRatio, GridConfig, MasonryItem};

/// The grid as found in the document at the start of a layout pass
pub struct GridSnapshot {
    pub container: HtmlElement,

    /// Item elements, parallel to `items`
    pub elements: Vec<HtmlElement>,

    /// First `img` inside each item element, parallel to `items`
    pub images: Vec<Option<HtmlImageElement>>,

    pub items: Vec<MasonryItem>,

    /// `offsetWidth` of the container
    pub container_width: f64,
}

/// Read the grid container and its items
///
/// Returns `None` when the container element does not exist.
pub fn read_grid(document: &Document, config: &GridConfig) -> Option<GridSnapshot> {
    let container = document
        .get_element_by_id(&config.container_id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let collection = container.get_elements_by_class_name(&config.item_class);
    let mut elements = Vec::with_capacity(collection.length() as usize);
    let mut images = Vec::with_capacity(elements.capacity());
    let mut items = Vec::with_capacity(elements.capacity());

    for i in 0..collection.length() {
        let Some(element) = collection
            .item(i)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let image = element
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());

        let id = Some(element.id()).filter(|id| !id.is_empty());
        let aspect_ratio = match image.as_ref().map(measure_image) {
            Some(Ok(ratio)) => Some(ratio.get()),
            Some(Err(e)) => {
                log::debug!("Item {} has no usable aspect ratio: {}", i, e);
                None
            }
            None => {
                log::debug!("Item {} has no image", i);
                None
            }
        };

        items.push(MasonryItem { id, aspect_ratio });
        images.push(image);
        elements.push(element);
    }

    let container_width = f64::from(container.offset_width());

    Some(GridSnapshot {
        container,
        elements,
        images,
        items,
        container_width,
    })
}

/// Aspect ratio of an image element
///
/// Looks at the inline `aspect-ratio` style first, then `data-width` and
/// `data-height`, then the decoded natural size.
pub fn measure_image(image: &HtmlImageElement) -> Result<AspectRatio, LayoutError> {
    let style_ratio = image
        .style()
        .get_property_value("aspect-ratio")
        .unwrap_or_default();
    if !style_ratio.trim().is_empty() {
        return AspectRatio::parse_css(&style_ratio);
    }

    let attr = |name: &str| {
        image
            .get_attribute(name)
            .and_then(|value| value.trim().parse::<f64>().ok())
    };
    if let (Some(width), Some(height)) = (attr("data-width"), attr("data-height")) {
        return AspectRatio::from_dimensions(width, height);
    }

    if image.complete() && image.natural_width() > 0 {
        return AspectRatio::from_dimensions(
            f64::from(image.natural_width()),
            f64::from(image.natural_height()),
        );
    }

    Err(LayoutError::InvalidAspectRatio(
        "image has no aspect-ratio, data-width/data-height or decoded size".to_string(),
    ))
}
