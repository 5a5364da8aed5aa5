//! Grid items and aspect ratios

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;

/// Width divided by height of a displayed item
///
/// Always finite and strictly positive, with a finite reciprocal so a height
/// derived from it can be finite.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct AspectRatio(f64);

impl AspectRatio {
    pub fn new(value: f64) -> Result<Self, LayoutError> {
        if value.is_finite() && value > 0.0 && value.recip().is_finite() {
            Ok(Self(value))
        } else {
            Err(LayoutError::InvalidAspectRatio(value.to_string()))
        }
    }

    /// Ratio from natural pixel dimensions
    pub fn from_dimensions(width: f64, height: f64) -> Result<Self, LayoutError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(LayoutError::InvalidAspectRatio(format!("{}x{}", width, height)));
        }
        Self::new(width / height)
    }

    /// Parse a CSS `aspect-ratio` value
    ///
    /// Accepts `1.5`, `3/2`, `3 / 2` and either of those combined with the
    /// `auto` keyword. A bare `auto` carries no ratio and is rejected.
    pub fn parse_css(value: &str) -> Result<Self, LayoutError> {
        let invalid = || LayoutError::InvalidAspectRatio(format!("'{}'", value));

        let ratio = value
            .split_whitespace()
            .filter(|token| !token.eq_ignore_ascii_case("auto"))
            .collect::<Vec<_>>()
            .join(" ");
        if ratio.is_empty() {
            return Err(invalid());
        }

        // Each side must be a single number; "3 2" is not a ratio
        let (width, height) = match ratio.split_once('/') {
            Some((width, height)) => (width.trim(), Some(height.trim())),
            None => (ratio.as_str(), None),
        };
        let width: f64 = width.parse().map_err(|_| invalid())?;
        let height: f64 = match height {
            Some(height) => height.parse().map_err(|_| invalid())?,
            None => 1.0,
        };

        Self::from_dimensions(width, height).map_err(|_| invalid())
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Rendered height for a given rendered width
    pub fn height_for_width(self, width: f64) -> f64 {
        width / self.0
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One item in the grid, as seen by the layout engine
///
/// The aspect ratio is kept raw, and may be absent, so items carrying bad or
/// missing measurements can still be handed to a layout pass, which skips
/// them instead of failing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasonryItem {
    /// Optional caller identifier, echoed back on placements
    #[serde(default)]
    pub id: Option<String>,

    /// Width / height; `None` when the item could not be measured
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

impl MasonryItem {
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            id: None,
            aspect_ratio: Some(aspect_ratio),
        }
    }

    pub fn with_id(id: impl Into<String>, aspect_ratio: f64) -> Self {
        Self {
            id: Some(id.into()),
            aspect_ratio: Some(aspect_ratio),
        }
    }

    /// An item with no measurement yet
    pub fn unmeasured(id: Option<String>) -> Self {
        Self {
            id,
            aspect_ratio: None,
        }
    }

    /// Validated aspect ratio for this item
    pub fn ratio(&self) -> Result<AspectRatio, LayoutError> {
        match self.aspect_ratio {
            Some(value) => AspectRatio::new(value),
            None => Err(LayoutError::InvalidAspectRatio("missing".to_string())),
        }
    }
}
