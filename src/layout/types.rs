//! Output types for generated layouts.
//!
//! A generated layout is the engine's whole product: one pixel-space box per
//! placed element, plus enough context (role, visibility, source bounds, the
//! rules that produced it) for a renderer or editor to consume the result
//! without re-running the engine.

use serde::{Deserialize, Serialize};

use crate::document::{CoordinatePosition, DocumentError, LayoutRules};
use crate::element::Bounds;

/// A width/height pair in container pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A top-left corner in container pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One element placed in the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedElement {
    pub id: String,
    pub name: String,
    /// Role this element was placed as
    pub role: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Bounds the element had in the source design, if it carried any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_bounds: Option<Bounds>,
    /// The position that placed this element, echoed for editors
    pub position: CoordinatePosition,
}

/// A fully generated layout for one option.
///
/// Elements appear in paint order: whatever the option's `renderOrder`
/// dictates, remaining roles appended in stable sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLayout {
    /// Name of the option this layout was generated from
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: String,
    pub elements: Vec<GeneratedElement>,
    /// The rules that produced this layout, echoed for round-tripping
    pub rules: LayoutRules,
}

impl GeneratedLayout {
    /// Look up a placed element by source id
    pub fn element(&self, id: &str) -> Option<&GeneratedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All placed elements carrying a role, in paint order
    pub fn elements_with_role<'a>(
        &'a self,
        role: &'a str,
    ) -> impl Iterator<Item = &'a GeneratedElement> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to single-line JSON
    pub fn to_compact_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}
