//! Element sizing.
//!
//! Two sizing behaviors exist, selected purely by role name. The background
//! role cover-scales: the element grows until the container is fully covered,
//! overflow on one axis accepted. Every other role aspect-fits inside a cap
//! box derived from the rule's percentage limits, never growing past either
//! cap. Both preserve the source aspect ratio exactly; neither consults the
//! element's original pixel size beyond that ratio.

use crate::document::PositioningRule;
use crate::element::Bounds;

use super::types::Size;

/// Role name that triggers cover-scaling instead of capped fitting.
pub const BACKGROUND_ROLE: &str = "background";

/// Compute the rendered size of one element.
///
/// Elements with no usable source bounds collapse to zero size; they are
/// still emitted downstream so consumers see every resolved element.
///
/// Background sizes round up to whole pixels so coverage never falls a
/// fraction short; all other sizes round down so caps are never exceeded.
pub fn compute_size(
    role: &str,
    bounds: Option<&Bounds>,
    rule: &PositioningRule,
    container_width: f64,
    container_height: f64,
) -> Size {
    let Some(bounds) = bounds else {
        return Size::zero();
    };
    if bounds.is_degenerate() {
        return Size::zero();
    }

    let source_aspect = bounds.width() / bounds.height();
    if role == BACKGROUND_ROLE {
        cover_size(source_aspect, container_width, container_height)
    } else {
        fit_size(source_aspect, rule, container_width, container_height)
    }
}

/// Scale to the smallest size that covers the whole container.
fn cover_size(source_aspect: f64, container_width: f64, container_height: f64) -> Size {
    let container_aspect = container_width / container_height;

    let (width, height) = if container_aspect > source_aspect {
        // container is wider than the source: match widths, overflow height
        (container_width, container_width / source_aspect)
    } else {
        // container is taller (or equal): match heights, overflow width
        (container_height * source_aspect, container_height)
    };

    Size::new(width.ceil(), height.ceil())
}

/// Scale to the largest size that fits inside the rule's cap box.
fn fit_size(
    source_aspect: f64,
    rule: &PositioningRule,
    container_width: f64,
    container_height: f64,
) -> Size {
    let max_width = (rule.max_width_percent * container_width).floor();
    let max_height = (rule.max_height_percent * container_height).floor();

    let mut width = max_width;
    let mut height = width / source_aspect;
    if height > max_height {
        height = max_height;
        width = height * source_aspect;
    }

    Size::new(width.floor(), height.floor())
}
