//! Element positioning.
//!
//! Placement happens inside the safe area: the container inset by the
//! option's safezone margin on every edge. Alignment picks one of nine
//! anchor combinations, percentage offsets then nudge the element relative
//! to safe-area dimensions. Offsets are never clamped; an authored rule can
//! push an element to or past the container edge.
//!
//! Two placements bypass all of that: the background role always sits at
//! the origin, and a rule with both custom coordinates places the element's
//! center absolutely in full-container percent space.

use crate::document::{HorizontalAlignment, PositioningRule, VerticalAlignment};

use super::sizing::BACKGROUND_ROLE;
use super::types::{Point, Size};

/// The container minus its safezone margin on all four edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SafeArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Inset the container by a margin fraction on every edge.
pub fn safe_area(container_width: f64, container_height: f64, margin: f64) -> SafeArea {
    SafeArea {
        left: margin * container_width,
        top: margin * container_height,
        width: container_width - 2.0 * margin * container_width,
        height: container_height - 2.0 * margin * container_height,
    }
}

/// Compute the top-left corner for one sized element.
///
/// `safezone_margin` is the option-level margin; rules that opt out of the
/// safezone are placed against the full container instead.
pub fn compute_position(
    role: &str,
    rule: &PositioningRule,
    size: Size,
    container_width: f64,
    container_height: f64,
    safezone_margin: f64,
) -> Point {
    if role == BACKGROUND_ROLE {
        return Point::new(0.0, 0.0);
    }

    let position = &rule.coordinate_position;
    if let (Some(custom_x), Some(custom_y)) = (position.custom_x, position.custom_y) {
        // absolute placement: the element's center lands on the percent point
        return Point::new(
            custom_x / 100.0 * container_width - size.width / 2.0,
            custom_y / 100.0 * container_height - size.height / 2.0,
        );
    }

    let margin = if rule.apply_safezone {
        safezone_margin
    } else {
        0.0
    };
    let safe = safe_area(container_width, container_height, margin);

    let mut x = match position.horizontal_alignment {
        HorizontalAlignment::Left => safe.left,
        HorizontalAlignment::Center => safe.left + (safe.width - size.width) / 2.0,
        HorizontalAlignment::Right => safe.left + safe.width - size.width,
    };
    let mut y = match position.vertical_alignment {
        VerticalAlignment::Top => safe.top,
        VerticalAlignment::Middle => safe.top + (safe.height - size.height) / 2.0,
        VerticalAlignment::Bottom => safe.top + safe.height - size.height,
    };

    if let Some(offset) = position.horizontal_offset {
        x += offset / 100.0 * safe.width;
    }
    if let Some(offset) = position.vertical_offset {
        y += offset / 100.0 * safe.height;
    }

    Point::new(x, y)
}
