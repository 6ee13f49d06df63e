//! Legacy position keywords
//!
//! Early rule documents placed elements with a single keyword such as
//! `"top-right"` instead of a coordinate position. Documents in that form
//! still exist, so deserialization routes keywords through this table and
//! upgrades them to the coordinate model on the way in. Keywords never
//! survive past the document boundary and are never written back out.

use super::{CoordinatePosition, HorizontalAlignment, VerticalAlignment};

/// Map a legacy keyword to its coordinate-model equivalent.
///
/// Recognizes the nine corner/edge/center combinations plus the bare edge
/// aliases (`"top"` means `"top-center"` and so on). Returns `None` for
/// anything else; the caller turns that into a parse error.
pub fn coordinate_position(keyword: &str) -> Option<CoordinatePosition> {
    use HorizontalAlignment::{Center, Left, Right};
    use VerticalAlignment::{Bottom, Middle, Top};

    let (horizontal, vertical) = match keyword {
        "top-left" => (Left, Top),
        "top-center" | "top" => (Center, Top),
        "top-right" => (Right, Top),
        "center-left" | "left" => (Left, Middle),
        "center" | "middle" => (Center, Middle),
        "center-right" | "right" => (Right, Middle),
        "bottom-left" => (Left, Bottom),
        "bottom-center" | "bottom" => (Center, Bottom),
        "bottom-right" => (Right, Bottom),
        _ => return None,
    };

    Some(CoordinatePosition::new(horizontal, vertical))
}
