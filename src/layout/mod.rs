//! Geometry engine for generating pixel-accurate layouts
//!
//! The engine runs in three stages over a resolved element tree: sizing
//! (aspect-preserving scale, cover for the background role, capped fit for
//! everything else), positioning (safezone-aware alignment with unclamped
//! offsets), and assembly (option lookup, role resolution, paint ordering).
//! All stages are pure closed-form math over the inputs; the same document,
//! tree, and labels always produce the identical layout.

pub mod assembler;
pub mod position;
pub mod sizing;
pub mod types;

pub use assembler::generate;
pub use position::{compute_position, safe_area, SafeArea};
pub use sizing::{compute_size, BACKGROUND_ROLE};
pub use types::*;
