//! admat - deterministic layout generation for advertising creatives
//!
//! This library takes a labeled element tree decoded from a design file and a
//! declarative rule document, and produces pixel-accurate layouts per channel
//! and aspect ratio. Generation is pure closed-form geometry: the same inputs
//! always yield the identical layout, so editors can re-run it freely.
//!
//! # Example
//!
//! ```rust
//! use admat::{
//!     generate, Bounds, Channel, CoordinatePosition, ElementTree, HorizontalAlignment,
//!     LabelMap, Layout, LayoutOption, LayoutRules, PositioningRule, RuleDocument,
//!     SourceElement, VerticalAlignment,
//! };
//!
//! let document = RuleDocument::new().with_channel(
//!     Channel::new("meta", "Meta").with_layout(
//!         Layout::new("1:1", 1080.0, 1080.0).with_option(LayoutOption::new(
//!             "feed",
//!             LayoutRules::new().with_rule(
//!                 "logo",
//!                 PositioningRule::new(
//!                     0.3,
//!                     0.3,
//!                     CoordinatePosition::new(
//!                         HorizontalAlignment::Right,
//!                         VerticalAlignment::Top,
//!                     ),
//!                 ),
//!             ),
//!         )),
//!     ),
//! );
//!
//! let tree = ElementTree::from_roots(vec![SourceElement::new(
//!     "logo-1",
//!     "Brand Logo",
//!     Bounds::new(0.0, 0.0, 100.0, 200.0),
//! )]);
//! let mut labels = LabelMap::new();
//! labels.assign("logo-1", "logo");
//!
//! let layout = generate(&document, "feed", &tree, &labels).unwrap();
//! let logo = layout.element("logo-1").unwrap();
//! assert_eq!((logo.width, logo.height), (324.0, 162.0));
//! assert!((logo.x - 734.4).abs() < 1e-9);
//! assert!((logo.y - 21.6).abs() < 1e-9);
//! ```

pub mod document;
pub mod element;
pub mod labels;
pub mod layout;
pub mod preview;

pub use document::{
    Channel, CoordinatePosition, DocumentError, HorizontalAlignment, Layout, LayoutOption,
    LayoutRules, PositioningRule, RuleDocument, VerticalAlignment, DEFAULT_SAFEZONE_MARGIN,
};
pub use element::{Bounds, ElementIndex, ElementTree, SourceElement};
pub use labels::{resolve_roles, LabelMap};
pub use layout::{generate, GeneratedElement, GeneratedLayout, BACKGROUND_ROLE};
pub use preview::render_layout_svg;
