//! Source element tree decoded from a design file
//!
//! The decoder collaborator hands the engine a tree of elements with ids,
//! original bounds, visibility flags, and parent back-references. This module
//! provides the tree types, an id index for parent-chain lookups, and the
//! ancestor visibility walk used during assembly.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentError;

/// Axis-aligned bounds of a source element, in design-file pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Width of the bounded region
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the bounded region
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when the region has no usable area (zero or inverted extent)
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

fn default_visible() -> bool {
    true
}

/// One node of the decoded element tree.
///
/// `parent` is a back-reference by id, not ownership; the tree is owned
/// through `children`. Groups may carry no bounds of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceElement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<SourceElement>,
}

impl SourceElement {
    /// Create a leaf element with bounds
    pub fn new(id: impl Into<String>, name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bounds: Some(bounds),
            visible: true,
            parent: None,
            children: vec![],
        }
    }

    /// Create a boundless group element
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bounds: None,
            visible: true,
            parent: None,
            children: vec![],
        }
    }

    /// Attach a child, wiring its parent back-reference to this element
    pub fn with_child(mut self, mut child: SourceElement) -> Self {
        child.parent = Some(self.id.clone());
        self.children.push(child);
        self
    }

    /// Override the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// The full decoded tree. Decoders emit a single artboard root; multi-root
/// snapshots are accepted too, so the wire shape is either one element object
/// or an array of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementTree {
    pub roots: Vec<SourceElement>,
}

impl<'de> Deserialize<'de> for ElementTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Many(Vec<SourceElement>),
            One(Box<SourceElement>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Many(roots) => ElementTree { roots },
            Repr::One(root) => ElementTree { roots: vec![*root] },
        })
    }
}

impl ElementTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from root elements
    pub fn from_roots(roots: Vec<SourceElement>) -> Self {
        Self { roots }
    }

    /// Parse a tree from decoder JSON (single root object or array of roots)
    pub fn from_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a tree from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Build the id index over every node in the tree
    pub fn index(&self) -> ElementIndex<'_> {
        let mut by_id = HashMap::new();
        for root in &self.roots {
            index_subtree(root, &mut by_id);
        }
        ElementIndex { by_id }
    }
}

fn index_subtree<'a>(element: &'a SourceElement, by_id: &mut HashMap<&'a str, &'a SourceElement>) {
    by_id.insert(element.id.as_str(), element);
    for child in &element.children {
        index_subtree(child, by_id);
    }
}

/// Id → node lookup over a tree snapshot.
///
/// Parent back-references are string ids, so ancestor walks go through this
/// index rather than through language references. The decoder guarantees the
/// tree is acyclic.
#[derive(Debug)]
pub struct ElementIndex<'a> {
    by_id: HashMap<&'a str, &'a SourceElement>,
}

impl<'a> ElementIndex<'a> {
    /// Look up an element by id
    pub fn get(&self, id: &str) -> Option<&'a SourceElement> {
        self.by_id.get(id).copied()
    }

    /// Number of indexed elements
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Effective visibility of an element: its own flag AND every ancestor's
    /// flag along the parent chain. Any hidden ancestor hides the element
    /// regardless of its own flag. Parents missing from the index end the
    /// walk (detached subtrees count as roots).
    pub fn effective_visibility(&self, element: &SourceElement) -> bool {
        if !element.visible {
            return false;
        }
        let mut current = element.parent.as_deref();
        while let Some(parent_id) = current {
            match self.get(parent_id) {
                Some(parent) => {
                    if !parent.visible {
                        return false;
                    }
                    current = parent.parent.as_deref();
                }
                None => break,
            }
        }
        true
    }
}
