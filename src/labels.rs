//! Label assignments and role resolution
//!
//! Labels tag design elements with semantic roles ("background", "logo",
//! "cta", and so on). The map is authored elsewhere, manually or by a heuristic
//! assistant, and is authoritative only for elements it explicitly tags;
//! untagged descendants inherit the role of their nearest tagged ancestor.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentError;
use crate::element::{ElementTree, SourceElement};

/// Element id → role assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    assignments: HashMap<String, String>,
}

impl LabelMap {
    /// Create an empty label map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a label map from JSON (`{"elementId": "role", ...}`)
    pub fn from_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a label map from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Tag an element with a role, replacing any previous assignment
    pub fn assign(&mut self, element_id: impl Into<String>, role: impl Into<String>) {
        self.assignments.insert(element_id.into(), role.into());
    }

    /// The role explicitly assigned to an element, if any
    pub fn role_of(&self, element_id: &str) -> Option<&str> {
        self.assignments.get(element_id).map(|s| s.as_str())
    }

    /// Number of explicit assignments
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Group tree elements by effective role.
///
/// Pre-order depth-first traversal carrying the inherited role: an element's
/// effective role is its explicit label if present, else the inherited one.
/// Elements whose effective role is in `known_roles` are appended to that
/// role's bucket in traversal order, groups and leaves alike, so a tagged
/// group and its untagged children all land in the bucket. Effective roles
/// outside the vocabulary are skipped silently but still propagate to
/// descendants, shadowing any shallower assignment.
pub fn resolve_roles<'a>(
    tree: &'a ElementTree,
    labels: &LabelMap,
    known_roles: &HashSet<&str>,
) -> HashMap<String, Vec<&'a SourceElement>> {
    let mut buckets: HashMap<String, Vec<&'a SourceElement>> = HashMap::new();
    for root in &tree.roots {
        visit(root, None, labels, known_roles, &mut buckets);
    }
    buckets
}

fn visit<'a>(
    element: &'a SourceElement,
    inherited: Option<&str>,
    labels: &LabelMap,
    known_roles: &HashSet<&str>,
    buckets: &mut HashMap<String, Vec<&'a SourceElement>>,
) {
    let effective = labels.role_of(&element.id).or(inherited);

    if let Some(role) = effective {
        if known_roles.contains(role) {
            buckets.entry(role.to_string()).or_default().push(element);
        }
    }

    for child in &element.children {
        visit(child, effective, labels, known_roles, buckets);
    }
}
