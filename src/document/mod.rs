//! Rule document model
//!
//! A rule document describes, per channel and per aspect ratio, how labeled
//! creative elements are laid out: which roles are visible, how large each
//! may grow, and where it sits relative to the container and its safezone.
//! Documents are authored and persisted by an external editor; this module
//! owns the wire model, loading/saving, and option lookup.
//!
//! Wire shape (JSON, TOML accepted for hand-authored documents):
//!
//! ```text
//! {channels:[{id,name,layouts:[{aspectRatio,width,height,options:[
//!     {name, safezoneMargin?, rules:{visibility, positioning, renderOrder?}}
//! ]}]}]}
//! ```

pub mod legacy;
pub mod lint;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fraction of each container edge reserved by default as the safezone inset.
pub const DEFAULT_SAFEZONE_MARGIN: f64 = 0.02;

/// Errors that can occur when loading or saving documents
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse JSON document: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse TOML document: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Failed to write TOML document: {0}")]
    TomlWriteError(#[from] toml::ser::Error),
}

/// Horizontal anchoring of an element inside the safe area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of an element inside the safe area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
}

/// Where an element sits in the container.
///
/// Alignment plus optional percentage offsets is the normal path; when both
/// `custom_x` and `custom_y` are present they place the element's center
/// absolutely (percent of the full container) and every other field is
/// ignored, safezone included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePosition {
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Percent of safe-area width, -50..=50 by convention; never clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_offset: Option<f64>,
    /// Percent of safe-area height, -50..=50 by convention; never clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_offset: Option<f64>,
    /// Percent of container width, 0..=100; element center lands here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_x: Option<f64>,
    /// Percent of container height, 0..=100; element center lands here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_y: Option<f64>,
}

impl CoordinatePosition {
    /// Create an alignment-based position with no offsets
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal_alignment: horizontal,
            vertical_alignment: vertical,
            horizontal_offset: None,
            vertical_offset: None,
            custom_x: None,
            custom_y: None,
        }
    }

    /// Create an absolute position; alignment fields are carried but inert
    pub fn custom(x: f64, y: f64) -> Self {
        Self {
            custom_x: Some(x),
            custom_y: Some(y),
            ..Self::new(HorizontalAlignment::Center, VerticalAlignment::Middle)
        }
    }

    /// Set both percentage offsets
    pub fn with_offsets(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_offset = Some(horizontal);
        self.vertical_offset = Some(vertical);
        self
    }

    /// True when both custom coordinates are present and alignment is bypassed
    pub fn is_custom(&self) -> bool {
        self.custom_x.is_some() && self.custom_y.is_some()
    }
}

fn default_apply_safezone() -> bool {
    true
}

/// Sizing caps and placement for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningRule {
    /// Cap as a fraction of container width, 0..=1 by convention
    pub max_width_percent: f64,
    /// Cap as a fraction of container height, 0..=1 by convention
    pub max_height_percent: f64,
    #[serde(default = "default_apply_safezone")]
    pub apply_safezone: bool,
    pub coordinate_position: CoordinatePosition,
}

impl PositioningRule {
    /// Create a rule that applies the safezone
    pub fn new(
        max_width_percent: f64,
        max_height_percent: f64,
        coordinate_position: CoordinatePosition,
    ) -> Self {
        Self {
            max_width_percent,
            max_height_percent,
            apply_safezone: true,
            coordinate_position,
        }
    }

    /// Opt this rule out of the safezone inset
    pub fn without_safezone(mut self) -> Self {
        self.apply_safezone = false;
        self
    }
}

// Deserialization accepts both the coordinate model and the retired keyword
// model; keywords are upgraded through `legacy` right here, at the document
// boundary, so the engine only ever sees CoordinatePosition values.
impl<'de> Deserialize<'de> for PositioningRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            max_width_percent: f64,
            max_height_percent: f64,
            #[serde(default = "default_apply_safezone")]
            apply_safezone: bool,
            #[serde(default)]
            coordinate_position: Option<CoordinatePosition>,
            #[serde(default)]
            position: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let coordinate_position = match (raw.coordinate_position, raw.position) {
            // the coordinate model wins when a document carries both
            (Some(position), _) => position,
            (None, Some(keyword)) => legacy::coordinate_position(&keyword).ok_or_else(|| {
                serde::de::Error::custom(format_args!(
                    "unknown legacy position keyword '{keyword}'"
                ))
            })?,
            (None, None) => return Err(serde::de::Error::missing_field("coordinatePosition")),
        };

        Ok(PositioningRule {
            max_width_percent: raw.max_width_percent,
            max_height_percent: raw.max_height_percent,
            apply_safezone: raw.apply_safezone,
            coordinate_position,
        })
    }
}

/// Per-role visibility, placement, and paint order for one option.
///
/// The maps are ordered by role name so that generation and serialization
/// see the same sequence for the same document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRules {
    #[serde(default)]
    pub visibility: BTreeMap<String, bool>,
    #[serde(default)]
    pub positioning: BTreeMap<String, PositioningRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_order: Option<Vec<String>>,
}

impl LayoutRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a positioning rule for a role
    pub fn with_rule(mut self, role: impl Into<String>, rule: PositioningRule) -> Self {
        self.positioning.insert(role.into(), rule);
        self
    }

    /// Set a role's visibility flag
    pub fn with_visibility(mut self, role: impl Into<String>, visible: bool) -> Self {
        self.visibility.insert(role.into(), visible);
        self
    }

    /// Set the paint order
    pub fn with_render_order(mut self, roles: &[&str]) -> Self {
        self.render_order = Some(roles.iter().map(|r| r.to_string()).collect());
        self
    }

    /// Whether a role is visible. Only an explicit `false` hides a role;
    /// absent entries default to visible.
    pub fn is_role_visible(&self, role: &str) -> bool {
        self.visibility.get(role).copied().unwrap_or(true)
    }

    /// Paint order for this option: `renderOrder` first (duplicates visited
    /// once, at their first occurrence), then any positioned roles it omits,
    /// appended in stable sorted order.
    pub fn role_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        if let Some(listed) = &self.render_order {
            for role in listed {
                if !order.contains(&role.as_str()) {
                    order.push(role);
                }
            }
        }
        for role in self.positioning.keys() {
            if !order.contains(&role.as_str()) {
                order.push(role);
            }
        }
        order
    }
}

fn default_safezone_margin() -> f64 {
    DEFAULT_SAFEZONE_MARGIN
}

/// One named layout variant within a Layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOption {
    pub name: String,
    /// Fraction of each container edge kept clear for non-background content
    #[serde(default = "default_safezone_margin")]
    pub safezone_margin: f64,
    pub rules: LayoutRules,
}

impl LayoutOption {
    pub fn new(name: impl Into<String>, rules: LayoutRules) -> Self {
        Self {
            name: name.into(),
            safezone_margin: DEFAULT_SAFEZONE_MARGIN,
            rules,
        }
    }

    pub fn with_safezone_margin(mut self, margin: f64) -> Self {
        self.safezone_margin = margin;
        self
    }
}

/// One target container: an aspect ratio with pixel dimensions and its
/// authored options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Display form "W:H", e.g. "1:1" or "9:16"
    pub aspect_ratio: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub options: Vec<LayoutOption>,
}

impl Layout {
    pub fn new(aspect_ratio: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            width,
            height,
            options: vec![],
        }
    }

    pub fn with_option(mut self, option: LayoutOption) -> Self {
        self.options.push(option);
        self
    }

    /// Numeric ratio declared by the `aspect_ratio` string, if it parses
    pub fn declared_ratio(&self) -> Option<f64> {
        let (w, h) = parse_aspect_ratio(&self.aspect_ratio)?;
        Some(w / h)
    }
}

/// A distribution channel and its ordered layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layouts: vec![],
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layouts.push(layout);
        self
    }
}

/// A matched option together with the channel and layout that own it.
#[derive(Debug, Clone, Copy)]
pub struct OptionRef<'a> {
    pub channel: &'a Channel,
    pub layout: &'a Layout,
    pub option: &'a LayoutOption,
}

/// The full rule document: every channel the account publishes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDocument {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl RuleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Parse a rule document from JSON
    pub fn from_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a rule document from TOML (hand-authored documents)
    pub fn from_toml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a rule document from a file; `.toml` parses as TOML, anything
    /// else as JSON
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)
        } else {
            Self::from_str(&content)
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save to a file; `.toml` writes TOML, anything else JSON
    pub fn to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let content = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            self.to_json_string()?
        };
        Ok(std::fs::write(path, content)?)
    }

    /// Find an option by name anywhere in the document, in document order
    pub fn find_option(&self, name: &str) -> Option<OptionRef<'_>> {
        for channel in &self.channels {
            for layout in &channel.layouts {
                for option in &layout.options {
                    if option.name == name {
                        return Some(OptionRef {
                            channel,
                            layout,
                            option,
                        });
                    }
                }
            }
        }
        None
    }

    /// Every option name in the document, in document order
    pub fn option_names(&self) -> Vec<&str> {
        self.channels
            .iter()
            .flat_map(|c| &c.layouts)
            .flat_map(|l| &l.options)
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Option names similar to `target`, nearest first, for "did you mean"
    /// messages when a lookup misses
    pub fn suggest_options(&self, target: &str) -> Vec<String> {
        find_similar(&self.option_names(), target, 2)
    }
}

/// Parse a "W:H" aspect-ratio string into its two components.
pub fn parse_aspect_ratio(value: &str) -> Option<(f64, f64)> {
    let (w, h) = value.split_once(':')?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        return None;
    }
    Some((w, h))
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Find names within a maximum edit distance of the target, nearest first
fn find_similar(names: &[&str], target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = names
        .iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((*name, dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}
