//! Lint checks for rule documents.
//!
//! The geometry engine never validates its inputs: out-of-convention values
//! flow straight through the math. These checks are the advisory layer that
//! catches authoring mistakes before a document ships, without ever blocking
//! generation.

use std::collections::HashMap;

use super::{Channel, Layout, LayoutOption, RuleDocument};

/// A lint warning about a document defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of document defect
#[derive(Debug, PartialEq, Eq)]
pub enum LintCategory {
    Naming,
    Range,
    Position,
    Role,
    Dimension,
}

impl std::fmt::Display for LintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintCategory::Naming => write!(f, "naming"),
            LintCategory::Range => write!(f, "range"),
            LintCategory::Position => write!(f, "position"),
            LintCategory::Role => write!(f, "role"),
            LintCategory::Dimension => write!(f, "dimension"),
        }
    }
}

/// Run all lint checks on a rule document.
pub fn check(doc: &RuleDocument) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_option_names(doc, &mut warnings);
    for channel in &doc.channels {
        for layout in &channel.layouts {
            check_layout_dimensions(channel, layout, &mut warnings);
            for option in &layout.options {
                check_safezone_margin(option, &mut warnings);
                check_positioning_rules(option, &mut warnings);
                check_role_references(option, &mut warnings);
            }
        }
    }
    warnings
}

// ── Option names ──────────────────────────────────────────────────

/// Option lookup is by name across the whole document, first match wins;
/// a duplicated name silently shadows every later occurrence.
fn check_option_names(doc: &RuleDocument, warnings: &mut Vec<LintWarning>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in doc.option_names() {
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut duplicated: Vec<(&str, usize)> =
        counts.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicated.sort();

    for (name, count) in duplicated {
        warnings.push(LintWarning {
            category: LintCategory::Naming,
            message: format!(
                "option \"{}\" is defined {} times; lookups only ever see the first",
                name, count
            ),
        });
    }
}

// ── Layout dimensions ─────────────────────────────────────────────

fn check_layout_dimensions(
    channel: &Channel,
    layout: &Layout,
    warnings: &mut Vec<LintWarning>,
) {
    let place = format!("channel \"{}\" layout \"{}\"", channel.id, layout.aspect_ratio);

    if layout.width <= 0.0 || layout.height <= 0.0 {
        warnings.push(LintWarning {
            category: LintCategory::Dimension,
            message: format!(
                "{} has non-positive dimensions {}x{}",
                place, layout.width, layout.height
            ),
        });
        return;
    }

    match layout.declared_ratio() {
        None => warnings.push(LintWarning {
            category: LintCategory::Dimension,
            message: format!("{} aspect ratio does not parse as \"W:H\"", place),
        }),
        Some(declared) => {
            let actual = layout.width / layout.height;
            if (declared - actual).abs() > 0.01 {
                warnings.push(LintWarning {
                    category: LintCategory::Dimension,
                    message: format!(
                        "{} declares ratio {:.2} but {}x{} is {:.2}",
                        place, declared, layout.width, layout.height, actual
                    ),
                });
            }
        }
    }
}

// ── Safezone margin ───────────────────────────────────────────────

fn check_safezone_margin(option: &LayoutOption, warnings: &mut Vec<LintWarning>) {
    let margin = option.safezone_margin;
    if margin < 0.0 {
        warnings.push(LintWarning {
            category: LintCategory::Range,
            message: format!(
                "option \"{}\": safezoneMargin {} is negative",
                option.name, margin
            ),
        });
    } else if margin >= 0.5 {
        warnings.push(LintWarning {
            category: LintCategory::Range,
            message: format!(
                "option \"{}\": safezoneMargin {} leaves no safe area",
                option.name, margin
            ),
        });
    }
}

// ── Positioning rules ─────────────────────────────────────────────

fn check_positioning_rules(option: &LayoutOption, warnings: &mut Vec<LintWarning>) {
    for (role, rule) in &option.rules.positioning {
        let place = format!("option \"{}\": role \"{}\"", option.name, role);

        if !(0.0..=1.0).contains(&rule.max_width_percent) {
            warnings.push(LintWarning {
                category: LintCategory::Range,
                message: format!(
                    "{} maxWidthPercent {} is outside 0..=1",
                    place, rule.max_width_percent
                ),
            });
        }
        if !(0.0..=1.0).contains(&rule.max_height_percent) {
            warnings.push(LintWarning {
                category: LintCategory::Range,
                message: format!(
                    "{} maxHeightPercent {} is outside 0..=1",
                    place, rule.max_height_percent
                ),
            });
        }

        let pos = &rule.coordinate_position;
        for (field, value) in [
            ("horizontalOffset", pos.horizontal_offset),
            ("verticalOffset", pos.vertical_offset),
        ] {
            if let Some(v) = value {
                if !(-50.0..=50.0).contains(&v) {
                    warnings.push(LintWarning {
                        category: LintCategory::Range,
                        message: format!("{} {} {} is outside -50..=50", place, field, v),
                    });
                }
            }
        }
        for (field, value) in [("customX", pos.custom_x), ("customY", pos.custom_y)] {
            if let Some(v) = value {
                if !(0.0..=100.0).contains(&v) {
                    warnings.push(LintWarning {
                        category: LintCategory::Range,
                        message: format!("{} {} {} is outside 0..=100", place, field, v),
                    });
                }
            }
        }

        // a lone custom coordinate is inert: the pair only takes effect together
        if pos.custom_x.is_some() != pos.custom_y.is_some() {
            let set = if pos.custom_x.is_some() {
                "customX"
            } else {
                "customY"
            };
            warnings.push(LintWarning {
                category: LintCategory::Position,
                message: format!(
                    "{} sets {} without its partner; alignment still applies",
                    place, set
                ),
            });
        }
    }
}

// ── Role references ───────────────────────────────────────────────

/// Visibility entries and renderOrder names only do anything for roles that
/// positioning actually places.
fn check_role_references(option: &LayoutOption, warnings: &mut Vec<LintWarning>) {
    for role in option.rules.visibility.keys() {
        if !option.rules.positioning.contains_key(role) {
            warnings.push(LintWarning {
                category: LintCategory::Role,
                message: format!(
                    "option \"{}\": visibility lists role \"{}\" but positioning never places it",
                    option.name, role
                ),
            });
        }
    }

    if let Some(order) = &option.rules.render_order {
        for role in order {
            if !option.rules.positioning.contains_key(role) {
                warnings.push(LintWarning {
                    category: LintCategory::Role,
                    message: format!(
                        "option \"{}\": renderOrder lists role \"{}\" but positioning never places it",
                        option.name, role
                    ),
                });
            }
        }
    }
}
