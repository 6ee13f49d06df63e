//! Layout assembly.
//!
//! Ties the stages together for one option: find the option, resolve roles
//! over the element tree, then size and place every resolved element in
//! paint order. The assembler never fails on content: roles nobody carries
//! are skipped, elements without bounds come out zero-sized, and hidden
//! elements are emitted with their flag cleared so editors can still show
//! them. The only way to get nothing back is asking for an option the
//! document does not define.

use std::collections::HashSet;

use crate::document::RuleDocument;
use crate::element::ElementTree;
use crate::labels::{resolve_roles, LabelMap};

use super::position::compute_position;
use super::sizing::compute_size;
use super::types::{GeneratedElement, GeneratedLayout};

/// Generate the layout for one named option.
///
/// Returns `None` when no option with that name exists anywhere in the
/// document. Every other input shape produces a layout, possibly with an
/// empty element list.
pub fn generate(
    document: &RuleDocument,
    option_name: &str,
    tree: &ElementTree,
    labels: &LabelMap,
) -> Option<GeneratedLayout> {
    let found = document.find_option(option_name)?;
    let layout = found.layout;
    let option = found.option;
    let rules = &option.rules;

    let known_roles: HashSet<&str> = rules.positioning.keys().map(String::as_str).collect();
    let buckets = resolve_roles(tree, labels, &known_roles);
    let index = tree.index();

    let mut elements: Vec<GeneratedElement> = Vec::new();
    for role in rules.role_order() {
        // role_order can list roles that positioning never places; they
        // carry no rule, so there is nothing to do for them
        let Some(rule) = rules.positioning.get(role) else {
            continue;
        };
        // no element carries this role in this tree; that is a content
        // gap, not an error
        let Some(carriers) = buckets.get(role) else {
            continue;
        };

        let role_visible = rules.is_role_visible(role);
        for element in carriers {
            let size = compute_size(
                role,
                element.bounds.as_ref(),
                rule,
                layout.width,
                layout.height,
            );
            let point = compute_position(
                role,
                rule,
                size,
                layout.width,
                layout.height,
                option.safezone_margin,
            );

            elements.push(GeneratedElement {
                id: element.id.clone(),
                name: element.name.clone(),
                role: role.to_string(),
                x: point.x,
                y: point.y,
                width: size.width,
                height: size.height,
                visible: role_visible && index.effective_visibility(element),
                parent: element.parent.clone(),
                original_bounds: element.bounds,
                position: rule.coordinate_position,
            });
        }
    }

    Some(GeneratedLayout {
        name: option.name.clone(),
        width: layout.width,
        height: layout.height,
        aspect_ratio: layout.aspect_ratio.clone(),
        elements,
        rules: rules.clone(),
    })
}
