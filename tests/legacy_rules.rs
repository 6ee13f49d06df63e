//! Tests for the legacy `position` keyword accepted in rule documents.
//!
//! Older documents anchor elements with a single keyword ("top-right",
//! "bottom", ...). The loader upgrades those to the coordinate model at
//! parse time, so everything downstream sees one representation.

use admat::{generate, ElementTree, LabelMap, RuleDocument};

const LEGACY_RULES: &str = r#"{
  "channels": [
    {
      "id": "meta",
      "name": "Meta",
      "layouts": [
        {
          "aspectRatio": "1:1",
          "width": 1080,
          "height": 1080,
          "options": [
            {
              "name": "feed",
              "rules": {
                "positioning": {
                  "logo": {
                    "maxWidthPercent": 0.3,
                    "maxHeightPercent": 0.3,
                    "position": "top-right"
                  },
                  "cta": {
                    "maxWidthPercent": 0.4,
                    "maxHeightPercent": 0.12,
                    "position": "bottom"
                  },
                  "headline": {
                    "maxWidthPercent": 0.8,
                    "maxHeightPercent": 0.2,
                    "position": "middle"
                  }
                }
              }
            }
          ]
        }
      ]
    }
  ]
}"#;

const MODERN_RULES: &str = r#"{
  "channels": [
    {
      "id": "meta",
      "name": "Meta",
      "layouts": [
        {
          "aspectRatio": "1:1",
          "width": 1080,
          "height": 1080,
          "options": [
            {
              "name": "feed",
              "rules": {
                "positioning": {
                  "logo": {
                    "maxWidthPercent": 0.3,
                    "maxHeightPercent": 0.3,
                    "coordinatePosition": {
                      "horizontalAlignment": "right",
                      "verticalAlignment": "top"
                    }
                  },
                  "cta": {
                    "maxWidthPercent": 0.4,
                    "maxHeightPercent": 0.12,
                    "coordinatePosition": {
                      "horizontalAlignment": "center",
                      "verticalAlignment": "bottom"
                    }
                  },
                  "headline": {
                    "maxWidthPercent": 0.8,
                    "maxHeightPercent": 0.2,
                    "coordinatePosition": {
                      "horizontalAlignment": "center",
                      "verticalAlignment": "middle"
                    }
                  }
                }
              }
            }
          ]
        }
      ]
    }
  ]
}"#;

const TREE: &str = r#"[
  {
    "id": "logo-1",
    "name": "Logo",
    "bounds": { "top": 0, "left": 0, "bottom": 100, "right": 200 }
  },
  {
    "id": "cta-1",
    "name": "CTA",
    "bounds": { "top": 0, "left": 0, "bottom": 80, "right": 360 }
  },
  {
    "id": "headline-1",
    "name": "Headline",
    "bounds": { "top": 0, "left": 0, "bottom": 120, "right": 960 }
  }
]"#;

const LABELS: &str = r#"{
  "logo-1": "logo",
  "cta-1": "cta",
  "headline-1": "headline"
}"#;

fn inputs() -> (ElementTree, LabelMap) {
    let tree = ElementTree::from_str(TREE).expect("tree parses");
    let labels = LabelMap::from_str(LABELS).expect("labels parse");
    (tree, labels)
}

#[test]
fn test_keywords_upgrade_to_the_coordinate_model() {
    let legacy = RuleDocument::from_str(LEGACY_RULES).expect("legacy document parses");
    let modern = RuleDocument::from_str(MODERN_RULES).expect("modern document parses");
    // after the upgrade the two documents are indistinguishable
    assert_eq!(legacy, modern);
}

#[test]
fn test_keyword_document_generates_identical_geometry() {
    let legacy = RuleDocument::from_str(LEGACY_RULES).expect("legacy document parses");
    let modern = RuleDocument::from_str(MODERN_RULES).expect("modern document parses");
    let (tree, labels) = inputs();

    let from_legacy = generate(&legacy, "feed", &tree, &labels).expect("option exists");
    let from_modern = generate(&modern, "feed", &tree, &labels).expect("option exists");
    assert_eq!(from_legacy, from_modern);

    // spot-check one anchor to make sure both paths did real work
    let logo = from_legacy.element("logo-1").unwrap();
    assert_eq!((logo.width, logo.height), (324.0, 162.0));
    assert!((logo.x - 734.4).abs() < 1e-9);
    assert!((logo.y - 21.6).abs() < 1e-9);
}

#[test]
fn test_unknown_keyword_is_rejected() {
    let broken = LEGACY_RULES.replace("top-right", "upper-left");
    let result = RuleDocument::from_str(&broken);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("upper-left"), "unexpected error: {message}");
}

#[test]
fn test_explicit_coordinate_position_wins_over_keyword() {
    let rules = r#"{
      "channels": [
        {
          "id": "meta",
          "name": "Meta",
          "layouts": [
            {
              "aspectRatio": "1:1",
              "width": 1080,
              "height": 1080,
              "options": [
                {
                  "name": "feed",
                  "rules": {
                    "positioning": {
                      "logo": {
                        "maxWidthPercent": 0.3,
                        "maxHeightPercent": 0.3,
                        "position": "bottom-left",
                        "coordinatePosition": {
                          "horizontalAlignment": "right",
                          "verticalAlignment": "top"
                        }
                      }
                    }
                  }
                }
              ]
            }
          ]
        }
      ]
    }"#;
    let document = RuleDocument::from_str(rules).expect("document parses");
    let (tree, labels) = inputs();
    let layout = generate(&document, "feed", &tree, &labels).expect("option exists");

    let logo = layout.element("logo-1").unwrap();
    assert!((logo.x - 734.4).abs() < 1e-9);
    assert!((logo.y - 21.6).abs() < 1e-9);
}

#[test]
fn test_toml_document_with_keywords() {
    let rules = r#"
[[channels]]
id = "meta"
name = "Meta"

[[channels.layouts]]
aspectRatio = "1:1"
width = 1080
height = 1080

[[channels.layouts.options]]
name = "feed"

[channels.layouts.options.rules.positioning.logo]
maxWidthPercent = 0.3
maxHeightPercent = 0.3
position = "top-right"
"#;
    let document = RuleDocument::from_toml_str(rules).expect("TOML document parses");
    let (tree, labels) = inputs();
    let layout = generate(&document, "feed", &tree, &labels).expect("option exists");

    let logo = layout.element("logo-1").unwrap();
    assert_eq!((logo.width, logo.height), (324.0, 162.0));
    assert!((logo.x - 734.4).abs() < 1e-9);
}
