//! Geometry invariants checked across programmatically built documents.
//!
//! These tests sweep alignment combinations, source aspects and cap values
//! instead of pinning a single scenario, so regressions in the sizing or
//! positioning math show up even when one hand-picked case still passes.

use admat::{
    generate, Bounds, Channel, CoordinatePosition, ElementTree, GeneratedLayout,
    HorizontalAlignment, LabelMap, Layout, LayoutOption, LayoutRules, PositioningRule,
    RuleDocument, SourceElement, VerticalAlignment,
};

const CONTAINER: f64 = 1080.0;
const EPSILON: f64 = 1e-9;

fn document_with(option: LayoutOption) -> RuleDocument {
    RuleDocument::new().with_channel(
        Channel::new("test", "Test")
            .with_layout(Layout::new("1:1", CONTAINER, CONTAINER).with_option(option)),
    )
}

fn single_item_inputs(width: f64, height: f64) -> (ElementTree, LabelMap) {
    let tree = ElementTree::from_roots(vec![SourceElement::new(
        "item-1",
        "Item",
        Bounds::new(0.0, 0.0, height, width),
    )]);
    let mut labels = LabelMap::new();
    labels.assign("item-1", "item");
    (tree, labels)
}

fn generate_single(rules: LayoutRules, source_w: f64, source_h: f64) -> GeneratedLayout {
    let document = document_with(LayoutOption::new("only", rules));
    let (tree, labels) = single_item_inputs(source_w, source_h);
    generate(&document, "only", &tree, &labels).expect("option exists")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_every_alignment_lands_on_its_safezone_anchor() {
    // 200x100 source under 0.3/0.3 caps in a 1080 square: 324x162.
    // Safe area spans 21.6..=1058.4 on both axes.
    let horizontal_cases = [
        (HorizontalAlignment::Left, 21.6),
        (HorizontalAlignment::Center, 378.0),
        (HorizontalAlignment::Right, 734.4),
    ];
    let vertical_cases = [
        (VerticalAlignment::Top, 21.6),
        (VerticalAlignment::Middle, 459.0),
        (VerticalAlignment::Bottom, 896.4),
    ];

    for (horizontal, expected_x) in horizontal_cases {
        for (vertical, expected_y) in vertical_cases {
            let rules = LayoutRules::new().with_rule(
                "item",
                PositioningRule::new(0.3, 0.3, CoordinatePosition::new(horizontal, vertical)),
            );
            let layout = generate_single(rules, 200.0, 100.0);
            let item = layout.element("item-1").unwrap();

            assert_eq!((item.width, item.height), (324.0, 162.0));
            assert_close(item.x, expected_x);
            assert_close(item.y, expected_y);
        }
    }
}

#[test]
fn test_aligned_elements_stay_inside_the_safe_area() {
    let alignments = [
        HorizontalAlignment::Left,
        HorizontalAlignment::Center,
        HorizontalAlignment::Right,
    ];
    let verticals = [
        VerticalAlignment::Top,
        VerticalAlignment::Middle,
        VerticalAlignment::Bottom,
    ];
    let safe_start = 21.6;
    let safe_end = CONTAINER - 21.6;

    for horizontal in alignments {
        for vertical in verticals {
            let rules = LayoutRules::new().with_rule(
                "item",
                PositioningRule::new(0.4, 0.25, CoordinatePosition::new(horizontal, vertical)),
            );
            let layout = generate_single(rules, 640.0, 480.0);
            let item = layout.element("item-1").unwrap();

            assert!(item.x >= safe_start - EPSILON);
            assert!(item.x + item.width <= safe_end + EPSILON);
            assert!(item.y >= safe_start - EPSILON);
            assert!(item.y + item.height <= safe_end + EPSILON);
        }
    }
}

#[test]
fn test_offsets_are_not_clamped() {
    let position = CoordinatePosition::new(HorizontalAlignment::Center, VerticalAlignment::Middle)
        .with_offsets(100.0, -200.0);
    let rules = LayoutRules::new().with_rule("item", PositioningRule::new(0.3, 0.3, position));
    let layout = generate_single(rules, 200.0, 100.0);
    let item = layout.element("item-1").unwrap();

    // +100% of the safe width pushes past the right edge, -200% of the safe
    // height lifts the element far above the canvas
    assert_close(item.x, 378.0 + 1036.8);
    assert_close(item.y, 459.0 - 2073.6);
    assert!(item.y < 0.0);
    assert!(item.x + item.width > CONTAINER);
}

#[test]
fn test_cover_fills_the_container_for_any_source_aspect() {
    let sources = [
        (1920.0, 1280.0),
        (800.0, 1600.0),
        (500.0, 500.0),
        (2000.0, 100.0),
    ];

    for (source_w, source_h) in sources {
        let rules = LayoutRules::new().with_rule(
            "background",
            PositioningRule::new(
                1.0,
                1.0,
                CoordinatePosition::new(HorizontalAlignment::Center, VerticalAlignment::Middle),
            ),
        );
        let document = document_with(LayoutOption::new("only", rules));
        let tree = ElementTree::from_roots(vec![SourceElement::new(
            "bg",
            "Background",
            Bounds::new(0.0, 0.0, source_h, source_w),
        )]);
        let mut labels = LabelMap::new();
        labels.assign("bg", "background");

        let layout = generate(&document, "only", &tree, &labels).expect("option exists");
        let background = layout.element("bg").unwrap();

        assert!(
            background.width >= CONTAINER && background.height >= CONTAINER,
            "cover must reach both container edges for source {source_w}x{source_h}, \
             got {}x{}",
            background.width,
            background.height
        );
        assert_eq!((background.x, background.y), (0.0, 0.0));
    }
}

#[test]
fn test_fit_caps_are_never_exceeded() {
    let caps = [(0.1, 0.9), (0.9, 0.1), (0.33, 0.47), (1.0, 1.0)];
    let sources = [(200.0, 100.0), (100.0, 100.0), (90.0, 50.0), (37.0, 113.0)];

    for (max_w, max_h) in caps {
        for (source_w, source_h) in sources {
            let rules = LayoutRules::new().with_rule(
                "item",
                PositioningRule::new(
                    max_w,
                    max_h,
                    CoordinatePosition::new(HorizontalAlignment::Left, VerticalAlignment::Top),
                ),
            );
            let layout = generate_single(rules, source_w, source_h);
            let item = layout.element("item-1").unwrap();

            assert!(
                item.width <= (max_w * CONTAINER).floor(),
                "width {} exceeds cap for {max_w}/{max_h} on {source_w}x{source_h}",
                item.width
            );
            assert!(
                item.height <= (max_h * CONTAINER).floor(),
                "height {} exceeds cap for {max_w}/{max_h} on {source_w}x{source_h}",
                item.height
            );
            assert!(item.width > 0.0 && item.height > 0.0);
        }
    }
}

#[test]
fn test_missing_bounds_produce_a_zero_size_marker() {
    let rules = LayoutRules::new().with_rule(
        "item",
        PositioningRule::new(
            0.3,
            0.3,
            CoordinatePosition::new(HorizontalAlignment::Right, VerticalAlignment::Top),
        ),
    );
    let document = document_with(LayoutOption::new("only", rules));
    let tree = ElementTree::from_roots(vec![SourceElement::group("item-1", "Item Group")]);
    let mut labels = LabelMap::new();
    labels.assign("item-1", "item");

    let layout = generate(&document, "only", &tree, &labels).expect("option exists");
    let item = layout.element("item-1").unwrap();

    // no source bounds: zero size, but the anchor point is still computed
    assert_eq!((item.width, item.height), (0.0, 0.0));
    assert_close(item.x, 1058.4);
    assert_close(item.y, 21.6);
    assert!(item.original_bounds.is_none());
}

#[test]
fn test_degenerate_bounds_collapse_to_zero_size() {
    let rules = LayoutRules::new().with_rule(
        "item",
        PositioningRule::new(
            0.5,
            0.5,
            CoordinatePosition::new(HorizontalAlignment::Left, VerticalAlignment::Top),
        ),
    );
    // zero-height strip
    let layout = generate_single(rules, 300.0, 0.0);
    let item = layout.element("item-1").unwrap();
    assert_eq!((item.width, item.height), (0.0, 0.0));
}

#[test]
fn test_custom_position_centers_on_the_percent_point() {
    let rules = LayoutRules::new().with_rule(
        "item",
        PositioningRule::new(0.5, 0.5, CoordinatePosition::custom(25.0, 75.0)),
    );
    let layout = generate_single(rules, 200.0, 100.0);
    let item = layout.element("item-1").unwrap();

    // 540x270 centered on (270, 810)
    assert_eq!((item.width, item.height), (540.0, 270.0));
    assert_close(item.x, 0.0);
    assert_close(item.y, 675.0);
}

#[test]
fn test_zero_caps_collapse_the_element() {
    let rules = LayoutRules::new().with_rule(
        "item",
        PositioningRule::new(
            0.0,
            0.5,
            CoordinatePosition::new(HorizontalAlignment::Center, VerticalAlignment::Middle),
        ),
    );
    let layout = generate_single(rules, 200.0, 100.0);
    let item = layout.element("item-1").unwrap();
    assert_eq!((item.width, item.height), (0.0, 0.0));
}

#[test]
fn test_unlisted_roles_default_to_visible() {
    let rules = LayoutRules::new()
        .with_rule(
            "item",
            PositioningRule::new(
                0.3,
                0.3,
                CoordinatePosition::new(HorizontalAlignment::Left, VerticalAlignment::Top),
            ),
        )
        .with_visibility("other", false);
    let layout = generate_single(rules, 200.0, 100.0);
    let item = layout.element("item-1").unwrap();
    assert!(item.visible);
}

#[test]
fn test_safezone_opt_out_reaches_the_container_edge() {
    let rules = LayoutRules::new().with_rule(
        "item",
        PositioningRule::new(
            0.3,
            0.3,
            CoordinatePosition::new(HorizontalAlignment::Right, VerticalAlignment::Bottom),
        )
        .without_safezone(),
    );
    let layout = generate_single(rules, 200.0, 100.0);
    let item = layout.element("item-1").unwrap();

    assert_close(item.x, CONTAINER - 324.0);
    assert_close(item.y, CONTAINER - 162.0);
}
