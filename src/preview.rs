//! SVG wireframe preview of a generated layout.
//!
//! Renders the container, its safezone, and every placed element as an
//! annotated box, scaled to a fixed preview size. Cover-scaled backgrounds
//! and offset-escaped elements overflow the container; the preview extends
//! its canvas to show them rather than clipping, since out-of-container
//! geometry is exactly what an author wants to see.

use crate::layout::GeneratedLayout;

/// Maximum pixel width for the scaled container.
const MAX_PREVIEW_W: f64 = 480.0;
/// Maximum pixel height for the scaled container.
const MAX_PREVIEW_H: f64 = 480.0;
/// Margin around the drawn geometry.
const MARGIN: f64 = 24.0;
/// Height of the title line above the container.
const TITLE_H: f64 = 22.0;
/// Smallest box that still gets a role label.
const LABEL_MIN_SIDE: f64 = 18.0;

/// Render a generated layout as a complete SVG document.
///
/// `safezone_margin` is the option-level margin the layout was generated
/// with; it only affects the dashed safezone guide, not any geometry.
pub fn render_layout_svg(layout: &GeneratedLayout, safezone_margin: f64) -> String {
    let scale = if layout.width > 0.0 && layout.height > 0.0 {
        (MAX_PREVIEW_W / layout.width).min(MAX_PREVIEW_H / layout.height)
    } else {
        1.0
    };

    let container_w = layout.width * scale;
    let container_h = layout.height * scale;

    // extent of everything drawn, in scaled space relative to the container
    // origin; elements can sit left of or above the container
    let mut min_x: f64 = 0.0;
    let mut min_y: f64 = 0.0;
    let mut max_x = container_w;
    let mut max_y = container_h;
    for element in &layout.elements {
        min_x = min_x.min(element.x * scale);
        min_y = min_y.min(element.y * scale);
        max_x = max_x.max((element.x + element.width) * scale);
        max_y = max_y.max((element.y + element.height) * scale);
    }

    let origin_x = MARGIN - min_x;
    let origin_y = MARGIN + TITLE_H - min_y;
    let total_w = (max_x - min_x) + 2.0 * MARGIN;
    let total_h = (max_y - min_y) + 2.0 * MARGIN + TITLE_H;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style block, light and dark palettes via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .title { font-size: 13px; font-weight: bold; fill: #333; }
  .role-label { font-size: 11px; fill: #1d4f7c; }
  .canvas { fill: #f4f4f4; stroke: #999; stroke-width: 1; }
  .safezone { fill: none; stroke: #c0392b; stroke-width: 1; stroke-dasharray: 5,3; }
  .element { fill: #6ba3d6; fill-opacity: 0.35; stroke: #2c6faa; stroke-width: 1.5; }
  .element-hidden { fill: none; stroke: #8aa4b8; stroke-width: 1; stroke-dasharray: 3,3; }
  @media (prefers-color-scheme: dark) {
    .title { fill: #e0e0e0; }
    .role-label { fill: #9cc4e8; }
    .canvas { fill: #242424; stroke: #555; }
    .safezone { stroke: #e06c5b; }
    .element { fill: #3a72a4; stroke: #5a9fd4; }
    .element-hidden { stroke: #4a5a68; }
  }
</style>
"##,
    );

    // Title
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="title">{}</text>"#,
        MARGIN,
        MARGIN - 6.0 + TITLE_H / 2.0,
        escape_xml(&format!(
            "{}  {}×{} ({})",
            layout.name, layout.width, layout.height, layout.aspect_ratio
        ))
    ));
    svg.push('\n');

    // Container
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="canvas"/>"#,
        origin_x, origin_y, container_w, container_h
    ));
    svg.push('\n');

    // Safezone guide
    if safezone_margin > 0.0 {
        let inset_x = safezone_margin * container_w;
        let inset_y = safezone_margin * container_h;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="safezone"/>"#,
            origin_x + inset_x,
            origin_y + inset_y,
            container_w - 2.0 * inset_x,
            container_h - 2.0 * inset_y
        ));
        svg.push('\n');
    }

    // Elements, already in paint order
    for element in &layout.elements {
        let x = origin_x + element.x * scale;
        let y = origin_y + element.y * scale;
        let w = element.width * scale;
        let h = element.height * scale;
        let class = if element.visible {
            "element"
        } else {
            "element-hidden"
        };

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
            x, y, w, h, class
        ));
        svg.push('\n');

        if w >= LABEL_MIN_SIDE && h >= LABEL_MIN_SIDE {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="role-label" text-anchor="middle">{}</text>"#,
                x + w / 2.0,
                y + h / 2.0 + 4.0,
                escape_xml(&element.role)
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
