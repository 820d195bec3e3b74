//! SVG visualization of a computed grid layout.
//!
//! Draws the page, the minimum-margin box, and one numbered rectangle per
//! placed image, scaled down to a fixed preview width. Useful for checking
//! centering drift with mixed image sizes before rendering pixels.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridLayout, PageSpec, Size, svg::render_grid_svg};
//!
//! let layout = GridLayout::compute(&[Size::new(800, 600); 6], &PageSpec::A4_LANDSCAPE).unwrap();
//! let svg = render_grid_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("2×3"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::grid::GridLayout;

/// Maximum pixel width of the page preview.
const MAX_PAGE_W: f64 = 700.0;
/// Maximum pixel height of the page preview.
const MAX_PAGE_H: f64 = 500.0;
/// Margin around the preview.
const MARGIN: f64 = 30.0;
/// Height of the label and annotation lines.
const LABEL_H: f64 = 22.0;

/// Render a complete SVG document for `layout`.
pub fn render_grid_svg(layout: &GridLayout) -> String {
    let page = &layout.page;
    let (pw, ph, scale) = scale_to_fit(page.width, page.height);
    let total_w = pw + 2.0 * MARGIN;
    let total_h = ph + 2.0 * MARGIN + 2.0 * LABEL_H;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 12px; fill: #fff; }
  .page { fill: #fff; stroke: #999; stroke-width: 1; }
  .bounds { fill: none; stroke: #c33; stroke-width: 1; stroke-dasharray: 4,2; }
  .tile { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .page { fill: #2d2d2d; stroke: #555; }
    .tile { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN + 14.0 - LABEL_H / 2.0,
        escape_xml(&format!(
            "Page  {}×{}  grid {}×{}  cell {}×{}",
            page.width,
            page.height,
            layout.shape.rows,
            layout.shape.cols,
            layout.cell.width,
            layout.cell.height
        ))
    ));
    svg.push('\n');

    let ox = MARGIN;
    let oy = MARGIN + LABEL_H;

    // Page
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="page"/>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    // Minimum margins
    let bx = page.margin_lr as f64 * scale;
    let by = page.margin_tb as f64 * scale;
    if bx > 0.0 || by > 0.0 {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="bounds"/>"#,
            ox + bx,
            oy + by,
            (pw - 2.0 * bx).max(0.0),
            (ph - 2.0 * by).max(0.0)
        ));
        svg.push('\n');
    }

    // Tiles
    for tile in &layout.tiles {
        let p = &tile.placement;
        let x = ox + p.x as f64 * scale;
        let y = oy + p.y as f64 * scale;
        let w = p.size.width as f64 * scale;
        let h = p.size.height as f64 * scale;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="tile" rx="1"/>"#,
            x, y, w, h
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0,
            p.index + 1
        ));
        svg.push('\n');
    }

    // Annotation
    let m = &layout.margins;
    let mut note = format!(
        "margins L{} R{} T{} B{}",
        m.left, m.right, m.top, m.bottom
    );
    if !layout.is_uniform() {
        note.push_str(", mixed sizes");
    }
    if layout.overflows_page() {
        note.push_str(", overflows page");
    }
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        oy + ph + 16.0,
        escape_xml(&note)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale page dimensions to fit the preview box, preserving aspect ratio.
fn scale_to_fit(width: u32, height: u32) -> (f64, f64, f64) {
    let w = width as f64;
    let h = height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PAGE_W / w).min(MAX_PAGE_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
