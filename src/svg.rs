//! SVG visualization of packed bento grids.
//!
//! Renders the packer's output as one annotated panel: each placement drawn
//! as a cell rectangle with its index and span, over a faint backdrop of the
//! grid columns. Used for eyeballing packing decisions.
//!
//! # Example
//!
//! ```
//! use bentolayout::{GridConfig, Size, svg::render_grid_svg};
//!
//! let config = GridConfig::new(5);
//! let placed = config.layout(&[Size::new(3000, 1000), Size::new(800, 800)]).unwrap();
//!
//! let svg = render_grid_svg(&placed, &config);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::pack::{GridConfig, Placement};

/// Rendered width/height of one grid cell.
const CELL: f64 = 56.0;
/// Gap between cells.
const CELL_GAP: f64 = 6.0;
/// Outer margin around the grid.
const MARGIN: f64 = 24.0;

/// Render a packed grid as a complete SVG document string.
///
/// Cells are drawn in input order and labeled `index  colspan×rowspan`.
/// An empty placement list produces a minimal valid document.
pub fn render_grid_svg(placements: &[Placement], config: &GridConfig) -> String {
    let rows = placements
        .iter()
        .map(|p| p.row + p.size.row_span)
        .max()
        .unwrap_or(0);
    let cols = config.columns.max(
        placements
            .iter()
            .map(|p| p.col + p.size.col_span)
            .max()
            .unwrap_or(0),
    );

    if rows == 0 || cols == 0 {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let total_w = 2.0 * MARGIN + cols as f64 * CELL + (cols - 1) as f64 * CELL_GAP;
    let total_h = 2.0 * MARGIN + rows as f64 * CELL + (rows - 1) as f64 * CELL_GAP;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 12px; fill: #fff; }
  .cell { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .track { fill: none; stroke: #ccc; stroke-width: 1; stroke-dasharray: 3,3; }
  @media (prefers-color-scheme: dark) {
    .cell { fill: #3a72a4; stroke: #5a9fd4; }
    .track { stroke: #444; }
  }
</style>
"##);

    // Backdrop: one dashed track per grid cell.
    for row in 0..rows {
        for col in 0..cols {
            let (x, y) = cell_origin(row, col);
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{CELL:.1}" height="{CELL:.1}" class="track" rx="2"/>"#
            ));
            svg.push('\n');
        }
    }

    for (i, p) in placements.iter().enumerate() {
        let (x, y) = cell_origin(p.row, p.col);
        let w = p.size.col_span as f64 * CELL + (p.size.col_span - 1) as f64 * CELL_GAP;
        let h = p.size.row_span as f64 * CELL + (p.size.row_span - 1) as f64 * CELL_GAP;

        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="cell" rx="4"/>"#
        ));
        svg.push('\n');

        let label = format!("{i}  {}×{}", p.size.col_span, p.size.row_span);
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0,
            escape_xml(&label)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Top-left pixel coordinate of a grid cell.
fn cell_origin(row: u32, col: u32) -> (f64, f64) {
    (
        MARGIN + col as f64 * (CELL + CELL_GAP),
        MARGIN + row as f64 * (CELL + CELL_GAP),
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
