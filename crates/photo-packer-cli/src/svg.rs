//! SVG preview of a laid-out page.
//!
//! One panel per page: the sheet outline, a dashed printable-area guide, and
//! one labeled box per placement. Purely geometric — no image data.

use photo_packer_core::prelude::*;
use std::fmt::Write;

/// Pixels per page unit in the emitted SVG.
const SCALE: f64 = 96.0;
const PHOTO_FILL: &str = "#dbe9f6";
const PHOTO_STROKE: &str = "#4a78a8";

/// Renders one page of placements as a complete SVG document string.
pub fn render_page_svg<K, P>(page: &[&Placement<K, P>], config: &PageConfig) -> String {
    let w = config.page_width * SCALE;
    let h = config.page_height * SCALE;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#
    );
    let _ = writeln!(
        out,
        r##"  <rect x="0" y="0" width="{w:.2}" height="{h:.2}" fill="white" stroke="#cccccc"/>"##
    );
    if let Ok(area) = config.printable_area() {
        let _ = writeln!(
            out,
            r##"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#bbbbbb" stroke-dasharray="4 4"/>"##,
            area.x * SCALE,
            area.y * SCALE,
            area.w * SCALE,
            area.h * SCALE,
        );
    }
    for p in page {
        let x = p.x * SCALE;
        let y = p.y * SCALE;
        let pw = p.effective_width * SCALE;
        let ph = p.effective_height * SCALE;
        let _ = writeln!(
            out,
            r#"  <rect x="{x:.2}" y="{y:.2}" width="{pw:.2}" height="{ph:.2}" fill="{PHOTO_FILL}" stroke="{PHOTO_STROKE}"/>"#
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle" fill="{PHOTO_STROKE}">{}</text>"#,
            x + pw / 2.0,
            y + ph / 2.0,
            xml_escape(&p.size.name),
        );
    }
    out.push_str("</svg>\n");
    out
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
