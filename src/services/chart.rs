//! Fixed-size SVG pie chart: one sector per maintainer, sized by ownership share.

use crate::domain::models::OwnershipShare;
use crate::services::ownership::ranked;
use std::f64::consts::PI;
use std::fmt::Write;

pub const CHART_WIDTH: u32 = 512;
pub const CHART_HEIGHT: u32 = 512;

const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub fn render_pie_svg(shares: &OwnershipShare, width: u32, height: u32) -> String {
    let (w, h) = (f64::from(width), f64::from(height));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let r = w.min(h) / 2.0 * 0.9;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    let rows = ranked(shares);
    let total: f64 = rows.iter().map(|r| r.share).sum();
    if rows.is_empty() || total <= 0.0 {
        svg.push_str("</svg>\n");
        return svg;
    }

    if rows.len() == 1 {
        let _ = writeln!(
            svg,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}" stroke="white"/>"#,
            PALETTE[0]
        );
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.2}" y="{cy:.2}" text-anchor="middle" font-family="sans-serif" font-size="12">{}</text>"#,
            escape_xml(&rows[0].maintainer)
        );
        svg.push_str("</svg>\n");
        return svg;
    }

    // Start at 12 o'clock, sweep clockwise.
    let mut start = -PI / 2.0;
    for (i, row) in rows.iter().enumerate() {
        let sweep = row.share / total * 2.0 * PI;
        let end = start + sweep;
        let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
        let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
        let large_arc = u8::from(sweep > PI);
        let _ = writeln!(
            svg,
            r#"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z" fill="{}" stroke="white"/>"#,
            PALETTE[i % PALETTE.len()]
        );
        let mid = start + sweep / 2.0;
        let (lx, ly) = (cx + r * 0.65 * mid.cos(), cy + r * 0.65 * mid.sin());
        let _ = writeln!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-family="sans-serif" font-size="10">{}</text>"#,
            escape_xml(&row.maintainer)
        );
        start = end;
    }
    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
