// ============================================================
// Layer 5: Radial Mind Map
// ============================================================
// Two steps:
//
//   layout(text, hint, max_nodes) → MindMapData
//     center = hint, else the first line of the text when it is
//              shorter than 100 chars, else "Notes"
//              (then cut to 80 chars)
//     topics = top `max_nodes` keyphrases
//
//   render(data) → SVG string
//
//                  topic 0 (12 o'clock)
//                     │
//     topic n-1 ── center ── topic 1      clockwise, radius 170
//                     │
//                    ...
//
//   Topic i of n sits at angle (i / n)·2π − π/2 around the center
//   of a 1000×520 canvas. Every label is XML-escaped.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::data::keyphrases::{KeyphraseRanker, StopWords};
use crate::domain::material::MindMapData;

pub const CANVAS_WIDTH:  f64 = 1000.0;
pub const CANVAS_HEIGHT: f64 = 520.0;
pub const RADIUS:        f64 = 170.0;

const CENTER_NODE_RADIUS: f64 = 60.0;
const TOPIC_NODE_RADIUS:  f64 = 34.0;

const FALLBACK_CENTER:   &str  = "Notes";
const MAX_TITLE_LINE:    usize = 100;
const MAX_CENTER_CHARS:  usize = 80;

const LINK_COLOR:        &str = "#243055";
const CENTER_FILL:       &str = "#4f46e5";
const TOPIC_FILL:        &str = "#111a2e";
const TOPIC_TEXT:        &str = "#eef2ff";

/// Position of one topic node on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode<'a> {
    pub label: &'a str,
    pub x:     f64,
    pub y:     f64,
}

pub struct MindMapLayout<'a> {
    ranker: KeyphraseRanker<'a>,
}

impl<'a> MindMapLayout<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { ranker: KeyphraseRanker::new(stop_words) }
    }

    pub fn layout(&self, text: &str, hint: Option<&str>, max_nodes: usize) -> MindMapData {
        let center = hint
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .or_else(|| title_line(text))
            .unwrap_or(FALLBACK_CENTER);

        MindMapData {
            center: truncate_chars(center, MAX_CENTER_CHARS),
            topics: self.ranker.rank(text, max_nodes),
        }
    }
}

/// First line of the text, if short enough to serve as a title.
pub fn title_line(text: &str) -> Option<&str> {
    let first = text.trim().split('\n').next()?;
    if !first.is_empty() && first.chars().count() < MAX_TITLE_LINE {
        Some(first)
    } else {
        None
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Node positions, first at 12 o'clock, then clockwise.
pub fn place_nodes(topics: &[String]) -> Vec<PlacedNode<'_>> {
    let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    let n = topics.len() as f64;

    topics
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let angle = (i as f64 / n) * PI * 2.0 - PI / 2.0;
            PlacedNode {
                label,
                x: cx + RADIUS * angle.cos(),
                y: cy + RADIUS * angle.sin(),
            }
        })
        .collect()
}

/// Self-contained SVG document for a mind map.
pub fn render(data: &MindMapData) -> String {
    let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    let nodes    = place_nodes(&data.topics);
    let mut svg  = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}" xmlns="http://www.w3.org/2000/svg">"#
    );

    // Spokes first so the circles draw on top of them
    for n in &nodes {
        let _ = write!(
            svg,
            r#"<line x1="{cx}" y1="{cy}" x2="{:.2}" y2="{:.2}" stroke="{LINK_COLOR}" stroke-width="2"/>"#,
            n.x, n.y
        );
    }

    let _ = write!(
        svg,
        r#"<circle cx="{cx}" cy="{cy}" r="{CENTER_NODE_RADIUS}" fill="{CENTER_FILL}"/>"#
    );
    let _ = write!(
        svg,
        r#"<text x="{cx}" y="{cy}" fill="white" font-size="16" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        escape_xml(&data.center)
    );

    for n in &nodes {
        svg.push_str("<g>");
        let _ = write!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{TOPIC_NODE_RADIUS}" fill="{TOPIC_FILL}" stroke="{LINK_COLOR}" stroke-width="2"/>"#,
            n.x, n.y
        );
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" fill="{TOPIC_TEXT}" font-size="12" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            n.x, n.y,
            escape_xml(n.label)
        );
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

/// Escape the five XML-reserved characters. Control characters that
/// XML 1.0 forbids are dropped.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() => {}
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c    => out.push(c),
        }
    }
    out
}
