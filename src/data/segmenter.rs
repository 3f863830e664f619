// ============================================================
// Layer 4: Sentence Segmenter
// ============================================================
// Splits cleaned text into sentences.
//
// A boundary is a terminal mark (. ! ?) followed by whitespace.
// The mark stays with the sentence before it:
//
//   "A. B! C?"  →  ["A.", "B!", "C?"]
//
// The whitespace run after the mark is dropped. Text after the
// last mark becomes the final sentence even without a mark.

use std::sync::OnceLock;

use regex::Regex;

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("valid regex"))
}

pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split text into trimmed, non-empty sentences in original order.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start     = 0usize;

        for m in boundary_re().find_iter(text) {
            // Terminal marks are single-byte ASCII, so +1 lands on a char boundary
            let end = m.start() + 1;
            push_trimmed(&mut sentences, &text[start..end]);
            start = m.end();
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
