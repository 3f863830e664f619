// ============================================================
// Layer 4: Text Normalizer
// ============================================================
// Cleans raw text (pasted, or extracted from PDF/DOCX/TXT)
// before segmentation and keyphrase ranking.
//
// Cleaning steps (applied in order):
//   1. Replace every character outside the whitelist with a space.
//      Whitelist: word characters, whitespace, and . , ; : ! ? - ( )
//   2. Collapse every whitespace run (newlines, tabs included)
//      into a single space
//   3. Trim both ends
//
// Stripping before collapsing keeps the cleaner idempotent:
// a stripped symbol becomes a space that step 2 then folds away.

use std::sync::OnceLock;

use regex::Regex;

fn unsupported_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s.,;:!?\-()]").expect("valid regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalise raw text into CleanedText.
    /// Empty or symbol-only input comes back as "".
    pub fn clean(&self, text: &str) -> String {
        let stripped  = unsupported_re().replace_all(text, " ");
        let collapsed = whitespace_re().replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
