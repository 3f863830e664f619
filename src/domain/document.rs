// ============================================================
// Layer 3: Document Domain Type
// ============================================================
// One fragment of raw study text together with the name of the
// source it was read from (a file name, or "pasted text").
//
// By the time a Document exists the text has already been
// extracted from its container format (PDF, DOCX, TXT).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// File name or label, kept for error messages and logs
    pub source: String,

    /// Extracted text, before any normalisation
    pub text: String,
}

impl Document {
    /// Create a new Document from a source label and its text.
    ///
    /// Example:
    ///   let doc = Document::new("biology.txt", "Cells divide...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Join fragments into the RawText the pipeline consumes.
    /// Fragments are separated by a single newline, in order.
    pub fn join(docs: &[Document]) -> String {
        docs.iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
