// ============================================================
// Layer 3: Error Taxonomy
// ============================================================
// Typed failures the CLI reports to the user. Everything else
// travels as anyhow::Error with context attached.
//
// Empty input is deliberately absent: it is an outcome of
// generation (nothing to do), not a failure.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyError {
    /// A text source could not produce text
    #[error("Failed to read '{source_name}': {cause}")]
    SourceRead { source_name: String, cause: String },

    /// A file whose type we cannot extract text from
    #[error("Unsupported file type for '{source_name}'. Use PDF, DOCX or TXT.")]
    UnsupportedSource { source_name: String },

    /// The store file exists but does not hold a materials list
    #[error("Stored materials in '{}' are malformed: {cause}", path.display())]
    MalformedStoredData { path: PathBuf, cause: String },

    /// No material with this id in the store
    #[error("No study material with id '{0}'")]
    MaterialNotFound(String),
}
