// ============================================================
// Layer 4: Text Sources
// ============================================================
// Turns user input into raw Documents:
//
//   PastedText  → the text as typed
//   FileSource  → dispatch on extension
//                   .pdf              pdf-extract, page text
//                   .docx             docx-rs, paragraph text
//                   .txt .text .md    UTF-8, Latin-1 fallback
//
// How .docx files are walked:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// Any failure aborts the whole generation: a half-read set of
// notes would silently produce the wrong quiz.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::errors::StudyError;
use crate::domain::traits::TextSource;

// ─── PastedText ───────────────────────────────────────────────────────────────
pub struct PastedText {
    text: String,
}

impl PastedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for PastedText {
    fn name(&self) -> String {
        "pasted text".to_string()
    }

    fn read(&self) -> Result<Document> {
        Ok(Document::new(self.name(), self.text.trim()))
    }
}

// ─── FileSource ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Pdf,
    Docx,
    PlainText,
}

impl FileKind {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf"                 => Some(Self::Pdf),
            "docx"                => Some(Self::Docx),
            "txt" | "text" | "md" => Some(Self::PlainText),
            _                     => None,
        }
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_failure(&self, cause: impl ToString) -> anyhow::Error {
        StudyError::SourceRead {
            source_name: self.name(),
            cause:       cause.to_string(),
        }
        .into()
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    fn read(&self) -> Result<Document> {
        let kind = FileKind::from_path(&self.path)
            .ok_or_else(|| StudyError::UnsupportedSource { source_name: self.name() })?;

        let bytes = fs::read(&self.path).map_err(|e| self.read_failure(e))?;

        let text = match kind {
            FileKind::Pdf       => pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| self.read_failure(format!("{e:?}")))?,
            FileKind::Docx      => docx_text(&bytes).map_err(|e| self.read_failure(e))?,
            FileKind::PlainText => decode_text(bytes),
        };

        tracing::debug!("Loaded: {} ({} chars)", self.name(), text.len());
        Ok(Document::new(self.name(), text))
    }
}

/// Read every source in order. The first failure aborts.
pub fn read_all(sources: &[Box<dyn TextSource>]) -> Result<Vec<Document>> {
    let mut docs = Vec::with_capacity(sources.len());
    for source in sources {
        let doc = source.read()?;
        if doc.text.trim().is_empty() {
            tracing::warn!("Source '{}' contained no text", doc.source);
        }
        docs.push(doc);
    }
    tracing::info!("Read {} text sources", docs.len());
    Ok(docs)
}

/// UTF-8 when valid, otherwise each byte as a Latin-1 code point.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e)   => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Paragraph text of a .docx file, one paragraph per line.
fn docx_text(bytes: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| format!("docx parse error: {e:?}"))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Tables, images and section properties carry no body text we use
        if let DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Runs of one paragraph are parts of the same sentence, so they
/// are joined with no separator.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
