// ============================================================
// Layer 4: Text Pipeline
// ============================================================
// Everything from user input down to ranked tokens:
//
//   files / pasted text
//       │
//       ▼
//   loader          → reads sources into raw Documents
//       │
//       ▼
//   preprocessor    → CleanedText (whitelist + whitespace)
//       │
//       ├──────────────┐
//       ▼              ▼
//   segmenter       keyphrases   → sentences / ranked tokens
//       │              │
//       └──────┬───────┘
//              ▼
//          summarizer           → extractive summary
//
// The generation layer builds quizzes and mind maps on top.

/// PastedText and FileSource (PDF, DOCX, TXT)
pub mod loader;

/// Cleans and normalises raw text
pub mod preprocessor;

/// Splits cleaned text into sentences
pub mod segmenter;

/// Stop-words, tokenizer and frequency ranking
pub mod keyphrases;

/// Frequency-scored extractive summary
pub mod summarizer;
