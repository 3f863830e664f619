// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// system works with: raw documents, generated study material,
// and the seams to the outside world (text sources, storage,
// randomness).
//
// Rules for this layer:
//   - NO file I/O
//   - NO regexes or text processing
//   - Only data types, traits and the error taxonomy

// A piece of raw text and where it came from
pub mod document;

// Questions, mind-map data and the persisted StudyMaterial record
pub mod material;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Typed error taxonomy
pub mod errors;
