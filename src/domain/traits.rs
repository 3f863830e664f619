// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, so a
// source, a store or a random generator can be swapped without
// touching the pipeline:
//   - TextSource     → PastedText, FileSource (data::loader)
//   - MaterialStore  → JsonFileStore (infra::store)
//   - RandomSource   → RngSource, or a fixed sequence in tests

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::material::StudyMaterial;

// ─── TextSource ───────────────────────────────────────────────────────────────
/// Anything that can yield one fragment of raw study text.
pub trait TextSource {
    /// Short label used in logs and error messages
    fn name(&self) -> String;

    /// Read the source. Failing here aborts the whole generation.
    fn read(&self) -> Result<Document>;
}

// ─── MaterialStore ────────────────────────────────────────────────────────────
/// Durable collection of generated materials, most recent first.
pub trait MaterialStore {
    /// Return every stored material. Unparseable stored data
    /// yields an empty collection rather than an error.
    fn load_all(&self) -> Result<Vec<StudyMaterial>>;

    /// Put a new material at the front of the collection.
    fn append(&self, material: &StudyMaterial) -> Result<()>;

    /// Find one material by id
    fn find(&self, id: &str) -> Result<Option<StudyMaterial>> {
        Ok(self.load_all()?.into_iter().find(|m| m.id == id))
    }
}

// ─── RandomSource ─────────────────────────────────────────────────────────────
/// Uniform floats in [0, 1). Only the option shuffle uses this.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}
