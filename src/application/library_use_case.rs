// ============================================================
// Layer 2: LibraryUseCase
// ============================================================
// Read-side workflows over stored materials:
//   - list everything, newest first
//   - look one material up for a quiz, and grade an attempt
//   - render one material's mind map to an SVG file

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::errors::StudyError;
use crate::domain::material::{grade, QuizScore, StudyMaterial};
use crate::domain::traits::MaterialStore;
use crate::generation::mindmap::render;

pub struct LibraryUseCase<'s> {
    store: &'s dyn MaterialStore,
}

impl<'s> LibraryUseCase<'s> {
    pub fn new(store: &'s dyn MaterialStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<StudyMaterial>> {
        self.store.load_all()
    }

    /// The material with this id, or MaterialNotFound.
    pub fn get(&self, id: &str) -> Result<StudyMaterial> {
        self.store
            .find(id)?
            .ok_or_else(|| StudyError::MaterialNotFound(id.to_string()).into())
    }

    /// Grade answers given as `question id → selected option`.
    pub fn grade(&self, id: &str, answers: &HashMap<String, String>) -> Result<QuizScore> {
        let material = self.get(id)?;

        for qid in answers.keys() {
            if material.question(qid).is_none() {
                tracing::warn!("Material '{}' has no question '{}'", id, qid);
            }
        }

        let score = grade(&material.questions, answers);
        tracing::info!("Graded '{}': {}", id, score);
        Ok(score)
    }

    /// Render the mind map and write it to `out`.
    pub fn export_map(&self, id: &str, out: &Path) -> Result<()> {
        let material = self.get(id)?;
        let svg      = render(&material.map_data);

        fs::write(out, svg)
            .with_context(|| format!("Cannot write mind map to '{}'", out.display()))?;

        tracing::info!("Wrote mind map for '{}' to '{}'", id, out.display());
        Ok(())
    }
}

/// Parse `q1=answer` pairs as typed on the command line.
pub fn parse_answers<S: AsRef<str>>(pairs: &[S]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| -> Result<(String, String)> {
            let pair = pair.as_ref();
            let (id, answer) = pair
                .split_once('=')
                .with_context(|| format!("Answer '{pair}' must look like q1=option"))?;
            Ok((id.trim().to_string(), answer.trim().to_string()))
        })
        .collect()
}
