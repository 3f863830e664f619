// ============================================================
// Layer 6: Materials Store
// ============================================================
// Persists StudyMaterial records as one pretty-printed JSON
// array:
//
//   study_materials.json
//     [ { newest }, { older }, ... ]
//
// Loading rules:
//   - file missing        → empty collection
//   - file malformed      → warning + empty collection
//   - file unreadable     → error (permissions, I/O)
//
// Appending reads the collection, puts the new record in
// front, and writes it back through `<file>.tmp` + rename.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::errors::StudyError;
use crate::domain::material::StudyMaterial;
use crate::domain::traits::MaterialStore;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, materials: &[StudyMaterial]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(materials)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Cannot replace '{}'", self.path.display()))?;

        tracing::debug!("Saved {} materials to '{}'", materials.len(), self.path.display());
        Ok(())
    }
}

impl MaterialStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<StudyMaterial>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot read materials from '{}'", self.path.display())
                })
            }
        };

        match serde_json::from_str::<Vec<StudyMaterial>>(&json) {
            Ok(materials) => Ok(materials),
            Err(e) => {
                let err = StudyError::MalformedStoredData {
                    path:  self.path.clone(),
                    cause: e.to_string(),
                };
                tracing::warn!("{err}; starting from an empty collection");
                Ok(Vec::new())
            }
        }
    }

    fn append(&self, material: &StudyMaterial) -> Result<()> {
        let mut materials = self.load_all()?;
        materials.insert(0, material.clone());
        self.write_all(&materials)?;

        tracing::info!(
            "Stored material '{}' ({} total) in '{}'",
            material.id,
            materials.len(),
            self.path.display()
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::MindMapData;
    use chrono::Utc;
    use tempfile::TempDir;

    fn material(id: &str) -> StudyMaterial {
        StudyMaterial {
            id:         id.to_string(),
            title:      format!("Title {id}"),
            created_at: Utc::now(),
            questions:  Vec::new(),
            map_data:   MindMapData { center: "c".to_string(), topics: vec![] },
            tags:       vec!["tag".to_string()],
            summary:    String::new(),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir   = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_puts_newest_first() {
        let dir   = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/materials.json"));

        store.append(&material("m_1")).unwrap();
        store.append(&material("m_2")).unwrap();

        let ids: Vec<String> = store.load_all().unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m_2", "m_1"]);
        assert!(!dir.path().join("nested/materials.json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("materials.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load_all().unwrap().is_empty());

        // The next append starts a fresh collection
        store.append(&material("m_3")).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("materials.json");
        fs::write(&path, r#"{"id": "m_1"}"#).unwrap();
        assert!(JsonFileStore::new(&path).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let dir   = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("materials.json"));
        store.append(&material("m_1")).unwrap();

        assert_eq!(store.find("m_1").unwrap().map(|m| m.title), Some("Title m_1".to_string()));
        assert!(store.find("m_9").unwrap().is_none());
    }
}
