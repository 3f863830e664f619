// ============================================================
// Layer 2: GenerateUseCase
// ============================================================
// Turns text sources into one stored StudyMaterial:
//
//   Step 1: Read every source            (Layer 4 - data)
//   Step 2: Join and normalise the text  (Layer 4 - data)
//   Step 3: Stop if nothing is left      (EmptyInput outcome)
//   Step 4: Quiz                         (Layer 5 - generation)
//   Step 5: Mind map                     (Layer 5 - generation)
//   Step 6: Tags and summary             (Layer 4 - data)
//   Step 7: Persist, newest first        (Layer 6 - infra)
//
// A failing source aborts before anything is written.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::{
    keyphrases::{KeyphraseRanker, StopWords},
    loader::read_all,
    preprocessor::Preprocessor,
    summarizer::Summarizer,
};
use crate::domain::{
    document::Document,
    material::StudyMaterial,
    traits::{MaterialStore, RandomSource, TextSource},
};
use crate::generation::{mindmap::MindMapLayout, quiz::QuizSynthesizer};

/// Stored tags never exceed this, whatever `tag_count` asks for
pub const MAX_TAGS: usize = 6;

// ─── Generation Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Questions per quiz
    pub question_count:    usize,
    /// Topics around the mind-map center
    pub map_nodes:         usize,
    /// Keyphrases stored as tags, capped at MAX_TAGS
    pub tag_count:         usize,
    /// Ranked phrases the quiz draws answers and distractors from
    pub phrase_pool:       usize,
    /// Upper bound on summary length, in sentences
    pub summary_sentences: usize,
    /// Added to the built-in stop-word list
    pub extra_stop_words:  Vec<String>,
    /// Fixes the option shuffle when set
    pub seed:              Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            question_count:    6,
            map_nodes:         12,
            tag_count:         6,
            phrase_pool:       20,
            summary_sentences: 5,
            extra_stop_words:  Vec::new(),
            seed:              None,
        }
    }
}

/// What one generation run produced.
#[derive(Debug)]
pub enum Generation {
    Created(StudyMaterial),
    /// Normalised input was empty; nothing was stored
    NothingToGenerate,
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase<'s> {
    config:     GenerateConfig,
    stop_words: StopWords,
    store:      &'s dyn MaterialStore,
}

impl<'s> GenerateUseCase<'s> {
    pub fn new(config: GenerateConfig, store: &'s dyn MaterialStore) -> Self {
        tracing::debug!(
            "Generation config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        let stop_words = StopWords::with_extra(&config.extra_stop_words);
        Self { config, stop_words, store }
    }

    /// Read, generate and store.
    pub fn execute(
        &self,
        sources: &[Box<dyn TextSource>],
        title:   Option<&str>,
        rng:     &mut dyn RandomSource,
    ) -> Result<Generation> {
        // ── Step 1-2: Read every source, join in order ───────────────────────
        let docs = read_all(sources)?;
        let raw  = Document::join(&docs);

        // ── Step 3-6: Build the record ───────────────────────────────────────
        let Some(material) = self.build(&raw, title, Utc::now(), rng) else {
            tracing::info!("Input was empty after cleaning; nothing generated");
            return Ok(Generation::NothingToGenerate);
        };

        // ── Step 7: Persist ──────────────────────────────────────────────────
        let id = self.unique_id(&material.id)?;
        let material = StudyMaterial { id, ..material };
        self.store.append(&material)?;
        Ok(Generation::Created(material))
    }

    /// `base` itself when unused, else the first free `base_2`, `base_3`, ...
    /// Two runs within one millisecond would otherwise share an id.
    fn unique_id(&self, base: &str) -> Result<String> {
        let taken: HashSet<String> = self.store.load_all()?.into_iter().map(|m| m.id).collect();
        if !taken.contains(base) {
            return Ok(base.to_string());
        }
        let id = (2..)
            .map(|n| format!("{base}_{n}"))
            .find(|id| !taken.contains(id))
            .unwrap_or_else(|| base.to_string());
        tracing::debug!("Id {} already stored; using {}", base, id);
        Ok(id)
    }

    /// Pure part of the pipeline. None when the cleaned text is empty.
    pub fn build(
        &self,
        raw_text: &str,
        title:    Option<&str>,
        now:      DateTime<Utc>,
        rng:      &mut dyn RandomSource,
    ) -> Option<StudyMaterial> {
        let cfg  = &self.config;
        let text = Preprocessor::new().clean(raw_text);
        if text.is_empty() {
            return None;
        }
        tracing::info!("Generating study material from {} chars of text", text.len());

        let questions = QuizSynthesizer::new(&self.stop_words, cfg.phrase_pool)
            .synthesize(&text, cfg.question_count, rng);

        let hint     = title.map(|t| Preprocessor::new().clean(t));
        let title    = hint.as_deref().filter(|t| !t.is_empty());
        let map_data = MindMapLayout::new(&self.stop_words).layout(&text, title, cfg.map_nodes);

        let tags    = KeyphraseRanker::new(&self.stop_words).rank(&text, cfg.tag_count.min(MAX_TAGS));
        let summary = Summarizer::new(&self.stop_words).summarize(&text, cfg.summary_sentences);

        let title = title
            .or_else(|| Some(map_data.center.trim()).filter(|c| !c.is_empty()))
            .unwrap_or("Notes")
            .to_string();

        tracing::info!(
            "Built '{}': {} questions, {} topics, {} tags",
            title,
            questions.len(),
            map_data.topics.len(),
            tags.len()
        );

        Some(StudyMaterial {
            id: format!("m_{}", now.timestamp_millis()),
            title,
            created_at: now,
            questions,
            map_data,
            tags,
            summary,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::data::loader::PastedText;
    use crate::generation::random::SequenceSource;

    const PHOTO: &str =
        "Photosynthesis converts light into energy. Plants use chlorophyll to capture light.";

    #[derive(Default)]
    struct MemoryStore {
        materials: RefCell<Vec<StudyMaterial>>,
    }

    impl MaterialStore for MemoryStore {
        fn load_all(&self) -> Result<Vec<StudyMaterial>> {
            Ok(self.materials.borrow().clone())
        }

        fn append(&self, material: &StudyMaterial) -> Result<()> {
            self.materials.borrow_mut().insert(0, material.clone());
            Ok(())
        }
    }

    struct FailingSource;

    impl TextSource for FailingSource {
        fn name(&self) -> String {
            "broken.pdf".to_string()
        }

        fn read(&self) -> Result<Document> {
            Err(crate::domain::errors::StudyError::SourceRead {
                source_name: self.name(),
                cause:       "bad xref table".to_string(),
            }
            .into())
        }
    }

    fn pasted(text: &str) -> Vec<Box<dyn TextSource>> {
        vec![Box::new(PastedText::new(text))]
    }

    fn config(question_count: usize) -> GenerateConfig {
        GenerateConfig { question_count, ..GenerateConfig::default() }
    }

    #[test]
    fn test_end_to_end_photosynthesis() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(config(2), &store);
        let mut rng = SequenceSource::new(vec![0.3, 0.8, 0.1]);

        let outcome = use_case.execute(&pasted(PHOTO), None, &mut rng).unwrap();
        let Generation::Created(m) = outcome else { panic!("expected a material") };

        let ranked = ["light", "chlorophyll", "photosynthesis", "plants", "energy"];
        assert_eq!(m.questions.len(), 2);
        for q in &m.questions {
            assert!(ranked.contains(&q.answer.as_str()));
            assert!(q.options.contains(&q.answer));
        }
        // light occurs twice; the rest tie and keep first-seen order
        assert_eq!(m.questions[0].answer, "light");
        assert_eq!(m.questions[1].answer, "photosynthesis");
        assert_eq!(m.questions[0].question, "Photosynthesis converts _____ into energy.");

        // No hint: center is the (single) first line, cut to 80 chars
        assert!(m.map_data.center.starts_with("Photosynthesis converts light into energy."));
        assert_eq!(m.map_data.center.chars().count(), 80);
        assert_eq!(m.title, m.map_data.center);

        assert_eq!(m.tags.len(), 6);
        // Both sentences average one hit per token; the longer one edges ahead
        assert_eq!(m.summary, "Plants use chlorophyll to capture light.");
        assert!(m.id.starts_with("m_"));

        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_title_hint_wins() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(config(2), &store);
        let mut rng = SequenceSource::new(vec![0.5]);

        let m = use_case.build(PHOTO, Some("  Biology  "), Utc::now(), &mut rng).unwrap();
        assert_eq!(m.title, "Biology");
        assert_eq!(m.map_data.center, "Biology");
    }

    #[test]
    fn test_title_hint_is_normalised() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(config(1), &store);
        let mut rng = SequenceSource::new(vec![0.5]);

        let m = use_case.build(PHOTO, Some("Bio\x01logy\t 101 "), Utc::now(), &mut rng).unwrap();
        assert_eq!(m.title, "Bio logy 101");
        assert_eq!(m.map_data.center, "Bio logy 101");

        let m = use_case.build(PHOTO, Some("\x01\x02"), Utc::now(), &mut rng).unwrap();
        assert!(m.title.starts_with("Photosynthesis"));
    }

    #[test]
    fn test_tags_capped_at_six() {
        let store = MemoryStore::default();
        let cfg   = GenerateConfig { tag_count: 10, ..config(1) };
        let use_case = GenerateUseCase::new(cfg, &store);
        let mut rng = SequenceSource::new(vec![0.5]);
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo";

        let m = use_case.build(text, None, Utc::now(), &mut rng).unwrap();
        assert_eq!(m.tags.len(), MAX_TAGS);
        assert_eq!(m.tags, vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]);
    }

    #[test]
    fn test_same_millisecond_gets_distinct_ids() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(config(1), &store);
        let mut rng = SequenceSource::new(vec![0.5]);
        let now     = Utc::now();

        let first = use_case.build(PHOTO, None, now, &mut rng).unwrap();
        store.append(&first).unwrap();
        let base = format!("m_{}", now.timestamp_millis());

        assert_eq!(use_case.unique_id(&base).unwrap(), format!("{base}_2"));
        store.append(&StudyMaterial { id: format!("{base}_2"), ..first.clone() }).unwrap();
        assert_eq!(use_case.unique_id(&base).unwrap(), format!("{base}_3"));
        assert_eq!(use_case.unique_id("m_1").unwrap(), "m_1");
    }

    #[test]
    fn test_empty_input_generates_nothing() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(GenerateConfig::default(), &store);
        let mut rng = SequenceSource::new(vec![0.5]);

        let outcome = use_case.execute(&pasted("  ### @@@ \n\t "), None, &mut rng).unwrap();
        assert!(matches!(outcome, Generation::NothingToGenerate));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_source_failure_leaves_store_untouched() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(GenerateConfig::default(), &store);
        let mut rng = SequenceSource::new(vec![0.5]);

        use_case.execute(&pasted(PHOTO), None, &mut rng).unwrap();

        let sources: Vec<Box<dyn TextSource>> =
            vec![Box::new(PastedText::new(PHOTO)), Box::new(FailingSource)];
        let err = use_case.execute(&sources, None, &mut rng).unwrap_err();

        assert!(err.to_string().contains("broken.pdf"));
        assert!(err.to_string().contains("bad xref table"));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_extra_stop_words_shape_the_quiz() {
        let store = MemoryStore::default();
        let cfg   = GenerateConfig {
            extra_stop_words: vec!["light".to_string()],
            ..config(1)
        };
        let use_case = GenerateUseCase::new(cfg, &store);
        let mut rng = SequenceSource::new(vec![0.5]);

        let m = use_case.build(PHOTO, None, Utc::now(), &mut rng).unwrap();
        assert_eq!(m.questions[0].answer, "photosynthesis");
        assert!(!m.tags.contains(&"light".to_string()));
    }

    #[test]
    fn test_every_question_answer_is_an_option() {
        let store   = MemoryStore::default();
        let use_case = GenerateUseCase::new(GenerateConfig::default(), &store);
        let text    = "Mitosis splits cells. Meiosis makes gametes. Cells copy DNA before mitosis. \
                       DNA holds genes. Genes code proteins. Proteins fold.";

        for seed in 0..20u64 {
            let mut rng = crate::generation::random::source_from_seed(Some(seed));
            let m = use_case.build(text, None, Utc::now(), &mut rng).unwrap();
            assert_eq!(m.questions.len(), 6);
            for q in &m.questions {
                assert!(q.options.contains(&q.answer));
                assert!(q.options.len() <= 4);
            }
        }
    }
}
