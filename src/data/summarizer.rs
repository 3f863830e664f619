// ============================================================
// Layer 4: Extractive Summarizer
// ============================================================
// Picks the most "keyword-dense" sentences of a text.
//
//   score(sentence) = Σ freq(token) / (token_count + ε)
//
// where freq is the document-wide count of qualifying tokens
// (same filtering as the keyphrase ranker). About a fifth of the
// sentences are kept, capped at `max_sentences`, and emitted in
// their original order. Fragments of two characters or fewer
// ("A.", "1.") are not sentences here.

use crate::data::keyphrases::{tokenize, KeyphraseRanker, StopWords};
use crate::data::segmenter::Segmenter;

const EPSILON: f64 = 1e-6;

/// Pieces this short or shorter are skipped
const MIN_SENTENCE_CHARS: usize = 2;

pub struct Summarizer<'a> {
    ranker:    KeyphraseRanker<'a>,
    segmenter: Segmenter,
}

impl<'a> Summarizer<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self {
            ranker:    KeyphraseRanker::new(stop_words),
            segmenter: Segmenter::new(),
        }
    }

    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        let sentences: Vec<String> = self
            .segmenter
            .segment(text)
            .into_iter()
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .collect();
        if sentences.is_empty() || max_sentences == 0 {
            return String::new();
        }

        let freq = self.ranker.frequencies(text);

        let scores: Vec<f64> = sentences
            .iter()
            .map(|s| {
                let tokens = tokenize(s);
                let total: usize = tokens.iter().map(|t| freq.get(t).copied().unwrap_or(0)).sum();
                total as f64 / (tokens.len() as f64 + EPSILON)
            })
            .collect();

        let keep = max_sentences.min((sentences.len() / 5).max(1));

        // Stable sort by score keeps earlier sentences ahead on ties
        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        order.truncate(keep);
        order.sort_unstable();

        tracing::debug!("Summary keeps {} of {} sentences", keep, sentences.len());

        order
            .into_iter()
            .map(|i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
