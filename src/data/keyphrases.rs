// ============================================================
// Layer 4: Keyphrase Ranker
// ============================================================
// Frequency-based keyphrase extraction. A "keyphrase" here is a
// single token, not a multi-word phrase.
//
//   lower-cased text
//       │  tokenize: [a-z0-9][a-z0-9\-']+
//       ▼
//   tokens ── drop len < 3, drop stop-words
//       │
//       ▼
//   IndexMap<token, count>   (insertion order = first-seen order)
//       │  stable sort by count, descending
//       ▼
//   top `limit` tokens
//
// The stable sort over an insertion-ordered map is what makes
// ties come out in first-seen order.

use std::collections::HashSet;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

/// Tokens shorter than this are never keyphrases
pub const MIN_TOKEN_LEN: usize = 3;

const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "and", "or", "of", "to", "is", "are", "was", "were", "be",
    "as", "for", "with", "that", "by", "from", "at", "this", "it", "its", "their", "there",
    "which", "we", "you", "they", "he", "she", "but", "about", "into", "than", "then", "so",
    "such", "can", "could", "may", "might", "must", "should", "have", "has", "had", "not",
    "no", "yes", "if", "when", "where", "who", "whom", "what", "why", "how",
];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z0-9][a-z0-9\-']+").expect("valid regex"))
}

/// Split text into lower-case candidate tokens, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ─── StopWords ────────────────────────────────────────────────────────────────
/// Immutable stop-word set. Built once at startup and handed to
/// everything that ranks tokens.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list plus `extra` words (case-insensitive).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> =
            DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

// ─── KeyphraseRanker ──────────────────────────────────────────────────────────
pub struct KeyphraseRanker<'a> {
    stop_words: &'a StopWords,
}

impl<'a> KeyphraseRanker<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    /// True when a token survives length and stop-word filtering
    pub fn qualifies(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_LEN && !self.stop_words.contains(token)
    }

    /// Occurrence counts of qualifying tokens, in first-seen order.
    pub fn frequencies(&self, text: &str) -> IndexMap<String, usize> {
        let mut freq: IndexMap<String, usize> = IndexMap::new();
        for token in tokenize(text) {
            if !self.qualifies(&token) {
                continue;
            }
            *freq.entry(token).or_insert(0) += 1;
        }
        freq
    }

    /// Top `limit` tokens by count. May return fewer.
    pub fn rank(&self, text: &str, limit: usize) -> Vec<String> {
        let mut ranked: Vec<(String, usize)> = self.frequencies(text).into_iter().collect();

        // sort_by is stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(limit)
            .map(|(token, _)| token)
            .collect()
    }
}
