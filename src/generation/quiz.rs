// ============================================================
// Layer 5: Cloze Quiz Synthesizer
// ============================================================
// One multiple-choice question per top-ranked keyphrase.
//
// For question i (key = phrases[i]):
//   1. Stem: the first sentence containing `key` (lower-cased
//      substring match) with that occurrence blanked as `_____`.
//      No such sentence → "What best describes: {key}?"
//   2. Distractors: the phrase list without `key`, window [i, i+3).
//      Later questions therefore get fewer distractors once the
//      window runs off the end of the list.
//   3. Options: [key, distractors...] shuffled, at most 4.
//
// Example (phrases = [light, energy, plants, water]):
//   q1 key=light   distractors=[energy, plants, water]
//   q3 key=plants  distractors=[water]

use regex::RegexBuilder;

use crate::data::keyphrases::{KeyphraseRanker, StopWords};
use crate::data::segmenter::Segmenter;
use crate::domain::material::Question;
use crate::domain::traits::RandomSource;
use crate::generation::random::shuffle;

pub const BLANK: &str = "_____";

/// Options per question, answer included
pub const MAX_OPTIONS: usize = 4;

const DISTRACTORS: usize = MAX_OPTIONS - 1;

pub struct QuizSynthesizer<'a> {
    ranker:      KeyphraseRanker<'a>,
    segmenter:   Segmenter,
    phrase_pool: usize,
}

impl<'a> QuizSynthesizer<'a> {
    /// `phrase_pool` is how many ranked phrases feed answers and
    /// distractors.
    pub fn new(stop_words: &'a StopWords, phrase_pool: usize) -> Self {
        Self {
            ranker:    KeyphraseRanker::new(stop_words),
            segmenter: Segmenter::new(),
            phrase_pool,
        }
    }

    /// Generate up to `count` questions from cleaned text.
    pub fn synthesize(
        &self,
        text:  &str,
        count: usize,
        rng:   &mut dyn RandomSource,
    ) -> Vec<Question> {
        let sentences = self.segmenter.segment(text);
        let phrases   = self.ranker.rank(text, self.phrase_pool);
        let n         = count.min(phrases.len());

        let questions: Vec<Question> = (0..n)
            .map(|i| {
                let key = &phrases[i];

                let stem = cloze_stem(&sentences, key);

                let mut options = Vec::with_capacity(MAX_OPTIONS);
                options.push(key.clone());
                options.extend(
                    phrases
                        .iter()
                        .filter(|p| *p != key)
                        .skip(i)
                        .take(DISTRACTORS)
                        .cloned(),
                );
                shuffle(&mut options, rng);
                options.truncate(MAX_OPTIONS);

                Question {
                    id:       format!("q{}", i + 1),
                    question: stem,
                    options,
                    answer:   key.clone(),
                }
            })
            .collect();

        tracing::debug!(
            "Synthesized {} questions from {} phrases and {} sentences",
            questions.len(),
            phrases.len(),
            sentences.len()
        );

        questions
    }
}

/// Stem for `key`: its first containing sentence, blanked, or the
/// generic template.
fn cloze_stem(sentences: &[String], key: &str) -> String {
    sentences
        .iter()
        .find(|s| s.to_lowercase().contains(key))
        .and_then(|s| blank_out(s, key))
        .unwrap_or_else(|| format!("What best describes: {key}?"))
}

/// Replace the first case-insensitive occurrence of `key` with the blank.
/// None when the sentence has no such occurrence.
fn blank_out(sentence: &str, key: &str) -> Option<String> {
    let re = RegexBuilder::new(&regex::escape(key))
        .case_insensitive(true)
        .build()
        .ok()?;
    let m = re.find(sentence)?;

    let mut stem = String::with_capacity(sentence.len());
    stem.push_str(&sentence[..m.start()]);
    stem.push_str(BLANK);
    stem.push_str(&sentence[m.end()..]);
    Some(stem)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::SequenceSource;

    const TEXT: &str = "Light feeds plants. Plants store energy from light. \
                        Water carries energy to roots. Light light water.";

    fn keep_order() -> SequenceSource {
        SequenceSource::new(vec![0.999])
    }

    #[test]
    fn test_answers_are_always_options() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        let qs   = quiz.synthesize(TEXT, 6, &mut SequenceSource::new(vec![0.1, 0.7, 0.4]));

        assert!(!qs.is_empty());
        for q in &qs {
            assert!(q.options.contains(&q.answer));
            assert!(q.options.len() <= MAX_OPTIONS);
        }
    }

    #[test]
    fn test_cloze_stem_blanks_first_occurrence() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        let qs   = quiz.synthesize(TEXT, 1, &mut keep_order());

        // light (4) ranks first; its first sentence starts with "Light"
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].id, "q1");
        assert_eq!(qs[0].answer, "light");
        assert_eq!(qs[0].question, "_____ feeds plants.");
    }

    #[test]
    fn test_sliding_window_distractors() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        // phrases: light(4) plants(2) energy(2) water(2) feeds store carries roots
        let qs = quiz.synthesize(TEXT, 3, &mut keep_order());

        assert_eq!(qs[0].options, vec!["light", "plants", "energy", "water"]);
        assert_eq!(qs[1].options, vec!["plants", "energy", "water", "feeds"]);
        assert_eq!(qs[2].options, vec!["energy", "water", "feeds", "store"]);
        assert_eq!(qs[2].question, "Plants store _____ from light.");
    }

    #[test]
    fn test_window_shrinks_near_end_of_phrase_list() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        let qs   = quiz.synthesize("alpha beta gamma delta", 4, &mut keep_order());

        let sizes: Vec<usize> = qs.iter().map(|q| q.options.len()).collect();
        assert_eq!(sizes, vec![4, 3, 2, 1]);
        assert_eq!(qs[3].options, vec!["delta"]);
    }

    #[test]
    fn test_generic_stem_when_no_sentence_contains_key() {
        let sentences = vec!["Nothing here.".to_string()];
        assert_eq!(cloze_stem(&sentences, "light"), "What best describes: light?");
        assert_eq!(cloze_stem(&[], "light"), "What best describes: light?");
        assert_eq!(cloze_stem(&sentences, "here"), "Nothing _____.");
    }

    #[test]
    fn test_empty_text_gives_no_questions() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        assert!(quiz.synthesize("", 3, &mut keep_order()).is_empty());
    }

    #[test]
    fn test_blank_out_is_case_insensitive_and_escapes() {
        assert_eq!(blank_out("LIGHT and light", "light").as_deref(), Some("_____ and light"));
        assert_eq!(blank_out("a.b-c's item", "b-c's").as_deref(), Some("a._____ item"));
    }

    #[test]
    fn test_zero_count_gives_no_questions() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        assert!(quiz.synthesize(TEXT, 0, &mut keep_order()).is_empty());
    }

    #[test]
    fn test_fewer_phrases_than_count() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 20);
        let qs   = quiz.synthesize("Gravity bends spacetime.", 6, &mut keep_order());
        assert_eq!(qs.len(), 3);
        assert_eq!(
            qs.iter().map(|q| q.id.as_str()).collect::<Vec<_>>(),
            vec!["q1", "q2", "q3"]
        );
    }

    #[test]
    fn test_phrase_pool_limits_distractors() {
        let stop = StopWords::default();
        let quiz = QuizSynthesizer::new(&stop, 2);
        let qs   = quiz.synthesize(TEXT, 6, &mut keep_order());
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].options, vec!["light", "plants"]);
    }
}
