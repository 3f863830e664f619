// ============================================================
// Layer 3: Study Material Domain Types
// ============================================================
// The records produced by one generation run:
//
//   StudyMaterial
//     ├── questions: Vec<Question>   (cloze quiz)
//     ├── map_data:  MindMapData     (center label + topics)
//     ├── tags:      Vec<String>     (top keyphrases)
//     └── summary:   String          (extractive summary)
//
// Field names serialise in camelCase so the stored JSON keeps
// the `createdAt` / `mapData` shape other tools read.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One multiple-choice cloze question.
///
/// `answer` is always one of `options`; options are not
/// guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// "q1", "q2", ... in generation order
    pub id: String,

    /// The question stem, usually a source sentence with the
    /// answer blanked out as `_____`
    pub question: String,

    /// At most four shuffled options
    pub options: Vec<String>,

    /// The correct option
    pub answer: String,
}

/// Input for the radial mind map: a center label and the
/// topics arranged around it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MindMapData {
    pub center: String,
    pub topics: Vec<String>,
}

/// The persisted unit. Created once per generation and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    pub id:         String,
    pub title:      String,
    pub created_at: DateTime<Utc>,
    pub questions:  Vec<Question>,
    pub map_data:   MindMapData,
    pub tags:       Vec<String>,

    // Records written before summaries existed have no such key
    #[serde(default)]
    pub summary:    String,
}

impl StudyMaterial {
    /// Look up a question by its id ("q1", ...)
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Result of grading a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total:   usize,
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Grade a set of selected options, keyed by question id.
/// Unanswered questions count as wrong.
pub fn grade(questions: &[Question], answers: &HashMap<String, String>) -> QuizScore {
    let correct = questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|selected| *selected == q.answer))
        .count();

    QuizScore { correct, total: questions.len() }
}
