// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Subcommands and their flags. clap derives help text, missing
// argument errors and type conversion.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::generate_use_case::GenerateConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a quiz and mind map from notes
    Generate(GenerateArgs),

    /// List stored materials, newest first
    List,

    /// Show a material's quiz, or grade answers to it
    Quiz(QuizArgs),

    /// Write a material's mind map as SVG
    Map(MapArgs),

    /// Print a material's summary
    Summary(SummaryArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Notes typed or pasted on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// PDF, DOCX or TXT files (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Title, also used as the mind-map center
    #[arg(long)]
    pub title: Option<String>,

    /// Number of quiz questions
    #[arg(long, default_value_t = 6)]
    pub questions: usize,

    /// Number of mind-map topics
    #[arg(long, default_value_t = 12)]
    pub nodes: usize,

    /// Number of tags stored with the material (at most 6)
    #[arg(long, default_value_t = 6)]
    pub tags: usize,

    /// Maximum summary length in sentences
    #[arg(long, default_value_t = 5)]
    pub summary_sentences: usize,

    /// Extra stop-word (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    pub stop_words: Vec<String>,

    /// Seed for a reproducible option order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            question_count:    a.questions,
            map_nodes:         a.nodes,
            tag_count:         a.tags,
            summary_sentences: a.summary_sentences,
            extra_stop_words:  a.stop_words,
            seed:              a.seed,
            ..GenerateConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Material id (see `list`)
    pub id: String,

    /// Selected option, as q1=OPTION (repeatable). Grades the quiz.
    #[arg(long = "answer", value_name = "QID=OPTION")]
    pub answers: Vec<String>,
}

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Material id (see `list`)
    pub id: String,

    /// Output file, defaults to <id>.svg
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Material id (see `list`)
    pub id: String,
}
