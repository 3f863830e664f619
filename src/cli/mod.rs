// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All work is
// delegated to Layer 2 (application).
//
//   generate  notes → quiz + mind map, stored
//   list      stored materials
//   quiz      print or grade a quiz
//   map       export a mind map as SVG
//   summary   print a stored summary

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, MapArgs, QuizArgs, SummaryArgs};

use crate::application::generate_use_case::{GenerateConfig, GenerateUseCase, Generation};
use crate::application::library_use_case::{parse_answers, LibraryUseCase};
use crate::data::loader::{FileSource, PastedText};
use crate::domain::traits::TextSource;
use crate::generation::random::source_from_seed;
use crate::infra::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(
    name = "study-kit",
    version,
    about = "Turn study notes into a cloze quiz and a radial mind map."
)]
pub struct Cli {
    /// JSON file holding generated materials
    #[arg(long, global = true, env = "STUDY_KIT_STORE", default_value = "study_materials.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = JsonFileStore::new(&self.store);
        tracing::debug!("Using store '{}'", store.path().display());

        match self.command {
            Commands::Generate(args) => run_generate(&store, args),
            Commands::List           => run_list(&store),
            Commands::Quiz(args)     => run_quiz(&store, args),
            Commands::Map(args)      => run_map(&store, args),
            Commands::Summary(args)  => run_summary(&store, args),
        }
    }
}

fn run_generate(store: &JsonFileStore, args: GenerateArgs) -> Result<()> {
    // Files first, pasted text last
    let mut sources: Vec<Box<dyn TextSource>> = args
        .files
        .iter()
        .map(|p| Box::new(FileSource::new(p)) as Box<dyn TextSource>)
        .collect();
    if let Some(text) = args.text.as_deref().filter(|t| !t.trim().is_empty()) {
        sources.push(Box::new(PastedText::new(text)));
    }

    let title  = args.title.clone();
    let config = GenerateConfig::from(args);
    let mut rng = source_from_seed(config.seed);

    let use_case = GenerateUseCase::new(config, store);
    match use_case.execute(&sources, title.as_deref(), &mut rng)? {
        Generation::NothingToGenerate => {
            println!("Please provide a PDF/DOCX/TXT file or some text.");
        }
        Generation::Created(m) => {
            println!("Generated '{}' ({})", m.title, m.id);
            println!("  {} questions, {} mind-map topics", m.questions.len(), m.map_data.topics.len());
            println!("  tags: {}", m.tags.join(", "));
        }
    }
    Ok(())
}

fn run_list(store: &JsonFileStore) -> Result<()> {
    let materials = LibraryUseCase::new(store).list()?;
    if materials.is_empty() {
        println!("No materials yet. Generate some with `study-kit generate`.");
        return Ok(());
    }

    for m in &materials {
        println!(
            "{}  {}  {}  [{}]",
            m.id,
            m.created_at.format("%Y-%m-%d %H:%M"),
            m.title,
            m.tags.join(", ")
        );
    }
    Ok(())
}

fn run_quiz(store: &JsonFileStore, args: QuizArgs) -> Result<()> {
    let library = LibraryUseCase::new(store);

    if !args.answers.is_empty() {
        let answers = parse_answers(&args.answers)?;
        let score   = library.grade(&args.id, &answers)?;
        println!("Your score: {score}");
        return Ok(());
    }

    let material = library.get(&args.id)?;
    println!("Quiz: {}\n", material.title);
    for (idx, q) in material.questions.iter().enumerate() {
        println!("{}. [{}] {}", idx + 1, q.id, q.question);
        for opt in &q.options {
            println!("     - {opt}");
        }
    }
    Ok(())
}

fn run_map(store: &JsonFileStore, args: MapArgs) -> Result<()> {
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.svg", args.id)));
    LibraryUseCase::new(store).export_map(&args.id, &out)?;
    println!("Mind map written to {}", out.display());
    Ok(())
}

fn run_summary(store: &JsonFileStore, args: SummaryArgs) -> Result<()> {
    let material = LibraryUseCase::new(store).get(&args.id)?;
    if material.summary.is_empty() {
        println!("No summary stored for '{}'.", material.id);
    } else {
        println!("{}", material.summary);
    }
    Ok(())
}
