mod application;
mod cli;
mod data;
mod domain;
mod generation;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("study_kit=info".parse()?)
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
