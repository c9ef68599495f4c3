//! leetcoach CLI — interactive coding-interview practice coach.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leetcoach_core::{CoachSession, CurriculumStore, ProgressStore};
use leetcoach_curriculum::config::load_config_from;
use leetcoach_curriculum::{create_sources, fetch_curriculum};

#[derive(Parser)]
#[command(
    name = "leetcoach",
    version,
    about = "Coding-interview practice coach with progress tracking"
)]
struct Cli {
    /// Progress file path (default: progress.json)
    #[arg(long)]
    progress_file: Option<PathBuf>,

    /// Skip the network and use the built-in curriculum
    #[arg(long)]
    offline: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leetcoach=error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(path) = cli.progress_file {
        config.progress_file = path;
    }
    if cli.offline {
        config.curriculum.enabled = false;
    }

    // Open progress before touching the network so a corrupt file fails fast.
    let progress = ProgressStore::open(&config.progress_file)?;
    info!(path = %progress.path().display(), "progress opened");

    let sources = create_sources(&config.curriculum)?;
    let curriculum = CurriculumStore::load(fetch_curriculum(&sources).await);

    tokio::task::spawn_blocking(move || {
        let mut session = CoachSession::new(curriculum, progress, io::stdin().lock(), io::stdout());
        session.run()
    })
    .await??;

    Ok(())
}
