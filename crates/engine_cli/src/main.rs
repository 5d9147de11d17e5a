use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use classical_engine::{Difficulty, EngineConfig};
use engine_cli::{Flow, Session};

/// Play chess against the classical engine over stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "chess-engine", version, about)]
struct Args {
    /// TOML engine configuration. Defaults apply when the file is missing.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Overrides the configured difficulty (easy, medium, hard).
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Print replies as JSON lines.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let mut session = Session::new(config, args.json);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match session.execute(&line, &mut stdout) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(stdout, "error: {e:#}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}
