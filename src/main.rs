// ABOUTME: Entry point for semire — a rule-based chat assistant with a saved history.
// ABOUTME: Parses CLI args, loads config, sets up logging, and runs the interactive loop.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use semire::assistant::Assistant;
use semire::config::Config;
use semire::repl;

#[derive(Parser, Debug)]
#[command(name = "semire", version, about = "A rule-based chat assistant")]
struct Cli {
    /// Config file (defaults to ~/.semire/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Conversation history file, overriding the config
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Restore the saved conversation before starting
    #[arg(long)]
    resume: bool,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.log.level);

    let history_path = cli.history.unwrap_or_else(|| config.history.path.clone());
    let mut assistant = Assistant::new(&config.assistant);

    if cli.resume || config.history.resume {
        let outcome = assistant.load_history(&history_path)?;
        info!(?outcome, path = %history_path.display(), "resume");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut assistant, stdin.lock(), stdout.lock(), &history_path)
}
