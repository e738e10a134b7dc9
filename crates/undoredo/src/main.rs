use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use undoredo_config::AppConfig;

mod graph;
mod replay;

/// Replays a JSON action script through an undo/redo-enhanced store.
#[derive(Parser, Debug)]
#[command(name = "undoredo", version, about)]
struct Cli {
    /// Script file: `{"initial_state": {...}, "actions": [...]}`.
    script: PathBuf,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Action type that bypasses history (repeatable).
    #[arg(long = "filter")]
    filters: Vec<String>,

    /// Print only the final state.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_create(&AppConfig::config_path()),
    };

    // Initialize logging on stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Replaying {}", cli.script.display());

    let script = replay::Script::load(&cli.script)?;
    let initial = script.initial_state.clone();
    let history = config.history.with_filter_actions(cli.filters);
    let frames = replay::replay(script, history);

    if !cli.quiet {
        for frame in &frames {
            println!("{}", serde_json::to_string(frame)?);
        }
    }
    let last = frames.last().map_or(&initial, |frame| &frame.state);
    println!("{}", serde_json::to_string_pretty(last)?);

    Ok(())
}
