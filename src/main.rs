use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use matrix_snake::game::GameConfig;
use matrix_snake::modes::PlayMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matrix_snake")]
#[command(version, about = "Snake on an emulated 5x5 LED matrix")]
struct Cli {
    /// JSON configuration file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between two ticks in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    config
        .validate()
        .map_err(|message| anyhow!("Invalid configuration: {}", message))?;

    tracing::info!(tick_ms = config.tick_ms, "starting");

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
