//! Noughts and crosses - entry point
//!
//! Starts the game loop and the terminal display and waits for the player
//! to quit.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{
    display, init_logging, intent_channel, redraw_channel, AppConfig, BoardEngine, Cli, GameLoop,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_log_file(cli.log_file);

    init_logging(config.log_file())?;
    info!(?config, "Starting noughts");

    let (observer, signal) = redraw_channel();
    let (intent_tx, intent_rx) = intent_channel();

    let game = tokio::spawn(GameLoop::new(BoardEngine::new(observer), intent_rx).run());

    // The display owns the only intent sender; when it returns, the game
    // loop sees the channel close and stops.
    let display = tokio::task::spawn_blocking(move || {
        display::run_display(&config, intent_tx, signal)
    });
    display.await.context("Display thread panicked")??;

    let engine = game.await.context("Game loop panicked")?;
    info!(
        revision = engine.revision(),
        status = ?engine.status(),
        "Shut down"
    );

    Ok(())
}
