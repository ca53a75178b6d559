use anyhow::{Context, Result};
use clap::Parser;
use cyber_munchers::cli::Cli;
use cyber_munchers::core::engine::MouseCapture;
use cyber_munchers::munchers;
use std::fs::File;
use std::sync::Mutex;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config().context("invalid game options")?;
    tracing::info!(?config, "starting cyber munchers");

    let mut terminal = ratatui::init();
    let result = MouseCapture::enable().and_then(|_mouse| munchers::run_game(config, &mut terminal));

    ratatui::restore();
    result
}

/// Logs go to a file when asked for, nowhere otherwise
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(cli.log_level())
        .init();
    Ok(())
}
