//! Cyber Munchers: eat the sensitive words, leave the ordinary ones.

pub mod game;
pub mod grid;
pub mod input;
pub mod layout;
pub mod player;
pub mod renderer;
pub mod words;

pub use game::{EatOutcome, MunchersGame, MunchersState, Round, Status};
pub use grid::Grid;
pub use input::Command;
pub use player::{Direction, PlayerState, MAX_LIVES};
pub use renderer::MunchersRenderer;
pub use words::{Category, Word, WordBank};

use crate::config::GameConfig;
use crate::core::engine::Engine;
use anyhow::{Context, Result};
use ratatui::DefaultTerminal;

/// Game runner for Cyber Munchers
pub fn run_game(config: GameConfig, terminal: &mut DefaultTerminal) -> Result<()> {
    let game = MunchersGame::new(config).context("failed to deal the first round")?;
    let engine: Engine<MunchersGame, MunchersRenderer> = Engine::new(game);
    engine.run(terminal)?;
    Ok(())
}
