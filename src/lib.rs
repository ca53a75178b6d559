pub mod core {
	pub mod engine;
	pub mod game;
}

pub mod cli;
pub mod config;
pub mod munchers;

// Re-export for convenience
pub use crate::config::{ConfigError, GameConfig, SensitiveRatio};
pub use crate::core::game::{Context, Game, Renderer};
