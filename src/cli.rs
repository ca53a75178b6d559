use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

use crate::config::{
    GameConfig, Result, SensitiveRatio, DEFAULT_GRID_SIZE, DEFAULT_MAX_RATIO, DEFAULT_MIN_RATIO,
};

#[derive(Parser, Debug)]
#[command(name = "cyber-munchers")]
#[command(about = "Eat the sensitive words, leave the ordinary ones")]
#[command(version)]
pub struct Cli {
    /// Cells per side of the board (1 to 32)
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Lowest share of cells holding sensitive words
    #[arg(long, default_value_t = DEFAULT_MIN_RATIO)]
    pub min_ratio: f64,

    /// Upper bound (exclusive) on the share of sensitive cells
    #[arg(long, default_value_t = DEFAULT_MAX_RATIO)]
    pub max_ratio: f64,

    /// Seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Redraw interval while idle, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// More log output, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig> {
        let ratio = SensitiveRatio::new(self.min_ratio, self.max_ratio)?;
        Ok(GameConfig::new(self.grid_size, ratio)?
            .with_seed(self.seed)
            .with_tick_rate(Duration::from_millis(self.tick_ms)))
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MAX_GRID_SIZE};

    #[test]
    fn defaults_match_the_classic_board() {
        let cli = Cli::try_parse_from(["cyber-munchers"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(cli.log_level(), Level::INFO);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn options_flow_into_config() {
        let cli = Cli::try_parse_from([
            "cyber-munchers",
            "--grid-size",
            "7",
            "--min-ratio",
            "0.5",
            "--max-ratio",
            "0.5",
            "--seed",
            "12",
            "--tick-ms",
            "40",
            "-vv",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.grid_size, 7);
        assert_eq!(config.ratio, SensitiveRatio::exactly(0.5).unwrap());
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.tick_rate, Duration::from_millis(40));
        assert_eq!(cli.log_level(), Level::TRACE);
    }

    #[test]
    fn bad_values_are_rejected() {
        let cli = Cli::try_parse_from(["cyber-munchers", "--grid-size", "0"]).unwrap();
        assert_eq!(cli.game_config(), Err(ConfigError::EmptyGrid));

        let cli = Cli::try_parse_from(["cyber-munchers", "--max-ratio", "1.5"]).unwrap();
        assert!(matches!(cli.game_config(), Err(ConfigError::RatioOutOfRange { .. })));

        assert!(Cli::try_parse_from(["cyber-munchers", "--grid-size", "many"]).is_err());
    }

    #[test]
    fn huge_grid_size_is_rejected() {
        let cli = Cli::try_parse_from(["cyber-munchers", "--grid-size", "5000000000"]).unwrap();
        assert_eq!(
            cli.game_config(),
            Err(ConfigError::GridTooLarge { size: 5_000_000_000, max: MAX_GRID_SIZE })
        );
    }
}
