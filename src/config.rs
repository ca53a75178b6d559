use rand::Rng;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_GRID_SIZE: usize = 5;
/// Largest board that still leaves room for a word per cell in a terminal
pub const MAX_GRID_SIZE: usize = 32;
pub const DEFAULT_MIN_RATIO: f64 = 0.30;
pub const DEFAULT_MAX_RATIO: f64 = 0.40;
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Grid size must be at least 1")]
    EmptyGrid,
    #[error("Sensitive ratio bounds must be within [0, 1], got {min}..{max}")]
    RatioOutOfRange { min: f64, max: f64 },
    #[error("Sensitive ratio minimum {min} is greater than maximum {max}")]
    RatioInverted { min: f64, max: f64 },
    #[error("Grid of size {size} needs {expected} cells, got {actual}")]
    CellCountMismatch { size: usize, expected: usize, actual: usize },
    #[error("Grid size {size} is larger than the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Number of cells on a `size`×`size` board, rejecting empty and oversized boards
pub fn cell_count(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    let too_large = ConfigError::GridTooLarge { size, max: MAX_GRID_SIZE };
    if size > MAX_GRID_SIZE {
        return Err(too_large);
    }
    size.checked_mul(size).ok_or(too_large)
}

/// Share of the grid that holds sensitive words, drawn once per round from `[min, max)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitiveRatio {
    min: f64,
    max: f64,
}

impl SensitiveRatio {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(min) || !in_unit(max) {
            return Err(ConfigError::RatioOutOfRange { min, max });
        }
        if min > max {
            return Err(ConfigError::RatioInverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Always the same ratio
    pub fn exactly(ratio: f64) -> Result<Self> {
        Self::new(ratio, ratio)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            self.min
        } else {
            rng.random_range(self.min..self.max)
        }
    }
}

impl Default for SensitiveRatio {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_RATIO,
            max: DEFAULT_MAX_RATIO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub ratio: SensitiveRatio,
    /// Fixed seed for reproducible boards, OS entropy otherwise
    pub seed: Option<u64>,
    pub tick_rate: Duration,
}

impl GameConfig {
    pub fn new(grid_size: usize, ratio: SensitiveRatio) -> Result<Self> {
        cell_count(grid_size)?;
        Ok(Self {
            grid_size,
            ratio,
            ..Self::default()
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            ratio: SensitiveRatio::default(),
            seed: None,
            tick_rate: DEFAULT_TICK,
        }
    }
}
