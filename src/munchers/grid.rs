use super::words::{Category, Word, WordBank};
use crate::config::{cell_count, ConfigError, Result, SensitiveRatio};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// N×N board of words, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Word>>,
    total_sensitive: usize,
    remaining_sensitive: usize,
}

impl Grid {
    /// Populate a fresh board.
    ///
    /// The sensitive count is `floor(size² × U)` with `U` drawn from `ratio`. Positions come
    /// from a shuffled list of every cell, so none repeats; words are sampled with replacement.
    pub fn initialize<R: Rng + ?Sized>(size: usize, ratio: &SensitiveRatio, rng: &mut R) -> Result<Self> {
        let total_cells = cell_count(size)?;
        let sensitive_count = ((total_cells as f64 * ratio.sample(rng)).floor() as usize).min(total_cells);

        let mut positions: Vec<usize> = (0..total_cells).collect();
        positions.shuffle(rng);

        let mut cells = vec![None; total_cells];
        for (placed, &pos) in positions.iter().enumerate() {
            let category = if placed < sensitive_count {
                Category::Sensitive
            } else {
                Category::Ordinary
            };
            cells[pos] = Some(WordBank::sample(category, rng));
        }

        debug!(size, sensitive_count, "grid populated");
        Ok(Self {
            size,
            cells,
            total_sensitive: sensitive_count,
            remaining_sensitive: sensitive_count,
        })
    }

    /// Build a board from explicit contents, row-major
    pub fn from_cells(size: usize, cells: Vec<Option<Word>>) -> Result<Self> {
        let expected = cell_count(size)?;
        if cells.len() != expected {
            return Err(ConfigError::CellCountMismatch {
                size,
                expected,
                actual: cells.len(),
            });
        }
        let sensitive = cells.iter().flatten().filter(|w| w.is_sensitive()).count();
        Ok(Self {
            size,
            cells,
            total_sensitive: sensitive,
            remaining_sensitive: sensitive,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_sensitive(&self) -> usize {
        self.total_sensitive
    }

    pub fn remaining_sensitive(&self) -> usize {
        self.remaining_sensitive
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    pub fn word_at(&self, row: usize, col: usize) -> Option<Word> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Empty a cell and hand back what it held. Clearing an empty cell does nothing.
    pub fn clear(&mut self, row: usize, col: usize) -> Option<Word> {
        let word = self.index(row, col).and_then(|i| self.cells[i].take())?;
        if word.is_sensitive() {
            self.remaining_sensitive -= 1;
        }
        Some(word)
    }

    /// Every cell with its coordinates, row by row
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Option<Word>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / self.size, i % self.size), *cell))
    }

    #[cfg(test)]
    pub fn count(&self, category: Category) -> usize {
        self.cells.iter().flatten().filter(|w| w.category == category).count()
    }
}
