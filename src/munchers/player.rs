pub const MAX_LIVES: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The muncher: a cursor on the grid plus its remaining lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub row: usize,
    pub col: usize,
    pub lives: u8,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            lives: MAX_LIVES,
        }
    }
}

impl PlayerState {
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Move one cell, staying inside a `size`×`size` grid. Returns whether the player moved.
    pub fn step(&mut self, direction: Direction, size: usize) -> bool {
        let last = size.saturating_sub(1);
        let before = self.position();
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(last),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(last),
        }
        self.position() != before
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}
