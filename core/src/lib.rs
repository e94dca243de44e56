#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use observer::*;
pub use placer::*;
pub use types::*;

mod engine;
mod error;
mod observer;
mod placer;
mod types;

/// Parameters for a single game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    /// Share of grid cells that should hold a mine, `0..=100`.
    pub mine_percentage: u8,
    pub lives: u8,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Coord = 8;
    pub const DEFAULT_COLUMNS: Coord = 8;
    pub const DEFAULT_MINE_PERCENTAGE: u8 = 10;
    pub const DEFAULT_LIVES: u8 = 3;

    pub const fn new_unchecked(
        rows: Coord,
        columns: Coord,
        mine_percentage: u8,
        lives: u8,
    ) -> Self {
        Self {
            rows,
            columns,
            mine_percentage,
            lives,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mine_percentage: u8, lives: u8) -> Result<Self> {
        let config = Self::new_unchecked(rows, columns, mine_percentage, lives);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.mine_percentage > 100 {
            return Err(GameError::InvalidMinePercentage(self.mine_percentage));
        }
        if self.lives == 0 {
            return Err(GameError::InvalidLives);
        }
        Ok(())
    }

    pub const fn grid(&self) -> Grid {
        Grid::new(self.rows, self.columns)
    }

    /// Number of mines the placer aims for, rounded down.
    pub const fn target_mine_count(&self) -> CellCount {
        let cells = self.grid().total_cells() as u64;
        (cells * self.mine_percentage as u64 / 100) as CellCount
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_ROWS,
            Self::DEFAULT_COLUMNS,
            Self::DEFAULT_MINE_PERCENTAGE,
            Self::DEFAULT_LIVES,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Off the grid, or the game had already ended.
    Rejected,
    Moved,
    /// Stepped on a mine and survived.
    HitMine,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn is_accepted(self) -> bool {
        use MoveOutcome::*;
        match self {
            Rejected => false,
            Moved => true,
            HitMine => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
