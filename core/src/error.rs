use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one row and one column, got {rows} X {columns}")]
    InvalidGrid { rows: Coord, columns: Coord },
    #[error("Mine percentage must be between 0 and 100, got {0}")]
    InvalidMinePercentage(u8),
    #[error("Player must start with at least one life")]
    InvalidLives,
}

pub type Result<T> = core::result::Result<T, GameError>;
