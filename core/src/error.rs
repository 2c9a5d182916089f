use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {0:?} are outside the grid")]
    OutOfBounds(Coord2),
    #[error("Grid dimensions must be at least 1x1")]
    InvalidSize,
    #[error("Too many flowers, at least one cell must stay free")]
    TooManyFlowers,
    #[error("Flower layout covers the excluded cell {0:?}")]
    ExcludedCellHasFlower(Coord2),
    #[error("Flower layout has {found} distinct cells, the grid expects {expected}")]
    FlowerCountMismatch { expected: CellCount, found: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
