#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use input::*;
pub use render::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod input;
mod render;
mod types;

/// Board dimensions and flower count, only built through [`GameConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    flowers: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord2,
    flowers: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.flowers)
    }
}

impl GameConfig {
    pub const WIDTH: Coord = 19;
    pub const HEIGHT: Coord = 14;
    pub const FLOWERS: CellCount = 40;

    pub fn new((size_x, size_y): Coord2, flowers: CellCount) -> Result<Self> {
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }
        if flowers >= mult(size_x, size_y) {
            return Err(GameError::TooManyFlowers);
        }
        Ok(Self {
            size: (size_x, size_y),
            flowers,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn flowers(&self) -> CellCount {
        self.flowers
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: (Self::WIDTH, Self::HEIGHT),
            flowers: Self::FLOWERS,
        }
    }
}

/// Outcome of a secondary action
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    /// The game was over, a fresh one started instead
    Reset,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Reset => true,
        }
    }
}

/// Outcome of a primary action
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitFlower,
    Won,
    /// The game was over, a fresh one started instead
    Reset,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitFlower => true,
            Won => true,
            Reset => true,
        }
    }
}

/// Used to merge outcomes of the steps of a single action
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Reset, _) | (_, Reset) => Reset,
            (HitFlower, _) | (_, HitFlower) => HitFlower,
            (Won, _) | (_, Won) => Won,
            (Revealed, _) | (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
