use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Cell storage for one game, from the first click to win or loss.
///
/// Reads are public; writes are reserved to the placement generator and the
/// reveal engine inside this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    flower_total: CellCount,
    placement_done: bool,
    status: GameStatus,
}

impl Grid {
    pub fn new(config: GameConfig) -> Self {
        let size = config.size();
        Self {
            cells: Array2::default([usize::from(size.0), usize::from(size.1)]),
            flower_total: config.flowers(),
            placement_done: false,
            status: GameStatus::default(),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        // dimensions were built from `Coord` values
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn flower_total(&self) -> CellCount {
        self.flower_total
    }

    pub fn placement_done(&self) -> bool {
        self.placement_done
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn coords(&self) -> RasterIter {
        RasterIter::new(self.size())
    }

    pub fn count_flowers(&self) -> CellCount {
        // at most `Coord::MAX²` cells
        self.cells.iter().filter(|cell| cell.has_flower).count() as CellCount
    }

    pub fn count_visibility(&self, visibility: Visibility) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.visibility == visibility)
            .count() as CellCount
    }

    /// Counts neighbors of `coords` whose visibility matches
    pub fn count_neighbors_with(&self, coords: Coord2, visibility: Visibility) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].visibility == visibility)
            .count() as u8
    }

    /// Every non-flower cell is uncovered; flower cells may be in any state.
    pub fn all_safe_cells_uncovered(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.has_flower || cell.visibility.is_uncovered())
    }

    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) {
        self[coords].visibility = visibility;
    }

    pub(crate) fn plant_flower(&mut self, coords: Coord2) {
        self[coords].has_flower = true;
    }

    pub(crate) fn mark_placed(&mut self) {
        self.placement_done = true;
    }

    /// Records the end of the game, the first terminal status wins.
    pub(crate) fn end(&mut self, status: GameStatus) {
        if self.status.is_over() {
            return;
        }
        log::debug!("game over: {:?}", status);
        self.status = status;
    }
}

impl core::ops::Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl core::ops::IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
