use alloc::vec::Vec;

use crate::*;

/// Everything one player session needs: board settings, the current grid and
/// the strategy used to place flowers when a new grid gets its first click.
#[derive(Clone, Debug)]
pub struct Game<P = RandomPlacer> {
    config: GameConfig,
    grid: Grid,
    placer: P,
}

impl<P: FlowerPlacer> Game<P> {
    pub fn new(config: GameConfig, placer: P) -> Self {
        Self {
            config,
            grid: Grid::new(config),
            placer,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.grid.status()
    }

    pub fn is_over(&self) -> bool {
        self.grid.is_over()
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_won()
    }

    pub fn flags_placed(&self) -> CellCount {
        self.grid.count_visibility(Visibility::Flagged)
    }

    /// How many flowers have not been flagged yet, negative when over-flagged
    pub fn flowers_left(&self) -> isize {
        (self.grid.flower_total() as isize) - (self.flags_placed() as isize)
    }

    /// Throws the current grid away and starts over with a covered, unplaced one
    pub fn reset(&mut self) {
        log::debug!("new game");
        self.grid = Grid::new(self.config);
    }

    /// Reveal at `coords`, placing the flowers first if this is the opening move.
    pub fn primary(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        if self.grid.is_over() {
            self.reset();
            return Ok(Reset);
        }
        if matches!(self.grid[coords].visibility, Visibility::Flagged) {
            return Ok(NoChange);
        }

        if !self.grid.placement_done() {
            self.placer.place(&mut self.grid, coords)?;
            compute_adjacency(&mut self.grid);
            self.grid.mark_placed();
        }

        let mut outcome = chord_reveal(&mut self.grid, coords);
        // runs even if the chord already lost, the status stays `Lost`
        outcome = outcome | uncover(&mut self.grid, coords);

        if !self.grid.is_over() && self.grid.all_safe_cells_uncovered() {
            self.grid.end(GameStatus::Won);
            outcome = outcome | Won;
        }

        log::debug!("primary at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Cycle the mark at `coords`: covered, flagged, questioned, covered again.
    pub fn secondary(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.grid.is_over() {
            self.reset();
            return Ok(MarkOutcome::Reset);
        }

        let outcome = match self.grid[coords].visibility.cycle_mark() {
            Some(next) => {
                self.grid.set_visibility(coords, next);
                MarkOutcome::Changed
            }
            None => MarkOutcome::NoChange,
        };

        log::debug!("secondary at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }
}

/// Opens every unflagged neighbor of a numbered cell whose flag count matches.
///
/// Flags are trusted: a misplaced flag keeps its cell shut even if it is safe.
fn chord_reveal(grid: &mut Grid, coords: Coord2) -> RevealOutcome {
    use RevealOutcome::*;

    let count = grid[coords].adjacent_flowers;
    if count == 0 || grid.count_neighbors_with(coords, Visibility::Flagged) != count {
        return NoChange;
    }

    let mut outcome = NoChange;
    for pos in grid.iter_neighbors(coords) {
        let cell = grid[pos];
        match cell.visibility {
            Visibility::Flagged | Visibility::Uncovered => continue,
            Visibility::Covered | Visibility::Questioned => {}
        }

        if cell.has_flower {
            grid.end(GameStatus::Lost);
            outcome = outcome | HitFlower;
        } else {
            grid.set_visibility(pos, Visibility::Uncovered);
            outcome = outcome | Revealed;
        }
    }
    outcome
}

fn uncover(grid: &mut Grid, coords: Coord2) -> RevealOutcome {
    if grid[coords].has_flower {
        grid.set_visibility(coords, Visibility::Uncovered);
        grid.end(GameStatus::Lost);
        RevealOutcome::HitFlower
    } else {
        flood_fill(grid, coords)
    }
}

/// Depth-first opening of the region around `start`, bounded by numbered cells.
fn flood_fill(grid: &mut Grid, start: Coord2) -> RevealOutcome {
    let mut opened = 0usize;
    let mut stack = Vec::from([start]);

    while let Some(coords) = stack.pop() {
        if coords != start && grid[coords].visibility.is_uncovered() {
            continue;
        }

        if !grid[coords].visibility.is_uncovered() {
            grid.set_visibility(coords, Visibility::Uncovered);
            opened += 1;
        }

        if grid[coords].adjacent_flowers == 0 {
            stack.extend(
                grid.iter_neighbors(coords)
                    .filter(|&pos| grid[pos].visibility.is_floodable()),
            );
        }
    }

    log::trace!("flood fill from {:?} opened {} cells", start, opened);
    if opened > 0 {
        RevealOutcome::Revealed
    } else {
        RevealOutcome::NoChange
    }
}
