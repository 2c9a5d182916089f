use super::*;

/// Places flowers on a fixed list of cells, for replays and scripted boards.
///
/// Repeated cells count once, and the distinct cells must match the flower
/// total of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetPlacer {
    flowers: Vec<Coord2>,
}

impl PresetPlacer {
    pub fn new(flowers: impl IntoIterator<Item = Coord2>) -> Self {
        let mut flowers: Vec<_> = flowers.into_iter().collect();
        flowers.sort_unstable();
        flowers.dedup();
        Self { flowers }
    }
}

impl FlowerPlacer for PresetPlacer {
    fn place(&mut self, grid: &mut Grid, exclude: Coord2) -> Result<()> {
        for &coords in &self.flowers {
            grid.validate_coords(coords)?;
            if coords == exclude {
                return Err(GameError::ExcludedCellHasFlower(coords));
            }
        }
        let found = CellCount::try_from(self.flowers.len()).unwrap_or(CellCount::MAX);
        if found != grid.flower_total() {
            return Err(GameError::FlowerCountMismatch {
                expected: grid.flower_total(),
                found,
            });
        }

        for &coords in &self.flowers {
            grid.plant_flower(coords);
        }
        log::debug!("placed {} preset flowers", found);
        Ok(())
    }
}
