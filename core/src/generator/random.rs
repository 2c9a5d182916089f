use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, only the first picked cell is kept free.
///
/// The generator keeps its state across games so every reset gets a new layout.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FlowerPlacer for RandomPlacer {
    fn place(&mut self, grid: &mut Grid, exclude: Coord2) -> Result<()> {
        let count = grid.flower_total();
        place_flowers(grid, exclude, count, &mut self.rng)
    }
}
