use alloc::vec::Vec;
use rand::Rng;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Decides where flowers go once the first cell has been picked.
pub trait FlowerPlacer {
    /// Plants `grid.flower_total()` flowers, never on `exclude`.
    fn place(&mut self, grid: &mut Grid, exclude: Coord2) -> Result<()>;
}

/// Plants `count` flowers on uniformly random cells other than `exclude`.
///
/// Draws from a shrinking pool so no cell is picked twice.
pub fn place_flowers<R: Rng + ?Sized>(
    grid: &mut Grid,
    exclude: Coord2,
    count: CellCount,
    rng: &mut R,
) -> Result<()> {
    let exclude = grid.validate_coords(exclude)?;
    if count >= grid.total_cells() {
        return Err(GameError::TooManyFlowers);
    }

    let mut pool: Vec<Coord2> = grid.coords().filter(|&pos| pos != exclude).collect();
    for _ in 0..count {
        let pick = rng.random_range(0..pool.len());
        grid.plant_flower(pool.swap_remove(pick));
    }

    log::debug!("placed {} flowers, excluding {:?}", count, exclude);
    Ok(())
}

/// Writes every cell's count of flower-bearing neighbors.
pub fn compute_adjacency(grid: &mut Grid) {
    for coords in grid.coords() {
        let count = grid
            .iter_neighbors(coords)
            .filter(|&pos| grid[pos].has_flower)
            .count();
        grid[coords].adjacent_flowers = count as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn places_exact_count_and_skips_excluded_cell() {
        for seed in 0..32 {
            let mut grid = Grid::new(GameConfig::default());
            let mut rng = SmallRng::seed_from_u64(seed);

            place_flowers(&mut grid, (10, 7), 40, &mut rng).unwrap();

            assert_eq!(grid.count_flowers(), 40);
            assert!(!grid[(10, 7)].has_flower);
        }
    }

    #[test]
    fn fills_every_cell_but_the_excluded_one() {
        let mut grid = Grid::new(GameConfig::new((3, 3), 8).unwrap());
        let mut rng = SmallRng::seed_from_u64(7);

        place_flowers(&mut grid, (2, 2), 8, &mut rng).unwrap();

        assert!(!grid[(2, 2)].has_flower);
        assert_eq!(grid.count_flowers(), 8);
    }

    #[test]
    fn rejects_full_board_and_bad_exclusion() {
        let mut grid = Grid::new(GameConfig::new((2, 2), 1).unwrap());
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(
            place_flowers(&mut grid, (1, 1), 4, &mut rng),
            Err(GameError::TooManyFlowers)
        );
        assert_eq!(
            place_flowers(&mut grid, (3, 1), 1, &mut rng),
            Err(GameError::OutOfBounds((3, 1)))
        );
        assert_eq!(grid.count_flowers(), 0);
    }

    #[test]
    fn adjacency_matches_neighbor_flowers() {
        let mut grid = Grid::new(GameConfig::default());
        let mut rng = SmallRng::seed_from_u64(42);
        place_flowers(&mut grid, (1, 1), 40, &mut rng).unwrap();

        compute_adjacency(&mut grid);

        for coords in grid.coords() {
            let (x, y) = coords;
            let mut expected = 0;
            for ny in y.saturating_sub(1)..=y + 1 {
                for nx in x.saturating_sub(1)..=x + 1 {
                    if (nx, ny) != coords && in_bounds((nx, ny), grid.size()) {
                        expected += u8::from(grid[(nx, ny)].has_flower);
                    }
                }
            }
            assert_eq!(grid[coords].adjacent_flowers, expected, "at {:?}", coords);
        }
    }
}
