/// Single coordinate axis used for grid width, height, and positions.
///
/// Positions are 1-indexed: a grid of width `W` has columns `1..=W`.
pub type Coord = u8;

/// Count type used for flower counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Maps 1-indexed coordinates to the 0-indexed storage position.
///
/// Callers must have validated the coordinates first.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [usize::from(self.0) - 1, usize::from(self.1) - 1]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn in_bounds((x, y): Coord2, (width, height): Coord2) -> bool {
    x >= 1 && x <= width && y >= 1 && y <= height
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, (dx, dy): (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let next = (
        coords.0.checked_add_signed(dx)?,
        coords.1.checked_add_signed(dy)?,
    );
    in_bounds(next, bounds).then_some(next)
}

/// Clamped 8-neighborhood of a cell, never yielding the cell itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Every coordinate of a grid in raster order: row by row, left to right.
#[derive(Debug)]
pub struct RasterIter {
    bounds: Coord2,
    next: Option<Coord2>,
}

impl RasterIter {
    pub(crate) fn new(bounds: Coord2) -> Self {
        let next = in_bounds((1, 1), bounds).then_some((1, 1));
        Self { bounds, next }
    }
}

impl Iterator for RasterIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (x, y) = current;
        self.next = if x < self.bounds.0 {
            Some((x + 1, y))
        } else if y < self.bounds.1 {
            Some((1, y + 1))
        } else {
            None
        };
        Some(current)
    }
}
