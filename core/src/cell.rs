use serde::{Deserialize, Serialize};

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Covered,
    Uncovered,
    Flagged,
    Questioned,
}

impl Visibility {
    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered)
    }

    /// Whether flood fill may open a cell in this state
    pub const fn is_floodable(self) -> bool {
        matches!(self, Self::Covered | Self::Questioned)
    }

    /// Next state in the secondary-button cycle, `None` for uncovered cells
    pub const fn cycle_mark(self) -> Option<Self> {
        use Visibility::*;
        match self {
            Covered => Some(Flagged),
            Flagged => Some(Questioned),
            Questioned => Some(Covered),
            Uncovered => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_flower: bool,
    pub visibility: Visibility,
    /// Only meaningful once flowers have been placed.
    pub adjacent_flowers: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cycle_returns_to_covered() {
        let mut visibility = Visibility::Covered;
        for _ in 0..3 {
            visibility = visibility.cycle_mark().unwrap();
        }
        assert_eq!(visibility, Visibility::Covered);
    }

    #[test]
    fn uncovered_is_terminal() {
        assert_eq!(Visibility::Uncovered.cycle_mark(), None);
        assert!(!Visibility::Uncovered.is_floodable());
        assert!(!Visibility::Flagged.is_floodable());
    }
}
