use serde::{Deserialize, Serialize};

use crate::*;

/// Bottom layer of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Base {
    Covered,
    CoveredHighlighted,
    Uncovered,
}

/// Drawn over the base: flowers once the game is over, numbers on open cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Flower,
    Number(u8),
}

/// Player marks, drawn over everything else.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Flag,
    Question,
}

/// Single image of the sprite sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Covered,
    CoveredHighlighted,
    Uncovered,
    Flower,
    Flag,
    Question,
    Number(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellVisual {
    pub base: Base,
    pub overlay: Option<Overlay>,
    pub mark: Option<Mark>,
}

impl CellVisual {
    /// Sprites to draw, bottom first.
    pub fn sprites(self) -> impl Iterator<Item = Sprite> {
        let base = match self.base {
            Base::Covered => Sprite::Covered,
            Base::CoveredHighlighted => Sprite::CoveredHighlighted,
            Base::Uncovered => Sprite::Uncovered,
        };
        let overlay = self.overlay.map(|overlay| match overlay {
            Overlay::Flower => Sprite::Flower,
            Overlay::Number(count) => Sprite::Number(count),
        });
        let mark = self.mark.map(|mark| match mark {
            Mark::Flag => Sprite::Flag,
            Mark::Question => Sprite::Question,
        });
        core::iter::once(base).chain(overlay).chain(mark)
    }
}

/// Decides what the renderer draws for the cell at `coords`.
///
/// `selected` is the cell under the pointer, `primary_down` whether the
/// primary button is held, which previews the cell as pressed.
pub fn visual_for(
    grid: &Grid,
    coords: Coord2,
    selected: Option<Coord2>,
    primary_down: bool,
) -> Result<CellVisual> {
    let cell = grid.cell(coords)?;
    let game_over = grid.is_over();

    let base = match cell.visibility {
        Visibility::Uncovered => Base::Uncovered,
        Visibility::Flagged if selected == Some(coords) && !game_over => Base::Covered,
        _ if selected == Some(coords) && !game_over => {
            if primary_down {
                Base::Uncovered
            } else {
                Base::CoveredHighlighted
            }
        }
        _ => Base::Covered,
    };

    let overlay = if cell.has_flower && game_over {
        Some(Overlay::Flower)
    } else if cell.visibility.is_uncovered() && cell.adjacent_flowers > 0 {
        Some(Overlay::Number(cell.adjacent_flowers))
    } else {
        None
    };

    let mark = match cell.visibility {
        Visibility::Flagged => Some(Mark::Flag),
        Visibility::Questioned => Some(Mark::Question),
        Visibility::Covered | Visibility::Uncovered => None,
    };

    Ok(CellVisual {
        base,
        overlay,
        mark,
    })
}

/// Visuals for every cell in raster order.
pub fn frame<'a>(
    grid: &'a Grid,
    selection: &Selection,
) -> impl Iterator<Item = (Coord2, CellVisual)> + use<'a> {
    let Selection {
        cell: selected,
        primary_down,
        ..
    } = *selection;
    grid.coords().filter_map(move |coords| {
        visual_for(grid, coords, selected, primary_down)
            .ok()
            .map(|visual| (coords, visual))
    })
}
