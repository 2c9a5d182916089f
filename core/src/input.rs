use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Enter,
    Move,
    Press,
    Release,
    ContextMenu,
    Leave,
}

impl PointerKind {
    /// Continuous samples only matter when they move the selection
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Enter | Self::Move)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value
    pub const fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

bitflags! {
    /// Buttons held while a sample was taken, laid out like DOM `MouseEvent.buttons`
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PointerButtons: u16 {
        const PRIMARY   = 1;
        const SECONDARY = 1 << 1;
        const MIDDLE    = 1 << 2;
        const BACK      = 1 << 3;
        const FORWARD   = 1 << 4;
    }
}

/// One raw pointer event as reported by the platform, in client pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
    /// Button that changed state, for presses and releases
    pub button: Option<PointerButton>,
    /// Buttons still held once this sample happened
    pub buttons: PointerButtons,
}

/// Top-left corner of the drawing surface, in the same space as the samples.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

/// Which cell the pointer is over and what it last did there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub cell: Option<Coord2>,
    pub last_kind: Option<PointerKind>,
    pub last_button: Option<PointerButton>,
    pub primary_down: bool,
}

/// Turns pointer samples into a selection and game actions.
#[derive(Clone, Debug, PartialEq)]
pub struct InputReducer {
    size: Coord2,
    cell_size: f64,
    selection: Selection,
}

impl InputReducer {
    pub fn new(size: Coord2, cell_size: f64) -> Self {
        Self {
            size,
            cell_size,
            selection: Selection::default(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cell under a client position, clamped onto the grid.
    pub fn locate(&self, x: f64, y: f64, rect: SurfaceRect) -> Coord2 {
        (
            clamp_axis(x - rect.left, self.cell_size, self.size.0),
            clamp_axis(y - rect.top, self.cell_size, self.size.1),
        )
    }

    /// Applies one sample and reports whether anything needs to be redrawn.
    ///
    /// Releases dispatch their action on the cell under the pointer before
    /// returning, so the caller always draws a settled state.
    pub fn reduce<P: FlowerPlacer>(
        &mut self,
        game: &mut Game<P>,
        sample: PointerSample,
        rect: SurfaceRect,
    ) -> Result<bool> {
        self.selection.last_kind = Some(sample.kind);
        if sample.button.is_some() {
            self.selection.last_button = sample.button;
        }
        if matches!(sample.kind, PointerKind::Leave) {
            log::trace!("pointer left the surface");
            self.selection.cell = None;
            self.selection.primary_down = false;
            return Ok(true);
        }

        let cell = self.locate(sample.x, sample.y, rect);
        let moved = self.selection.cell.replace(cell) != Some(cell);
        self.selection.primary_down = sample.buttons.contains(PointerButtons::PRIMARY);
        log::trace!("pointer {:?} at {:?}", sample, cell);

        match (sample.kind, sample.button) {
            (PointerKind::Release, Some(PointerButton::Primary)) => {
                log::debug!("primary release at {:?}", cell);
                game.primary(cell)?;
            }
            (PointerKind::Release, Some(PointerButton::Secondary)) => {
                log::debug!("secondary release at {:?}", cell);
                game.secondary(cell)?;
            }
            _ => {}
        }

        Ok(!sample.kind.is_continuous() || moved)
    }
}

fn clamp_axis(offset: f64, cell_size: f64, max: Coord) -> Coord {
    let scaled = offset / cell_size;
    // `as` truncates toward zero and saturates, NaN becomes 0
    let mut index = scaled as i64;
    if (index as f64) > scaled {
        index = index.saturating_sub(1);
    }
    index.saturating_add(1).clamp(1, i64::from(max)) as Coord
}
