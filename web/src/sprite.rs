use flowers_core::{Coord2, Sprite};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// Side of one square cell, on screen and in the sheet.
pub(crate) const CELL_SIZE: f64 = 18.;

const SHEET_URL: &str = "sprite.png";

/// Top-left corner of `sprite` in the sheet, past the 1px border.
///
/// The first row holds the cell images, the second row holds numbers 1 to 8.
pub(crate) fn source_origin(sprite: Sprite) -> (f64, f64) {
    let column = |index: u8| f64::from(index) * CELL_SIZE + 1.;
    match sprite {
        Sprite::Covered => (column(0), 1.),
        Sprite::CoveredHighlighted => (column(1), 1.),
        Sprite::Uncovered => (column(2), 1.),
        Sprite::Flower => (column(3), 1.),
        Sprite::Flag => (column(4), 1.),
        Sprite::Question => (column(5), 1.),
        Sprite::Number(count) => (column(count.saturating_sub(1)), CELL_SIZE + 1.),
    }
}

/// Screen position of a 1-indexed cell on the canvas.
pub(crate) fn target_origin((x, y): Coord2) -> (f64, f64) {
    (
        f64::from(x - 1) * CELL_SIZE,
        f64::from(y - 1) * CELL_SIZE,
    )
}

#[derive(Debug)]
pub(crate) struct SpriteSheet {
    image: HtmlImageElement,
}

impl SpriteSheet {
    /// Starts loading the sheet, wait for the image `load` event before drawing.
    pub(crate) fn load() -> Result<Self, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(SHEET_URL);
        Ok(Self { image })
    }

    pub(crate) fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.image.complete() && self.image.natural_width() > 0
    }

    pub(crate) fn draw(
        &self,
        ctx: &CanvasRenderingContext2d,
        sprite: Sprite,
        coords: Coord2,
    ) -> Result<(), JsValue> {
        let (sx, sy) = source_origin(sprite);
        let (dx, dy) = target_origin(coords);
        ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &self.image,
            sx,
            sy,
            CELL_SIZE,
            CELL_SIZE,
            dx,
            dy,
            CELL_SIZE,
            CELL_SIZE,
        )
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn sheet_points_at_sprite_png() {
        let sheet = SpriteSheet::load().unwrap();
        assert!(sheet.image().src().ends_with(SHEET_URL));
    }
}
