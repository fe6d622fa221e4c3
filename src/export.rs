use std::{fs, io, path::Path};

use ab_glyph::{point, Font, FontVec};
use image::{Rgba, RgbaImage};
use log::{info, warn};
use util::{
  error::XWordResult,
  grid::{Grid, Gridlike},
  pos::Pos,
};
use xword_gen::XWordStructure;

pub const CELL_SIZE: u32 = 100;
const CELL_BORDER: u32 = 2;
const INTERIOR_SIZE: u32 = CELL_SIZE - 2 * CELL_BORDER;
const FONT_SIZE: f32 = 80.0;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Reads the font letters are drawn with. A missing file is not an error:
/// the grid is then saved without letters.
pub fn load_font(path: &Path) -> XWordResult<Option<FontVec>> {
  match fs::read(path) {
    Ok(data) => Ok(Some(FontVec::try_from_vec(data)?)),
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      warn!("Font {} not found, drawing the grid without letters", path.display());
      Ok(None)
    }
    Err(err) => Err(err.into()),
  }
}

/// Draws the grid on a black canvas, one `CELL_SIZE` square per cell. Open
/// cells are white squares inset by the border, with their letter centered.
pub fn draw(
  structure: &XWordStructure,
  letters: &Grid<Option<char>>,
  font: Option<&FontVec>,
) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(
    structure.width() * CELL_SIZE,
    structure.height() * CELL_SIZE,
    BLACK,
  );

  for row in 0..structure.height() {
    for col in 0..structure.width() {
      if !structure.is_fillable(row, col) {
        continue;
      }

      let left = col * CELL_SIZE + CELL_BORDER;
      let top = row * CELL_SIZE + CELL_BORDER;
      for y in top..top + INTERIOR_SIZE {
        for x in left..left + INTERIOR_SIZE {
          image.put_pixel(x, y, WHITE);
        }
      }

      let letter = letters.get(Pos::from_row_col(row, col)).cloned().flatten();
      if let (Some(font), Some(letter)) = (font, letter) {
        draw_letter(&mut image, font, letter, left, top);
      }
    }
  }

  image
}

fn draw_letter(image: &mut RgbaImage, font: &FontVec, letter: char, left: u32, top: u32) {
  let glyph = font
    .glyph_id(letter)
    .with_scale_and_position(FONT_SIZE, point(0.0, 0.0));
  let Some(outline) = font.outline_glyph(glyph) else {
    return;
  };

  let bounds = outline.px_bounds();
  let x0 = (left as f32 + (INTERIOR_SIZE as f32 - bounds.width()) / 2.0).max(0.0) as u32;
  let y0 = (top as f32 + (INTERIOR_SIZE as f32 - bounds.height()) / 2.0).max(0.0) as u32;
  outline.draw(|x, y, coverage| {
    let (px, py) = (x0 + x, y0 + y);
    if px >= image.width() || py >= image.height() {
      return;
    }
    let shade = (255.0 * (1.0 - coverage.clamp(0.0, 1.0))) as u8;
    let pixel = image.get_pixel_mut(px, py);
    let value = pixel.0[0].min(shade);
    *pixel = Rgba([value, value, value, 255]);
  });
}

/// Saves the drawn grid to `path`, as a PNG.
pub fn save_image(
  path: &Path,
  structure: &XWordStructure,
  letters: &Grid<Option<char>>,
  font: Option<&FontVec>,
) -> XWordResult {
  draw(structure, letters, font).save(path)?;
  info!("Saved image to {}", path.display());
  Ok(())
}
