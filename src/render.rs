use itertools::Itertools;
use util::{
  grid::{Grid, Gridlike},
  pos::Pos,
};
use xword_gen::XWordStructure;

const BLOCKED: char = '█';

/// Draws a (possibly partial) fill as text: letters where assigned, a space
/// for open cells without a letter, a full block for blocked cells.
pub fn render(structure: &XWordStructure, letters: &Grid<Option<char>>) -> String {
  (0..structure.height())
    .map(|row| {
      (0..structure.width())
        .map(|col| {
          if !structure.is_fillable(row, col) {
            BLOCKED
          } else {
            letters
              .get(Pos::from_row_col(row, col))
              .cloned()
              .flatten()
              .unwrap_or(' ')
          }
        })
        .collect::<String>()
    })
    .map(|line| line + "\n")
    .join("")
}
