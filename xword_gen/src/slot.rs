use std::fmt::Display;

use util::pos::{Diff, Pos};

/// Orientation of a slot. Across sorts before down.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  /// Offset from one letter of a slot to the next.
  pub const fn step(&self) -> Diff {
    match self {
      Direction::Across => Diff::DX,
      Direction::Down => Diff::DY,
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Direction::Across => "across",
        Direction::Down => "down",
      }
    )
  }
}

/// A maximal run of fillable cells in one direction, identified by its first
/// cell, its direction and its length.
///
/// Slots order by `(row, col, direction, length)`, which is also the final
/// tie-break used when choosing the next slot to fill.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slot {
  row: u32,
  col: u32,
  direction: Direction,
  length: u32,
}

impl Slot {
  pub const fn new(row: u32, col: u32, direction: Direction, length: u32) -> Self {
    Self { row, col, direction, length }
  }

  pub const fn row(&self) -> u32 {
    self.row
  }

  pub const fn col(&self) -> u32 {
    self.col
  }

  pub const fn direction(&self) -> Direction {
    self.direction
  }

  pub const fn length(&self) -> u32 {
    self.length
  }

  pub const fn start(&self) -> Pos {
    Pos::from_row_col(self.row, self.col)
  }

  /// The cells covered by this slot, in word order.
  pub fn cells(&self) -> impl Iterator<Item = Pos> {
    let start = self.start();
    let step = self.direction.step();
    (0..self.length as i32).map(move |idx| start + idx * step)
  }

  /// Whether `word` has exactly as many letters as this slot has cells.
  pub fn fits(&self, word: &str) -> bool {
    word.chars().count() == self.length as usize
  }
}

impl Display for Slot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "({}, {}) {} {}",
      self.row, self.col, self.direction, self.length
    )
  }
}

/// Whether `wx` and `wy` carry the same letter at `ix` and `iy` respectively.
/// A position past the end of either word never agrees.
pub(crate) fn letters_agree(wx: &str, ix: usize, wy: &str, iy: usize) -> bool {
  match (wx.chars().nth(ix), wy.chars().nth(iy)) {
    (Some(cx), Some(cy)) => cx == cy,
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;
  use util::pos::Pos;

  use super::{letters_agree, Direction, Slot};

  #[gtest]
  fn test_cells_across() {
    let slot = Slot::new(2, 1, Direction::Across, 3);
    expect_that!(
      slot.cells().collect::<Vec<_>>(),
      container_eq([
        Pos::from_row_col(2, 1),
        Pos::from_row_col(2, 2),
        Pos::from_row_col(2, 3)
      ])
    );
  }

  #[gtest]
  fn test_cells_down() {
    let slot = Slot::new(0, 4, Direction::Down, 2);
    expect_that!(
      slot.cells().collect::<Vec<_>>(),
      container_eq([Pos::from_row_col(0, 4), Pos::from_row_col(1, 4)])
    );
  }

  #[gtest]
  fn test_identity() {
    expect_that!(
      Slot::new(0, 1, Direction::Down, 5),
      eq(Slot::new(0, 1, Direction::Down, 5))
    );
    expect_that!(
      Slot::new(0, 1, Direction::Down, 5),
      not(eq(Slot::new(0, 1, Direction::Across, 5)))
    );
    expect_that!(
      Slot::new(0, 1, Direction::Down, 5),
      not(eq(Slot::new(0, 1, Direction::Down, 4)))
    );
  }

  #[gtest]
  fn test_ordering() {
    expect_true!(Slot::new(0, 1, Direction::Across, 3) < Slot::new(0, 1, Direction::Down, 5));
    expect_true!(Slot::new(0, 4, Direction::Down, 2) < Slot::new(1, 0, Direction::Across, 2));
  }

  #[gtest]
  fn test_fits() {
    let slot = Slot::new(0, 0, Direction::Across, 3);
    expect_true!(slot.fits("SIX"));
    expect_false!(slot.fits("SEVEN"));
    expect_false!(slot.fits(""));
  }

  #[gtest]
  fn test_letters_agree() {
    expect_true!(letters_agree("SIX", 0, "SEVEN", 0));
    expect_false!(letters_agree("SIX", 1, "SEVEN", 1));
    expect_false!(letters_agree("SIX", 5, "SEVEN", 5));
  }

  #[gtest]
  fn test_display() {
    expect_that!(
      Slot::new(4, 1, Direction::Across, 4).to_string(),
      eq("(4, 1) across 4")
    );
  }
}
