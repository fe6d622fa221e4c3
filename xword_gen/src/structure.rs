use std::collections::{BTreeSet, HashMap};

use util::{
  error::{XWordError, XWordResult},
  grid::{Grid, Gridlike},
  pos::Pos,
};

use crate::slot::{Direction, Slot};

/// Index into the first slot's word and index into the second slot's word
/// of the cell two crossing slots share.
pub type Overlap = (usize, usize);

/// The fixed shape of a crossword: which cells take letters, the slots those
/// cells form, and how the slots cross.
///
/// Built once and read-only afterwards.
#[derive(Clone, Debug)]
pub struct XWordStructure {
  board: Grid<bool>,
  slots: BTreeSet<Slot>,
  overlaps: HashMap<(Slot, Slot), Overlap>,
  neighbors: HashMap<Slot, Vec<Slot>>,
}

/// Maximal runs of `true` in a sequence of cells, as `(start, length)`.
struct FillableRuns<I> {
  idx: u32,
  iter: Option<I>,
}

impl<I> Iterator for FillableRuns<I>
where
  I: Iterator<Item = bool>,
{
  type Item = (u32, u32);

  fn next(&mut self) -> Option<(u32, u32)> {
    let iter = self.iter.as_mut()?;

    loop {
      self.idx += 1;
      match iter.next() {
        Some(true) => break,
        Some(false) => {}
        None => {
          self.iter = None;
          return None;
        }
      }
    }
    let start = self.idx - 1;
    let mut length = 1;

    loop {
      self.idx += 1;
      match iter.next() {
        Some(true) => length += 1,
        Some(false) => break,
        None => {
          self.iter = None;
          break;
        }
      }
    }

    Some((start, length))
  }
}

impl XWordStructure {
  /// Parses a layout with one line per row. `_` marks a fillable cell and
  /// any other character, whitespace included, a blocked one. A blank line
  /// is a fully blocked row, and rows shorter than the longest row are
  /// padded with blocked cells.
  pub fn from_layout(layout: &str) -> XWordResult<Self> {
    let rows: Vec<Vec<bool>> = layout
      .lines()
      .map(|line| line.chars().map(|c| c == '_').collect())
      .collect();
    if rows.is_empty() {
      return Err(XWordError::Parse("Empty structure string".to_owned()).into());
    }

    Ok(Self::from_board(Grid::from_ragged_rows(rows, false)?))
  }

  pub fn from_board(board: Grid<bool>) -> Self {
    let slots: BTreeSet<_> = Self::board_row_runs(&board)
      .map(|(y, x, length)| Slot::new(y, x, Direction::Across, length))
      .chain(
        Self::board_row_runs(board.transpose())
          .map(|(x, y, length)| Slot::new(y, x, Direction::Down, length)),
      )
      .filter(|slot| slot.length() > 1)
      .collect();

    let overlaps = Self::build_overlaps(&slots);
    let neighbors = slots
      .iter()
      .map(|&slot| {
        let crossing: Vec<_> = slots
          .iter()
          .filter(|&&other| overlaps.contains_key(&(slot, other)))
          .cloned()
          .collect();
        (slot, crossing)
      })
      .collect();

    Self { board, slots, overlaps, neighbors }
  }

  /// Every run of fillable cells in each row of `board`, as
  /// `(row, start column, length)`.
  fn board_row_runs<'a, G: Gridlike<bool> + 'a>(
    board: G,
  ) -> impl Iterator<Item = (u32, u32, u32)> + 'a {
    (0..board.height()).flat_map(move |y| {
      FillableRuns { idx: 0, iter: Some(board.iter_row(y).cloned()) }
        .map(|(x, length)| (y, x, length))
        .collect::<Vec<_>>()
    })
  }

  fn build_overlaps(slots: &BTreeSet<Slot>) -> HashMap<(Slot, Slot), Overlap> {
    let cell_map = slots.iter().fold(
      HashMap::<Pos, Vec<(Slot, usize)>>::new(),
      |mut cell_map, &slot| {
        for (idx, pos) in slot.cells().enumerate() {
          cell_map.entry(pos).or_default().push((slot, idx));
        }
        cell_map
      },
    );

    cell_map
      .values()
      .flat_map(|occupants| {
        occupants.iter().flat_map(move |&(x, ix)| {
          occupants
            .iter()
            .filter(move |&&(y, _)| y != x)
            .map(move |&(y, iy)| ((x, y), (ix, iy)))
        })
      })
      .collect()
  }

  pub fn width(&self) -> u32 {
    self.board.width()
  }

  pub fn height(&self) -> u32 {
    self.board.height()
  }

  /// Whether the cell at `(row, col)` takes a letter. Out-of-range cells
  /// are blocked.
  pub fn is_fillable(&self, row: u32, col: u32) -> bool {
    self
      .board
      .get(Pos::from_row_col(row, col))
      .is_some_and(|&fillable| fillable)
  }

  pub fn slots(&self) -> &BTreeSet<Slot> {
    &self.slots
  }

  pub fn contains(&self, slot: &Slot) -> bool {
    self.slots.contains(slot)
  }

  pub fn check_slot(&self, slot: &Slot) -> XWordResult {
    if self.contains(slot) {
      Ok(())
    } else {
      Err(XWordError::InvalidArgument(format!("Slot {slot} is not part of the grid")).into())
    }
  }

  /// Where `x` and `y` cross, if they do.
  pub fn overlap(&self, x: &Slot, y: &Slot) -> XWordResult<Option<Overlap>> {
    self.check_slot(x)?;
    self.check_slot(y)?;
    Ok(self.overlaps.get(&(*x, *y)).cloned())
  }

  /// All slots crossing `slot`, in slot order.
  pub fn neighbors(&self, slot: &Slot) -> XWordResult<&[Slot]> {
    self
      .neighbors
      .get(slot)
      .map(Vec::as_slice)
      .ok_or_else(|| XWordError::InvalidArgument(format!("Slot {slot} is not part of the grid")).into())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use crate::slot::{Direction, Slot};

  use super::{FillableRuns, XWordStructure};

  const ACROSS_3: Slot = Slot::new(0, 1, Direction::Across, 3);
  const DOWN_5: Slot = Slot::new(0, 1, Direction::Down, 5);
  const DOWN_4: Slot = Slot::new(1, 4, Direction::Down, 4);
  const ACROSS_4: Slot = Slot::new(4, 1, Direction::Across, 4);

  fn structure0() -> XWordStructure {
    XWordStructure::from_layout(include_str!("../../data/structure0.txt")).unwrap()
  }

  #[gtest]
  fn test_empty() {
    expect_that!(XWordStructure::from_layout(""), err(anything()));
    expect_that!(XWordStructure::from_layout("\n\n"), err(anything()));
  }

  #[gtest]
  fn test_whitespace_rows_are_blocked() {
    let structure = XWordStructure::from_layout("\n  \n").unwrap();
    expect_that!(structure.height(), eq(2));
    expect_that!(structure.width(), eq(2));
    expect_true!(structure.slots().is_empty());
  }

  #[gtest]
  fn test_blank_line_splits_columns() {
    let structure = XWordStructure::from_layout("_\n\n_").unwrap();
    expect_that!(structure.height(), eq(3));
    expect_that!(structure.width(), eq(1));
    expect_false!(structure.is_fillable(1, 0));
    expect_true!(structure.slots().is_empty());
  }

  #[gtest]
  fn test_leading_space_is_blocked() {
    let structure = XWordStructure::from_layout(" __\n___\r\n").unwrap();
    expect_that!(structure.width(), eq(3));
    expect_false!(structure.is_fillable(0, 0));
    expect_that!(
      structure.slots().iter().cloned().collect::<Vec<_>>(),
      container_eq([
        Slot::new(0, 1, Direction::Across, 2),
        Slot::new(0, 1, Direction::Down, 2),
        Slot::new(0, 2, Direction::Down, 2),
        Slot::new(1, 0, Direction::Across, 3),
      ])
    );
  }

  #[gtest]
  fn test_runs() {
    let runs = FillableRuns {
      idx: 0,
      iter: Some([false, true, true, false, true, false, true, true, true].into_iter()),
    };
    expect_that!(runs.collect::<Vec<_>>(), container_eq([(1, 2), (4, 1), (6, 3)]));
  }

  #[gtest]
  fn test_dimensions() {
    let structure = structure0();
    expect_that!(structure.height(), eq(5));
    expect_that!(structure.width(), eq(6));
    expect_false!(structure.is_fillable(0, 0));
    expect_true!(structure.is_fillable(0, 1));
    expect_true!(structure.is_fillable(4, 4));
    expect_false!(structure.is_fillable(4, 5));
    expect_false!(structure.is_fillable(9, 9));
  }

  #[gtest]
  fn test_ragged_layout() {
    let structure = XWordStructure::from_layout("___\n_").unwrap();
    expect_that!(structure.width(), eq(3));
    expect_false!(structure.is_fillable(1, 1));
    expect_that!(
      structure.slots().iter().cloned().collect::<Vec<_>>(),
      container_eq([
        Slot::new(0, 0, Direction::Across, 3),
        Slot::new(0, 0, Direction::Down, 2),
      ])
    );
  }

  #[gtest]
  fn test_slots() {
    let structure = structure0();
    expect_that!(
      structure.slots().iter().cloned().collect::<Vec<_>>(),
      container_eq([ACROSS_3, DOWN_5, DOWN_4, ACROSS_4])
    );
  }

  #[gtest]
  fn test_overlaps() {
    let structure = structure0();
    expect_that!(structure.overlap(&ACROSS_3, &DOWN_5).unwrap(), some(eq((0, 0))));
    expect_that!(structure.overlap(&DOWN_5, &ACROSS_4).unwrap(), some(eq((4, 0))));
    expect_that!(structure.overlap(&ACROSS_4, &DOWN_5).unwrap(), some(eq((0, 4))));
    expect_that!(structure.overlap(&DOWN_4, &ACROSS_4).unwrap(), some(eq((3, 3))));
    expect_that!(structure.overlap(&ACROSS_3, &DOWN_4).unwrap(), none());
    expect_that!(structure.overlap(&ACROSS_3, &ACROSS_3).unwrap(), none());
  }

  #[gtest]
  fn test_neighbors() {
    let structure = structure0();
    expect_that!(structure.neighbors(&ACROSS_3).unwrap().to_vec(), container_eq([DOWN_5]));
    expect_that!(structure.neighbors(&DOWN_5).unwrap().to_vec(), container_eq([ACROSS_3, ACROSS_4]));
    expect_that!(structure.neighbors(&ACROSS_4).unwrap().to_vec(), container_eq([DOWN_5, DOWN_4]));
  }

  #[gtest]
  fn test_unknown_slot() {
    let structure = structure0();
    let stray = Slot::new(2, 2, Direction::Across, 2);
    expect_that!(
      structure.overlap(&stray, &DOWN_5),
      err(displays_as(contains_substring("Invalid argument")))
    );
    expect_that!(structure.neighbors(&stray), err(anything()));
    expect_that!(structure.check_slot(&DOWN_4), ok(anything()));
  }
}
