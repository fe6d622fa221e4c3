use std::collections::HashMap;

use util::{
  error::{XWordError, XWordResult},
  grid::Grid,
};

use crate::{slot::Slot, structure::XWordStructure};

/// Words chosen for some (or all) slots of a crossword.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
  words: HashMap<Slot, String>,
}

impl Assignment {
  pub fn new() -> Self {
    Self::default()
  }

  /// Assigns `word` to `slot`, returning the word it replaces.
  pub fn insert(&mut self, slot: Slot, word: String) -> Option<String> {
    self.words.insert(slot, word)
  }

  pub fn remove(&mut self, slot: &Slot) -> Option<String> {
    self.words.remove(slot)
  }

  pub fn get(&self, slot: &Slot) -> Option<&str> {
    self.words.get(slot).map(|word| word.as_str())
  }

  pub fn contains(&self, slot: &Slot) -> bool {
    self.words.contains_key(slot)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
    self.words.iter().map(|(slot, word)| (slot, word.as_str()))
  }

  pub fn slots(&self) -> impl Iterator<Item = &Slot> {
    self.words.keys()
  }

  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.values().map(|word| word.as_str())
  }

  /// Lays the assigned words out on the board. Cells no assigned slot
  /// covers are `None`.
  pub fn letter_grid(&self, structure: &XWordStructure) -> XWordResult<Grid<Option<char>>> {
    let mut letters = Grid::new(structure.width(), structure.height());
    for (slot, word) in self.iter() {
      structure.check_slot(slot)?;
      for (c, pos) in word.chars().zip(slot.cells()) {
        let tile = letters.get_mut(pos).ok_or_else(|| {
          XWordError::Internal(format!("Position {pos} is out of bounds"))
        })?;
        match tile {
          Some(existing_c) => {
            if c != *existing_c {
              return Err(
                XWordError::Internal(format!(
                  "Conflicting letter assignment at position {pos}: {c} vs {existing_c}"
                ))
                .into(),
              );
            }
          }
          None => *tile = Some(c),
        }
      }
    }

    Ok(letters)
  }
}

impl<S> FromIterator<(Slot, S)> for Assignment
where
  S: Into<String>,
{
  fn from_iter<T: IntoIterator<Item = (Slot, S)>>(iter: T) -> Self {
    Self {
      words: iter
        .into_iter()
        .map(|(slot, word)| (slot, word.into()))
        .collect(),
    }
  }
}
