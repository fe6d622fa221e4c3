use std::collections::HashSet;

use log::debug;
use util::error::{XWordError, XWordResult};

use crate::{
  assignment::Assignment,
  slot::{letters_agree, Slot},
  solver::{Inference, XWordSolver},
};

impl XWordSolver<'_> {
  /// Whether every slot of the grid has a word.
  pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
    let slots = self.structure.slots();
    assignment.len() == slots.len() && slots.iter().all(|slot| assignment.contains(slot))
  }

  /// Whether the assigned words are pairwise distinct and agree wherever
  /// two assigned slots cross. Word lengths are left to node consistency.
  pub fn consistent(&self, assignment: &Assignment) -> XWordResult<bool> {
    for slot in assignment.slots() {
      self.structure.check_slot(slot)?;
    }

    if assignment.words().collect::<HashSet<_>>().len() != assignment.len() {
      return Ok(false);
    }

    for (x, wx) in assignment.iter() {
      for y in self.structure.neighbors(x)? {
        let Some(wy) = assignment.get(y) else {
          continue;
        };
        let (ix, iy) = self.structure.overlap(x, y)?.ok_or_else(|| {
          XWordError::Internal(format!("Neighbors {x} and {y} do not overlap"))
        })?;
        if !letters_agree(wx, ix, wy, iy) {
          return Ok(false);
        }
      }
    }

    Ok(true)
  }

  /// Extends `assignment` to a complete, consistent assignment by depth
  /// first search, or returns `None` if no extension exists.
  pub fn backtrack(&mut self, assignment: Assignment) -> XWordResult<Option<Assignment>> {
    let mut assignment = assignment;
    Ok(self.search(&mut assignment)?.then_some(assignment))
  }

  /// Returns true with `assignment` complete on success. On failure
  /// `assignment` and the domains are left as they were on entry.
  fn search(&mut self, assignment: &mut Assignment) -> XWordResult<bool> {
    if self.assignment_complete(assignment) {
      return Ok(true);
    }
    let Some(slot) = self.select_unassigned_slot(assignment)? else {
      return Ok(false);
    };

    for word in self.order_domain_values(&slot, assignment)? {
      self.stats.nodes += 1;
      assignment.insert(slot, word.clone());
      if self.consistent(assignment)? && self.descend(slot, &word, assignment)? {
        return Ok(true);
      }
      assignment.remove(&slot);
    }

    debug!("Exhausted {slot} at depth {}", assignment.len());
    self.stats.backtracks += 1;
    Ok(false)
  }

  /// Searches below the consistent extension `slot -> word`, running
  /// inference first when enabled.
  fn descend(
    &mut self,
    slot: Slot,
    word: &str,
    assignment: &mut Assignment,
  ) -> XWordResult<bool> {
    match self.options.inference {
      Inference::Disabled => self.search(assignment),
      Inference::ArcConsistency => {
        let snapshot = self.domains.clone();
        if self.infer(slot, word, assignment)? && self.search(assignment)? {
          return Ok(true);
        }
        self.domains = snapshot;
        Ok(false)
      }
    }
  }

  /// Commits the domain of `slot` to `word` and restores arc consistency
  /// with its unassigned neighbors.
  fn infer(&mut self, slot: Slot, word: &str, assignment: &Assignment) -> XWordResult<bool> {
    self.domains.restrict_to(&slot, word)?;
    let arcs = self
      .structure
      .neighbors(&slot)?
      .iter()
      .filter(|neighbor| !assignment.contains(neighbor))
      .map(|&neighbor| (neighbor, slot))
      .collect();

    let consistent = self.ac3(Some(arcs))?;
    if !consistent {
      debug!("Inference rules out {word} for {slot}");
    }
    Ok(consistent)
  }
}
