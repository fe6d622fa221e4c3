use std::{cmp::Reverse, collections::HashSet};

use itertools::Itertools;
use util::error::{XWordError, XWordResult};

use crate::{
  assignment::Assignment,
  slot::{letters_agree, Slot},
  solver::XWordSolver,
};

impl XWordSolver<'_> {
  /// The candidates of `slot` not already used elsewhere in `assignment`,
  /// least constraining first: a word's cost is the number of candidates it
  /// would rule out across all unassigned neighbors. Equal costs fall back
  /// to alphabetical order.
  pub fn order_domain_values(
    &self,
    slot: &Slot,
    assignment: &Assignment,
  ) -> XWordResult<Vec<String>> {
    let used: HashSet<&str> = assignment
      .iter()
      .filter(|&(assigned, _)| assigned != slot)
      .map(|(_, word)| word)
      .collect();

    let open_neighbors = self
      .structure
      .neighbors(slot)?
      .iter()
      .filter(|neighbor| !assignment.contains(neighbor))
      .map(|neighbor| -> XWordResult<_> {
        let overlap = self.structure.overlap(slot, neighbor)?.ok_or_else(|| {
          XWordError::Internal(format!("Neighbors {slot} and {neighbor} do not overlap"))
        })?;
        Ok((self.domains.get(neighbor)?, overlap))
      })
      .collect::<XWordResult<Vec<_>>>()?;

    Ok(
      self
        .domains
        .get(slot)?
        .iter()
        .filter(|word| !used.contains(word.as_str()))
        .map(|word| {
          let ruled_out: usize = open_neighbors
            .iter()
            .map(|(neighbor_domain, (i, j))| {
              neighbor_domain
                .iter()
                .filter(|candidate| {
                  !used.contains(candidate.as_str()) && !letters_agree(word, *i, candidate, *j)
                })
                .count()
            })
            .sum();
          (word, ruled_out)
        })
        .sorted_by(|(a_word, a_count), (b_word, b_count)| {
          a_count.cmp(b_count).then_with(|| a_word.cmp(b_word))
        })
        .map(|(word, _)| word.clone())
        .collect(),
    )
  }

  /// The unassigned slot with the fewest remaining candidates. Ties go to
  /// the slot crossing the most unassigned slots, then to the lowest slot in
  /// `(row, col, direction, length)` order. `None` once every slot is
  /// assigned.
  pub fn select_unassigned_slot(&self, assignment: &Assignment) -> XWordResult<Option<Slot>> {
    let candidates = self
      .structure
      .slots()
      .iter()
      .filter(|slot| !assignment.contains(slot))
      .map(|&slot| -> XWordResult<_> {
        let remaining = self.domains.get(&slot)?.len();
        let degree = self
          .structure
          .neighbors(&slot)?
          .iter()
          .filter(|neighbor| !assignment.contains(neighbor))
          .count();
        Ok(((remaining, Reverse(degree)), slot))
      })
      .collect::<XWordResult<Vec<_>>>()?;

    Ok(candidates.into_iter().min().map(|(_, slot)| slot))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use crate::{
    assignment::Assignment,
    slot::{Direction, Slot},
    solver::XWordSolver,
    structure::XWordStructure,
    word_bank::WordBank,
  };

  const ACROSS_3: Slot = Slot::new(0, 1, Direction::Across, 3);
  const DOWN_5: Slot = Slot::new(0, 1, Direction::Down, 5);
  const DOWN_4: Slot = Slot::new(1, 4, Direction::Down, 4);
  const ACROSS_4: Slot = Slot::new(4, 1, Direction::Across, 4);

  fn structure0() -> XWordStructure {
    XWordStructure::from_layout(include_str!("../../data/structure0.txt")).unwrap()
  }

  fn words0() -> WordBank {
    WordBank::parse_word_list(include_str!("../../data/words0.txt"))
  }

  #[gtest]
  fn test_order_domain_values_least_constraining_first() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    // SEVEN and THREE each rule out five crossing candidates, EIGHT rules
    // out all seven.
    let ordered = solver.order_domain_values(&DOWN_5, &Assignment::new()).unwrap();
    expect_that!(ordered, container_eq(["SEVEN", "THREE", "EIGHT"].map(str::to_owned)));
  }

  #[gtest]
  fn test_order_domain_values_is_permutation() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    for &slot in structure.slots() {
      let ordered = solver.order_domain_values(&slot, &Assignment::new()).unwrap();
      let domain = solver.domains().get(&slot).unwrap();
      expect_that!(ordered.len(), eq(domain.len()));
      for word in domain {
        expect_that!(ordered.iter().filter(|&candidate| candidate == word).count(), eq(1));
      }
    }
  }

  #[gtest]
  fn test_order_domain_values_skips_used_words() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    let assignment: Assignment = [(DOWN_4, "NINE")].into_iter().collect();
    let ordered = solver.order_domain_values(&ACROSS_4, &assignment).unwrap();
    expect_that!(ordered, unordered_elements_are![eq("FOUR"), eq("FIVE")]);
  }

  #[gtest]
  fn test_order_domain_values_ignores_assigned_neighbors() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    // With both crossings assigned nothing can be ruled out, so the order
    // is alphabetical.
    let assignment: Assignment = [(ACROSS_3, "SIX"), (ACROSS_4, "NINE")].into_iter().collect();
    let ordered = solver.order_domain_values(&DOWN_5, &assignment).unwrap();
    expect_that!(ordered, container_eq(["EIGHT", "SEVEN", "THREE"].map(str::to_owned)));
  }

  #[gtest]
  fn test_order_domain_values_unknown_slot() {
    let structure = structure0();
    let solver = XWordSolver::new(&structure, &words0());
    expect_that!(
      solver.order_domain_values(&Slot::new(2, 2, Direction::Down, 2), &Assignment::new()),
      err(anything())
    );
  }

  #[gtest]
  fn test_select_minimum_remaining_values() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();
    solver.revise(&DOWN_5, &ACROSS_4).unwrap();

    expect_that!(solver.select_unassigned_slot(&Assignment::new()).unwrap(), some(eq(DOWN_5)));
  }

  #[gtest]
  fn test_select_breaks_ties_by_degree() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    // Every slot but ACROSS_3 has three candidates, so the open degree
    // decides.
    let assignment: Assignment = [(DOWN_4, "FIVE")].into_iter().collect();
    expect_that!(solver.select_unassigned_slot(&assignment).unwrap(), some(eq(DOWN_5)));

    let assignment: Assignment = [(ACROSS_3, "SIX")].into_iter().collect();
    expect_that!(solver.select_unassigned_slot(&assignment).unwrap(), some(eq(ACROSS_4)));
  }

  #[gtest]
  fn test_select_never_returns_assigned_slot() {
    let structure = structure0();
    let mut solver = XWordSolver::new(&structure, &words0());
    solver.enforce_node_consistency();

    let mut assignment = Assignment::new();
    while let Some(slot) = solver.select_unassigned_slot(&assignment).unwrap() {
      expect_false!(assignment.contains(&slot));
      assignment.insert(slot, "PLACEHOLDER".to_owned());
    }
    expect_that!(assignment.len(), eq(4));
  }
}
