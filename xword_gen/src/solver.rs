use std::fmt::Display;

use log::info;
use util::error::XWordResult;

use crate::{
  assignment::Assignment, domains::Domains, structure::XWordStructure, word_bank::WordBank,
};

/// What the search does after committing a slot to a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inference {
  /// Only check the extended assignment for consistency.
  #[default]
  Disabled,
  /// Also narrow the slot's domain to the chosen word and re-establish arc
  /// consistency with its unassigned neighbors, pruning the branch early
  /// when a neighbor runs out of candidates.
  ArcConsistency,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
  pub inference: Inference,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Tentative slot/word extensions tried.
  pub nodes: u64,
  /// Branches abandoned after every candidate failed.
  pub backtracks: u64,
}

impl Display for SearchStats {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} nodes, {} backtracks", self.nodes, self.backtracks)
  }
}

/// One attempt at filling a crossword: the shared structure plus the domain
/// store this attempt narrows as it searches.
pub struct XWordSolver<'a> {
  pub(crate) structure: &'a XWordStructure,
  pub(crate) domains: Domains,
  pub(crate) options: SolveOptions,
  pub(crate) stats: SearchStats,
}

impl<'a> XWordSolver<'a> {
  pub fn new(structure: &'a XWordStructure, words: &WordBank) -> Self {
    Self::with_options(structure, words, SolveOptions::default())
  }

  pub fn with_options(
    structure: &'a XWordStructure,
    words: &WordBank,
    options: SolveOptions,
  ) -> Self {
    Self {
      structure,
      domains: Domains::new(structure.slots(), words),
      options,
      stats: SearchStats::default(),
    }
  }

  pub fn domains(&self) -> &Domains {
    &self.domains
  }

  pub fn stats(&self) -> SearchStats {
    self.stats
  }

  /// Enforces node and arc consistency, then searches for a complete
  /// assignment. `None` means the puzzle has no solution with this word
  /// list.
  pub fn solve(&mut self) -> XWordResult<Option<Assignment>> {
    self.enforce_node_consistency();
    if self.domains.any_empty() {
      info!("A slot has no word of its length, no solution");
      return Ok(None);
    }
    if !self.ac3(None)? {
      info!("Arc consistency emptied a domain, no solution");
      return Ok(None);
    }

    let result = self.backtrack(Assignment::new())?;
    match &result {
      Some(_) => info!("Solved after {}", self.stats),
      None => info!("Search space exhausted after {}", self.stats),
    }
    Ok(result)
  }
}

/// Fills `structure` from `words` with the default options.
pub fn solve(structure: &XWordStructure, words: &WordBank) -> XWordResult<Option<Assignment>> {
  XWordSolver::new(structure, words).solve()
}

/// Fills `structure` from `words`.
pub fn solve_with_options(
  structure: &XWordStructure,
  words: &WordBank,
  options: SolveOptions,
) -> XWordResult<Option<Assignment>> {
  XWordSolver::with_options(structure, words, options).solve()
}
