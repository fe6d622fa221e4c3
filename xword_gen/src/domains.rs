use std::collections::{HashMap, HashSet};

use util::error::{XWordError, XWordResult};

use crate::{slot::Slot, word_bank::WordBank};

/// The candidate words still considered possible for each slot.
///
/// Owned by a single solve. The search clones it before narrowing a branch
/// and puts the clone back when the branch fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains {
  domains: HashMap<Slot, HashSet<String>>,
}

impl Domains {
  /// Every slot starts out with the whole word bank.
  pub fn new<'a>(slots: impl IntoIterator<Item = &'a Slot>, bank: &WordBank) -> Self {
    Self {
      domains: slots
        .into_iter()
        .map(|&slot| (slot, bank.word_set().clone()))
        .collect(),
    }
  }

  fn unknown_slot(slot: &Slot) -> Box<dyn std::error::Error> {
    XWordError::InvalidArgument(format!("No domain for slot {slot}")).into()
  }

  pub fn get(&self, slot: &Slot) -> XWordResult<&HashSet<String>> {
    self
      .domains
      .get(slot)
      .ok_or_else(|| Self::unknown_slot(slot))
  }

  pub(crate) fn get_mut(&mut self, slot: &Slot) -> XWordResult<&mut HashSet<String>> {
    self
      .domains
      .get_mut(slot)
      .ok_or_else(|| Self::unknown_slot(slot))
  }

  /// Shrinks the domain of `slot` to the single candidate `word`.
  pub(crate) fn restrict_to(&mut self, slot: &Slot, word: &str) -> XWordResult {
    let domain = self.get_mut(slot)?;
    domain.clear();
    domain.insert(word.to_owned());
    Ok(())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Slot, &HashSet<String>)> {
    self.domains.iter()
  }

  pub fn any_empty(&self) -> bool {
    self.domains.values().any(HashSet::is_empty)
  }

  /// Drops every candidate whose length differs from its slot's length.
  /// Overlap checks never look at word length, so this has to run before
  /// any arc-consistency pass.
  pub fn enforce_node_consistency(&mut self) {
    for (slot, domain) in self.domains.iter_mut() {
      domain.retain(|word| slot.fits(word));
    }
  }
}
