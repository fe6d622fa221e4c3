use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;
use util::error::XWordResult;

use crate::{slot::Slot, solver::XWordSolver};

impl XWordSolver<'_> {
  /// Removes every candidate whose length does not match its slot.
  pub fn enforce_node_consistency(&mut self) {
    self.domains.enforce_node_consistency();
  }

  /// Makes `x` arc consistent with `y`: drops every word of `x` that no
  /// other word of `y` agrees with at their shared cell. A word never
  /// supports itself, since the finished puzzle cannot use it twice.
  ///
  /// Returns whether the domain of `x` shrank. The domain of `y` is never
  /// touched.
  pub fn revise(&mut self, x: &Slot, y: &Slot) -> XWordResult<bool> {
    let Some((ix, iy)) = self.structure.overlap(x, y)? else {
      return Ok(false);
    };

    let y_domain = self.domains.get(y)?;
    let letter_counts = y_domain.iter().fold(HashMap::new(), |mut counts, wy| {
      if let Some(letter) = wy.chars().nth(iy) {
        *counts.entry(letter).or_insert(0usize) += 1;
      }
      counts
    });

    let unsupported: HashSet<String> = self
      .domains
      .get(x)?
      .iter()
      .filter(|wx| {
        let Some(letter) = wx.chars().nth(ix) else {
          return true;
        };
        let available = letter_counts.get(&letter).cloned().unwrap_or(0);
        let supports_itself = y_domain.contains(*wx) && wx.chars().nth(iy) == Some(letter);
        available <= supports_itself as usize
      })
      .cloned()
      .collect();

    if unsupported.is_empty() {
      return Ok(false);
    }

    trace!("Revising {x} against {y} removes {} words", unsupported.len());
    self
      .domains
      .get_mut(x)?
      .retain(|word| !unsupported.contains(word));
    Ok(true)
  }

  fn all_arcs(&self) -> XWordResult<Vec<(Slot, Slot)>> {
    let mut arcs = Vec::new();
    for &x in self.structure.slots() {
      for &y in self.structure.neighbors(&x)? {
        arcs.push((x, y));
      }
    }
    Ok(arcs)
  }

  /// Runs AC-3 to a fixed point, starting from `arcs` or, when `None`, from
  /// every arc between crossing slots.
  ///
  /// Returns false as soon as a domain becomes empty, true once the queue
  /// drains with every domain still populated.
  pub fn ac3(&mut self, arcs: Option<Vec<(Slot, Slot)>>) -> XWordResult<bool> {
    let structure = self.structure;
    let arcs = match arcs {
      Some(arcs) => arcs,
      None => self.all_arcs()?,
    };

    let mut queued = HashSet::new();
    let mut queue = VecDeque::new();
    for arc in arcs {
      if queued.insert(arc) {
        queue.push_back(arc);
      }
    }

    while let Some((x, y)) = queue.pop_front() {
      queued.remove(&(x, y));
      if !self.revise(&x, &y)? {
        continue;
      }
      if self.domains.get(&x)?.is_empty() {
        trace!("Domain of {x} emptied while revising against {y}");
        return Ok(false);
      }
      for &z in structure.neighbors(&x)? {
        if z != y && queued.insert((z, x)) {
          queue.push_back((z, x));
        }
      }
    }

    Ok(true)
  }
}
