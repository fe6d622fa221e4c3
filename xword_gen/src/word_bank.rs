use std::collections::HashSet;

/// The vocabulary every slot draws its candidates from. Words are stored
/// upper-cased and without surrounding whitespace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
  word_set: HashSet<String>,
}

impl WordBank {
  fn canonicalize_word(word: &str) -> String {
    word.trim().to_uppercase()
  }

  pub fn from_words<S>(words: impl IntoIterator<Item = S>) -> Self
  where
    S: AsRef<str>,
  {
    let word_set = words
      .into_iter()
      .map(|word| Self::canonicalize_word(word.as_ref()))
      .filter(|word| !word.is_empty())
      .collect();
    Self { word_set }
  }

  /// Parses a word list with one word per line. Blank lines are skipped and
  /// duplicate words collapse into one entry. A line with inner whitespace
  /// is kept as is and only ever fits a slot of its full length.
  pub fn parse_word_list(text: &str) -> Self {
    Self::from_words(text.lines())
  }

  pub fn len(&self) -> usize {
    self.word_set.len()
  }

  pub fn is_empty(&self) -> bool {
    self.word_set.is_empty()
  }

  pub fn word_set(&self) -> &HashSet<String> {
    &self.word_set
  }
}
