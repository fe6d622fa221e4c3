use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum XWordError {
  /// A broken invariant inside the solver or its collaborators.
  Internal(String),
  /// Structure or word-list text that could not be understood.
  Parse(String),
  /// A caller handed the solver something it does not know about, e.g. a
  /// slot that is not part of the grid.
  InvalidArgument(String),
}

impl Display for XWordError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      XWordError::Internal(msg) => write!(f, "Internal error: {msg}"),
      XWordError::Parse(msg) => write!(f, "Parse error: {msg}"),
      XWordError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
    }
  }
}

impl Error for XWordError {}

pub type XWordResult<T = ()> = Result<T, Box<dyn Error>>;
