#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Crossword filling as a constraint satisfaction problem: node and arc
//! consistency over per-slot word domains, followed by backtracking search
//! guided by the minimum-remaining-values, degree and least-constraining-value
//! heuristics.

pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod heuristics;
pub mod search;
pub mod slot;
pub mod solver;
pub mod structure;
pub mod word_bank;

pub use assignment::Assignment;
pub use slot::{Direction, Slot};
pub use solver::{solve, solve_with_options, Inference, SearchStats, SolveOptions, XWordSolver};
pub use structure::XWordStructure;
pub use word_bank::WordBank;
