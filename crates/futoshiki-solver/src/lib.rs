//! Backtracking solver for Futoshiki boards.
//!
//! The solver answers two questions about a [`Board`](futoshiki_core::Board):
//! does a legal total assignment exist, and what is one such assignment. Both
//! are served by the same chronological backtracking search; an optional RNG
//! shuffles the candidate order, which is what turns "find a solution" into
//! "generate a random solution" for the puzzle generator.

pub use self::backtrack::*;

mod backtrack;
