//! Futoshiki puzzle generation.
//!
//! The generator manufactures a playable [`Board`](futoshiki_core::Board) for
//! a requested size and [`Difficulty`]:
//!
//! 1. a randomized backtracking fill produces a complete solution grid
//!    (row/column uniqueness only);
//! 2. the ordering of every adjacent pair is derived from that solution;
//! 3. difficulty decides how many givens and how many relations survive;
//! 4. givens and relations are sampled from the solution;
//! 5. the carved puzzle must pass the solver's existence check, otherwise the
//!    whole attempt is redone with fresh randomness, up to a bounded budget.
//!
//! Every run is reproducible: the PRNG state is derived from a [`PuzzleSeed`]
//! that is returned with the puzzle and printable as 64 hex characters.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::Size;
//! use futoshiki_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(Size::new(5)?, Difficulty::Medium);
//! let puzzle = generator.generate()?;
//! println!("{}", puzzle.problem);
//! println!("seed: {}", puzzle.seed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{difficulty::*, generator::*, seed::*};

mod difficulty;
mod generator;
mod seed;
