//! Core data model for Futoshiki puzzles.
//!
//! A Futoshiki board is an N×N grid (N in 3-10) where every row and column
//! must contain each value `1..=N` exactly once, and a sparse set of strict
//! ordering constraints between grid-adjacent cells must hold.
//!
//! # Types
//!
//! - [`Size`] — validated grid size
//! - [`Value`] — cell value, `1..=10`; empty cells are `Option::None`
//! - [`Position`] — zero-based cell coordinate
//! - [`Relation`] / [`Axis`] — an ordering constraint and its orientation
//! - [`Cell`] — one board slot: value, givenness, outgoing relations
//! - [`Board`] — the grid itself, owning all legality queries
//!
//! # Validation
//!
//! [`Board::check_value`] is the single validation path for placements: it is
//! used verbatim by the play-time move validator and re-run by the committing
//! setter [`Board::set_value`]. A board that is only ever mutated through the
//! validated setter can never hold a duplicate value in a row or column, nor
//! violate a defined relation between filled cells.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Axis, Board, MoveError, Position, Relation, Size, Value};
//!
//! let size = Size::new(4)?;
//! let mut board = Board::new(size);
//!
//! let one = Value::new(1).unwrap();
//! let two = Value::new(2).unwrap();
//!
//! board.set_relation(Position::new(0, 0), Axis::Horizontal, Relation::LessThan)?;
//! board.set_value(Position::new(0, 0), one)?;
//!
//! // 1 < 2 holds, so the neighbor accepts a 2
//! board.set_value(Position::new(1, 0), two)?;
//!
//! // but a duplicate in the row is rejected
//! assert_eq!(
//!     board.set_value(Position::new(2, 0), one),
//!     Err(MoveError::DuplicateInRow)
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{board::*, cell::*, position::*, relation::*, size::*, text::*, value::*};

mod board;
mod cell;
mod position;
mod relation;
mod size;
mod text;
mod value;
