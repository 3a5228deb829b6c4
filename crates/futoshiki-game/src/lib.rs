//! Interactive play session for Futoshiki puzzles.
//!
//! [`Game`] wraps a generated board and funnels every mutation through the
//! board's validated setter, so a session can never enter an illegal state.
//! [`Game::check_move`] exposes the same validation without mutating, tagged
//! with the rule a move would break — the input for user-facing messages.

pub use self::game::*;

mod game;
