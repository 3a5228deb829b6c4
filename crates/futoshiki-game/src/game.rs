use futoshiki_core::{Board, MoveError, Position, Size, Value};
use futoshiki_generator::GeneratedPuzzle;

/// An interactive Futoshiki play session.
///
/// The session owns the board and accepts writes only through the board's
/// validated setter, so rows, columns, and relations stay legal after every
/// accepted move. Rejected moves report the violated rule as a
/// [`MoveError`] and leave the board untouched.
///
/// # Examples
///
/// ```
/// use futoshiki_core::Size;
/// use futoshiki_game::Game;
/// use futoshiki_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Size::new(4)?, Difficulty::Easy);
/// let game = Game::new(generator.generate()?);
/// assert!(!game.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves_played: usize,
}

impl Game {
    /// Starts a session on a freshly generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::from_board(puzzle.problem)
    }

    /// Starts a session on an arbitrary board, e.g. one restored by a
    /// persistence layer.
    #[must_use]
    pub const fn from_board(board: Board) -> Self {
        Self {
            board,
            moves_played: 0,
        }
    }

    /// Read access to the underlying board, for presentation layers.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The board's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.board.size()
    }

    /// Checks a proposed placement without applying it.
    ///
    /// This mirrors [`Board::check_value`] exactly — there is no second
    /// validation path — and the result tag tells the caller which rule the
    /// move would break. The board is never mutated.
    ///
    /// # Errors
    ///
    /// Returns the violated rule as a [`MoveError`].
    pub fn check_move(&self, pos: Position, value: Value) -> Result<(), MoveError> {
        self.board.check_value(pos, value)
    }

    /// Validates and applies a placement.
    ///
    /// # Errors
    ///
    /// Returns the violated rule as a [`MoveError`]; the board is unchanged
    /// on error.
    pub fn play(&mut self, pos: Position, value: Value) -> Result<(), MoveError> {
        self.board.set_value(pos, value)?;
        self.moves_played += 1;
        Ok(())
    }

    /// Clears a previously played cell, returning the value it held.
    ///
    /// Clearing an empty cell is a no-op and does not count as a move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GivenCell`] for givens and
    /// [`MoveError::OutOfBounds`] for coordinates outside the board.
    pub fn clear_cell(&mut self, pos: Position) -> Result<Option<Value>, MoveError> {
        let cleared = self.board.clear_value(pos)?;
        if cleared.is_some() {
            self.moves_played += 1;
        }
        Ok(cleared)
    }

    /// Returns `true` once every cell is filled.
    ///
    /// Relation legality needs no separate check here: only validated writes
    /// are ever accepted, so a full board is consistent by construction.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.filled_count() == self.board.size().cell_count()
    }

    /// Number of filled cells, givens included.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Number of cells still to fill.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.board.size().cell_count() - self.board.filled_count()
    }

    /// Number of accepted placements and clears in this session.
    #[must_use]
    pub const fn moves_played(&self) -> usize {
        self.moves_played
    }
}

#[cfg(test)]
mod tests {
    use futoshiki_core::{Axis, Relation};
    use futoshiki_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
    use futoshiki_solver::BacktrackSolver;

    use super::*;

    fn value(n: u8) -> Value {
        Value::new(n).unwrap()
    }

    /// 3×3 fixture from the known solution `[[1,2,3],[2,3,1],[3,1,2]]`:
    /// the given `1` at the top-left corner and the relation
    /// `(0,0) < (1,0)` (1 < 2 in the solution).
    fn scenario_game() -> Game {
        let board: Board = "
            1<_._
            .....
            _._._
            .....
            _._._
        "
        .parse()
        .unwrap();
        Game::from_board(board)
    }

    #[test]
    fn test_scenario_placements() {
        let mut game = scenario_game();

        // placing 2 right of the 1 satisfies the relation
        assert_eq!(game.play(Position::new(1, 0), value(2)), Ok(()));

        // column 0 already holds a 1 at row 0
        assert_eq!(
            game.play(Position::new(0, 1), value(1)),
            Err(MoveError::DuplicateInColumn)
        );
        assert_eq!(game.board().value(Position::new(0, 1)), None);

        // the given cell rejects writes and keeps its value
        assert_eq!(
            game.play(Position::new(0, 0), value(2)),
            Err(MoveError::GivenCell)
        );
        assert_eq!(game.board().value(Position::new(0, 0)), Some(value(1)));

        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn test_check_move_never_mutates() {
        let game = scenario_game();
        let before = game.clone();

        assert_eq!(game.check_move(Position::new(1, 0), value(2)), Ok(()));
        assert_eq!(
            game.check_move(Position::new(1, 0), value(1)),
            Err(MoveError::DuplicateInRow)
        );
        assert_eq!(
            game.check_move(Position::new(0, 1), value(1)),
            Err(MoveError::DuplicateInColumn)
        );
        assert_eq!(
            game.check_move(Position::new(3, 0), value(1)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            game.check_move(Position::new(0, 1), value(4)),
            Err(MoveError::ValueOutOfRange)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_completing_the_scenario() {
        let mut game = scenario_game();
        let solution = [[1, 2, 3], [2, 3, 1], [3, 1, 2]];
        for (y, row) in solution.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                if game.board().value(pos).is_none() {
                    game.play(pos, value(v)).unwrap();
                }
            }
        }
        assert!(game.is_complete());
        // the defensive whole-board check agrees
        assert!(game.board().is_complete());
        assert_eq!(game.remaining_count(), 0);
    }

    #[test]
    fn test_clear_cell() {
        let mut game = scenario_game();
        game.play(Position::new(1, 1), value(1)).unwrap();

        assert_eq!(game.clear_cell(Position::new(1, 1)), Ok(Some(value(1))));
        assert_eq!(game.clear_cell(Position::new(1, 1)), Ok(None));
        assert_eq!(
            game.clear_cell(Position::new(0, 0)),
            Err(MoveError::GivenCell)
        );
        assert_eq!(game.moves_played(), 2);
    }

    #[test]
    fn test_relation_violation_is_reported() {
        let mut board = Board::new(Size::new(4).unwrap());
        board
            .set_relation(Position::new(0, 0), Axis::Vertical, Relation::GreaterThan)
            .unwrap();
        let mut game = Game::from_board(board);

        game.play(Position::new(0, 0), value(1)).unwrap();
        assert_eq!(
            game.play(Position::new(0, 1), value(2)),
            Err(MoveError::ViolatesGreater)
        );
    }

    #[test]
    fn test_play_through_generated_puzzle() {
        let generator = PuzzleGenerator::new(Size::new(4).unwrap(), Difficulty::Easy);
        let puzzle = generator
            .generate_with_seed(PuzzleSeed::from_bytes([11; 32]))
            .unwrap();

        let mut solved = puzzle.problem.clone();
        assert!(BacktrackSolver::new().solve(&mut solved));

        let mut game = Game::new(puzzle);
        for pos in solved.positions() {
            if game.board().value(pos).is_none() {
                let target = solved.value(pos).unwrap();
                game.play(pos, target).unwrap();
            }
        }
        assert!(game.is_complete());
        assert_eq!(game.filled_count(), game.size().cell_count());
    }
}
