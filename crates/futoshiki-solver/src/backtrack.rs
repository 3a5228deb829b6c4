use futoshiki_core::{Board, Position, Size, Value};
use rand::{Rng, seq::SliceRandom as _};
use tinyvec::ArrayVec;

type Candidates = ArrayVec<[u8; Size::MAX as usize]>;

/// Chronological backtracking solver over a [`Board`].
///
/// Cells are visited in row-major order; pre-filled cells (givens or earlier
/// accepted writes) are skipped without choice. At each empty cell the solver
/// tries candidate values that pass the board's own move validation — row and
/// column uniqueness plus the defined relations toward filled neighbors in all
/// four directions — writing, recursing, and undoing the write on failure. No
/// constraint propagation is performed beyond those direct checks.
///
/// Recursion depth is bounded by the cell count (at most 100 for the largest
/// supported board), so the search stays recursive.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, Size};
/// use futoshiki_solver::BacktrackSolver;
///
/// let mut board = Board::new(Size::new(4)?);
/// assert!(BacktrackSolver::new().solve(&mut board));
/// assert!(board.is_complete());
/// # Ok::<(), futoshiki_core::SizeError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fills the board in place with some legal total assignment.
    ///
    /// Returns `true` and leaves the board complete if an assignment exists.
    /// Returns `false` if exhaustive search proves none exists from the given
    /// partial state; the board may then be left partially mutated, so callers
    /// that only need an existence answer should use
    /// [`BacktrackSolver::is_solvable`] instead.
    ///
    /// Candidates are tried in ascending order, making the result
    /// deterministic for a given input.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.solve_from(board, 0, &mut |_candidates: &mut [u8]| {})
    }

    /// Like [`BacktrackSolver::solve`], but tries candidates in an order
    /// shuffled by `rng`.
    ///
    /// On a board without relations this yields a random Latin-square fill,
    /// which the generator uses to manufacture fresh solutions.
    pub fn solve_with_rng<R>(&self, board: &mut Board, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        self.solve_from(board, 0, &mut |candidates: &mut [u8]| candidates.shuffle(rng))
    }

    /// Existence check: returns `true` if the board admits at least one legal
    /// total assignment. Runs on a scratch copy; `board` is not modified.
    ///
    /// This is a satisfiability check, not a uniqueness check — a board with
    /// several completions still reports `true`.
    #[must_use]
    pub fn is_solvable(&self, board: &Board) -> bool {
        self.solve(&mut board.clone())
    }

    fn solve_from(&self, board: &mut Board, index: usize, order: &mut dyn FnMut(&mut [u8])) -> bool {
        let Some(pos) = position_at(board.size(), index) else {
            // past the last cell: the assignment is complete and legal by
            // construction, since every write went through the validated setter
            return true;
        };
        if board.value(pos).is_some() {
            return self.solve_from(board, index + 1, order);
        }

        let mut candidates: Candidates = (1..=board.size().get()).collect();
        order(&mut candidates);
        for raw in candidates {
            let Some(value) = Value::new(raw) else {
                continue;
            };
            if board.set_value(pos, value).is_err() {
                continue;
            }
            if self.solve_from(board, index + 1, order) {
                return true;
            }
            let undone = board.clear_value(pos);
            debug_assert!(undone.is_ok(), "the cell was just filled by the solver");
        }
        false
    }
}

// `index` is below `size.cell_count() <= 100` here, so the coordinate casts
// cannot truncate.
#[expect(clippy::cast_possible_truncation)]
fn position_at(size: Size, index: usize) -> Option<Position> {
    if index >= size.cell_count() {
        return None;
    }
    let n = usize::from(size.get());
    Some(Position::new((index % n) as u8, (index / n) as u8))
}

#[cfg(test)]
mod tests {
    use futoshiki_core::{Axis, Relation};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn size(n: u8) -> Size {
        Size::new(n).unwrap()
    }

    fn value(n: u8) -> Value {
        Value::new(n).unwrap()
    }

    #[test]
    fn test_solves_empty_board() {
        for n in Size::MIN..=Size::MAX {
            let mut board = Board::new(size(n));
            assert!(BacktrackSolver::new().solve(&mut board), "size {n}");
            assert!(board.is_complete(), "size {n}");
        }
    }

    #[test]
    fn test_respects_givens() {
        let mut board = Board::new(size(4));
        board.set_given(Position::new(0, 0), value(3));
        board.set_given(Position::new(3, 3), value(1));
        assert!(BacktrackSolver::new().solve(&mut board));
        assert_eq!(board.value(Position::new(0, 0)), Some(value(3)));
        assert_eq!(board.value(Position::new(3, 3)), Some(value(1)));
        assert!(board.is_complete());
    }

    #[test]
    fn test_respects_relations() {
        // a full descending chain on the first row forces n..1
        let n = 5;
        let mut board = Board::new(size(n));
        for x in 0..n - 1 {
            board
                .set_relation(Position::new(x, 0), Axis::Horizontal, Relation::GreaterThan)
                .unwrap();
        }
        assert!(BacktrackSolver::new().solve(&mut board));
        for x in 0..n {
            assert_eq!(board.value(Position::new(x, 0)), Some(value(n - x)));
        }
    }

    #[test]
    fn test_reports_unsolvable() {
        // (0,0) is a given 1 and must be greater than its right neighbor
        let mut board = Board::new(size(3));
        board.set_given(Position::new(0, 0), value(1));
        board
            .set_relation(Position::new(0, 0), Axis::Horizontal, Relation::GreaterThan)
            .unwrap();
        assert!(!BacktrackSolver::new().solve(&mut board));
    }

    #[test]
    fn test_solve_on_complete_board_is_identity() {
        let board: Board = "1<2.3\n.....\n2.3.1\n.....\n3.1.2".parse().unwrap();
        let mut solved = board.clone();
        assert!(BacktrackSolver::new().solve(&mut solved));
        assert_eq!(solved, board);
    }

    #[test]
    fn test_is_solvable_leaves_board_untouched() {
        let mut board = Board::new(size(3));
        board.set_given(Position::new(1, 1), value(2));
        let before = board.clone();
        assert!(BacktrackSolver::new().is_solvable(&board));
        assert_eq!(board, before);

        // an unsolvable board is also left untouched
        board
            .set_relation(Position::new(0, 0), Axis::Horizontal, Relation::GreaterThan)
            .unwrap();
        board.set_given(Position::new(0, 0), value(1));
        let before = board.clone();
        assert!(!BacktrackSolver::new().is_solvable(&board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_randomized_fill_is_deterministic_per_seed() {
        let solver = BacktrackSolver::new();

        let mut first = Board::new(size(6));
        let mut rng = Pcg64::seed_from_u64(42);
        assert!(solver.solve_with_rng(&mut first, &mut rng));
        assert!(first.is_complete());

        let mut second = Board::new(size(6));
        let mut rng = Pcg64::seed_from_u64(42);
        assert!(solver.solve_with_rng(&mut second, &mut rng));
        assert_eq!(first, second);
    }

    #[test]
    fn test_randomized_fill_varies_with_seed() {
        let solver = BacktrackSolver::new();
        let mut boards = Vec::new();
        for seed in 0..4 {
            let mut board = Board::new(size(7));
            let mut rng = Pcg64::seed_from_u64(seed);
            assert!(solver.solve_with_rng(&mut board, &mut rng));
            boards.push(board);
        }
        // at least two distinct fills among a handful of seeds
        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
