use derive_more::{Display, Error};
use futoshiki_core::{Axis, Board, Position, Relation, Size, Value};
use futoshiki_solver::BacktrackSolver;
use log::{debug, trace};
use rand::{Rng, RngExt};
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle: the playable board plus the seed that produced it.
///
/// The full solution grid is internal to generation and deliberately not part
/// of this type — play-time validation never needs it, and a puzzle may admit
/// completions other than the one it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board: givens, the sampled relation subset, all other
    /// cells empty.
    pub problem: Board,
    /// Seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// No solvable carved puzzle was found within the attempt budget.
    #[display("no solvable puzzle found after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of carve attempts made.
        attempts: usize,
    },
    /// The randomized full-solution search failed. Complete assignments exist
    /// for every supported size, so this indicates a bug rather than bad luck.
    #[display("randomized solution fill failed for a supported size")]
    SolutionFillFailed,
}

/// Futoshiki puzzle generator.
///
/// Each generation attempt manufactures a fresh random solution, derives the
/// ordering of every adjacent pair from it, samples givens and relations
/// according to the difficulty quotas, and keeps the result only if the
/// solver's existence check passes. Unsolvable carvings are expected
/// occasionally and retried with fresh randomness; running out of the attempt
/// budget is reported as an error instead of looping forever.
///
/// A generator holds no mutable state: every call derives its own PRNG from
/// the seed, so one generator value can serve concurrent callers as long as
/// each call owns its output board.
///
/// # Examples
///
/// ```
/// use futoshiki_core::Size;
/// use futoshiki_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Size::new(4)?, Difficulty::Easy);
///
/// // same seed, same puzzle
/// let seed = PuzzleSeed::from_bytes([1; 32]);
/// let a = generator.generate_with_seed(seed)?;
/// let b = generator.generate_with_seed(seed)?;
/// assert_eq!(a, b);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    size: Size,
    difficulty: Difficulty,
    max_attempts: usize,
}

impl PuzzleGenerator {
    /// Default bound on carve-and-retest attempts per generation call.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

    /// Creates a generator for the given size and difficulty.
    #[must_use]
    pub const fn new(size: Size, difficulty: Difficulty) -> Self {
        Self {
            size,
            difficulty,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the attempt budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        assert!(max_attempts > 0, "at least one attempt is required");
        self.max_attempts = max_attempts;
        self
    }

    /// The configured board size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The configured difficulty tier.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] when no solvable carving
    /// was found within the attempt budget.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same generator configuration and seed always yield the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] when no solvable carving
    /// was found within the attempt budget.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.to_rng();
        for attempt in 1..=self.max_attempts {
            let solution =
                Solution::fill(self.size, &mut rng).ok_or(GenerateError::SolutionFillFailed)?;
            let problem = self.carve(&solution, &mut rng);
            if BacktrackSolver::new().is_solvable(&problem) {
                trace!("attempt {attempt}: carved a solvable {} puzzle", self.size);
                return Ok(GeneratedPuzzle { problem, seed });
            }
            debug!("attempt {attempt}: carved puzzle is unsolvable, regenerating");
        }
        Err(GenerateError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Samples givens and relations from the solution onto a fresh board.
    fn carve(&self, solution: &Solution, rng: &mut Pcg64) -> Board {
        let n = self.size.get();
        let mut board = Board::new(self.size);

        let given_quota = self.difficulty.given_count(self.size);
        let mut givens = 0;
        while givens < given_quota {
            let pos = Position::new(rng.random_range(0..n), rng.random_range(0..n));
            if board.value(pos).is_some() {
                continue;
            }
            board.set_given(pos, solution.value(pos));
            givens += 1;
        }

        let relation_quota = self
            .difficulty
            .inequality_count(self.size)
            .min(self.size.adjacent_pair_count());
        let mut relations = 0;
        while relations < relation_quota {
            let axis = if rng.random() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let pos = match axis {
                Axis::Horizontal => Position::new(rng.random_range(0..n - 1), rng.random_range(0..n)),
                Axis::Vertical => Position::new(rng.random_range(0..n), rng.random_range(0..n - 1)),
            };
            if board.relation(pos, axis).is_some() {
                continue;
            }
            let defined = board.set_relation(pos, axis, solution.relation(pos, axis));
            debug_assert!(defined.is_ok(), "sampled pairs are always in range");
            relations += 1;
        }

        board
    }
}

/// A complete relation-free assignment used as carving stock.
#[derive(Debug)]
struct Solution {
    board: Board,
}

impl Solution {
    /// Randomized backtracking fill enforcing only row/column uniqueness.
    ///
    /// Complete assignments exist for every supported size, so `None` means
    /// the search itself is broken, not that the input was unlucky.
    fn fill<R>(size: Size, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let mut board = Board::new(size);
        BacktrackSolver::new()
            .solve_with_rng(&mut board, rng)
            .then_some(Self { board })
    }

    fn value(&self, pos: Position) -> Value {
        match self.board.value(pos) {
            Some(value) => value,
            None => unreachable!("solution grids are complete"),
        }
    }

    /// Ordering of the adjacent pair at `pos` along `axis`, read from the
    /// solution. Adjacent values are never equal thanks to row/column
    /// uniqueness, so a direction always exists.
    fn relation(&self, pos: Position, axis: Axis) -> Relation {
        let neighbor = match axis {
            Axis::Horizontal => pos.right(),
            Axis::Vertical => pos.down(),
        };
        if self.value(pos) < self.value(neighbor) {
            Relation::LessThan
        } else {
            Relation::GreaterThan
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seed(byte: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([byte; 32])
    }

    fn size(n: u8) -> Size {
        Size::new(n).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let generator = PuzzleGenerator::new(size(5), Difficulty::Medium);
        let a = generator.generate_with_seed(seed(1)).unwrap();
        let b = generator.generate_with_seed(seed(1)).unwrap();
        assert_eq!(a, b);

        let c = generator.generate_with_seed(seed(2)).unwrap();
        assert_ne!(a.problem, c.problem);
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::new(size(5), difficulty);
            let puzzle = generator.generate_with_seed(seed(3)).unwrap();
            assert!(BacktrackSolver::new().is_solvable(&puzzle.problem));
        }
    }

    #[test]
    fn test_boundary_sizes_generate() {
        for n in [Size::MIN, Size::MAX] {
            let generator = PuzzleGenerator::new(size(n), Difficulty::Medium);
            let puzzle = generator.generate_with_seed(seed(4)).unwrap();
            assert_eq!(puzzle.problem.size().get(), n);
        }
    }

    #[test]
    fn test_quotas_are_met() {
        for n in Size::MIN..=Size::MAX {
            for difficulty in Difficulty::ALL {
                let generator = PuzzleGenerator::new(size(n), difficulty);
                let puzzle = generator.generate_with_seed(seed(5)).unwrap();
                assert_eq!(
                    puzzle.problem.given_count(),
                    difficulty.given_count(size(n)),
                    "givens for size {n} {difficulty}"
                );
                assert_eq!(
                    puzzle.problem.relation_count(),
                    difficulty.inequality_count(size(n)),
                    "relations for size {n} {difficulty}"
                );
                // only givens are filled; everything else is left to the player
                assert_eq!(puzzle.problem.filled_count(), puzzle.problem.given_count());
            }
        }
    }

    #[test]
    fn test_solution_fill_is_complete_and_consistent() {
        let mut rng = seed(6).to_rng();
        let solution = Solution::fill(size(6), &mut rng).unwrap();
        assert!(solution.board.is_complete());
    }

    #[test]
    fn test_derived_relations_match_solution_ordering() {
        let mut rng = seed(7).to_rng();
        let solution = Solution::fill(size(5), &mut rng).unwrap();
        let n = 5;
        for y in 0..n {
            for x in 0..n - 1 {
                let pos = Position::new(x, y);
                let relation = solution.relation(pos, Axis::Horizontal);
                assert!(relation.holds(solution.value(pos), solution.value(pos.right())));
            }
        }
        for y in 0..n - 1 {
            for x in 0..n {
                let pos = Position::new(x, y);
                let relation = solution.relation(pos, Axis::Vertical);
                assert!(relation.holds(solution.value(pos), solution.value(pos.down())));
            }
        }
    }

    #[test]
    fn test_carved_board_matches_its_solution() {
        let generator = PuzzleGenerator::new(size(6), Difficulty::Hard);
        let mut rng = seed(8).to_rng();
        let solution = Solution::fill(size(6), &mut rng).unwrap();
        let board = generator.carve(&solution, &mut rng);

        for pos in board.positions() {
            if let Some(value) = board.value(pos) {
                assert!(board.is_given(pos));
                assert_eq!(value, solution.value(pos));
            }
            for axis in [Axis::Horizontal, Axis::Vertical] {
                if let Some(relation) = board.relation(pos, axis) {
                    assert_eq!(relation, solution.relation(pos, axis));
                }
            }
        }
        assert!(board.is_consistent());
    }

    proptest! {
        // Generation never fails and always honors its quotas, whatever the
        // seed bytes are.
        #[test]
        fn generate_succeeds_for_any_seed(bytes in proptest::array::uniform32(any::<u8>())) {
            let generator = PuzzleGenerator::new(size(4), Difficulty::Medium);
            let puzzle = generator
                .generate_with_seed(PuzzleSeed::from_bytes(bytes))
                .unwrap();
            prop_assert_eq!(
                puzzle.problem.given_count(),
                Difficulty::Medium.given_count(size(4))
            );
            prop_assert!(puzzle.problem.is_consistent());
        }
    }
}
