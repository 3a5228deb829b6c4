use derive_more::{Display, Error, IsVariant};

use crate::{Axis, Cell, Position, Relation, Size, Value};

/// Why a proposed placement is not legal.
///
/// Returned by [`Board::check_value`] and friends. The variants double as the
/// play-time validation result: a caller turns them into user-facing messages
/// without inspecting the board again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum MoveError {
    /// The coordinates lie outside the board.
    #[display("coordinates are outside the board")]
    OutOfBounds,
    /// The value exceeds the board size.
    #[display("value is outside the board's range")]
    ValueOutOfRange,
    /// The cell is a given and may not be changed.
    #[display("cell is a given and cannot be changed")]
    GivenCell,
    /// The value already appears elsewhere in the same row.
    #[display("value already appears in this row")]
    DuplicateInRow,
    /// The value already appears elsewhere in the same column.
    #[display("value already appears in this column")]
    DuplicateInColumn,
    /// A less-than relation with an adjacent cell would not hold.
    #[display("placement violates a less-than constraint")]
    ViolatesLess,
    /// A greater-than relation with an adjacent cell would not hold.
    #[display("placement violates a greater-than constraint")]
    ViolatesGreater,
}

impl MoveError {
    /// Maps a violated relation to its error tag, as the relation is stored
    /// (first cell of the pair on the left-hand side).
    #[must_use]
    pub const fn from_relation(relation: Relation) -> Self {
        match relation {
            Relation::LessThan => Self::ViolatesLess,
            Relation::GreaterThan => Self::ViolatesGreater,
        }
    }
}

/// Why a relation cannot be defined at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RelationError {
    /// The coordinates lie outside the board.
    #[display("coordinates are outside the board")]
    OutOfBounds,
    /// The position has no neighbor along the requested axis: it is on the
    /// last column (horizontal) or the last row (vertical).
    #[display("position has no neighbor along the requested axis")]
    NoNeighbor,
}

/// An N×N Futoshiki board.
///
/// The board owns all legality queries: row and column uniqueness, the
/// relation checks against all four neighbors of a cell, and whole-grid
/// completeness. Every play-time mutation goes through the validated setter
/// [`Board::set_value`]; the generator additionally uses the force-writing
/// [`Board::set_given`] and [`Board::set_relation`] while seeding a puzzle
/// from a known-good solution.
///
/// # Invariants
///
/// A board mutated only through the validated setter always satisfies:
///
/// - no two filled cells in the same row or column share a value,
/// - every defined relation between two filled adjacent cells holds,
/// - relations are only defined where the neighbor exists (never on the last
///   column horizontally, never on the last row vertically).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Size,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board: no values, no givens, no relations.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.cell_count()],
        }
    }

    /// The board's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.size.contains(pos),
            "position {pos} is outside a board of size {}",
            self.size
        );
        usize::from(pos.y()) * usize::from(self.size.get()) + usize::from(pos.x())
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board. Untrusted coordinates belong in
    /// [`Board::check_value`], which reports them as an error instead.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Value at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Value> {
        self.cell(pos).value
    }

    /// Returns `true` if the cell at `pos` is a given.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.cell(pos).given
    }

    /// Relation defined at `pos` along `axis`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn relation(&self, pos: Position, axis: Axis) -> Option<Relation> {
        match axis {
            Axis::Horizontal => self.cell(pos).right,
            Axis::Vertical => self.cell(pos).below,
        }
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.size.positions()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value.is_some()).count()
    }

    /// Number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.given).count()
    }

    /// Number of defined relations.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| usize::from(cell.right.is_some()) + usize::from(cell.below.is_some()))
            .sum()
    }

    /// Returns `true` if `value` appears anywhere in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the board.
    #[must_use]
    pub fn row_contains(&self, y: u8, value: Value) -> bool {
        (0..self.size.get()).any(|x| self.value(Position::new(x, y)) == Some(value))
    }

    /// Returns `true` if `value` appears anywhere in column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the board.
    #[must_use]
    pub fn column_contains(&self, x: u8, value: Value) -> bool {
        (0..self.size.get()).any(|y| self.value(Position::new(x, y)) == Some(value))
    }

    /// Checks whether placing `value` at `pos` would be legal, without
    /// mutating anything.
    ///
    /// This is the single validation path for every write to the board — the
    /// play-time move validator exposes it verbatim and [`Board::set_value`]
    /// re-runs it before committing. Checks run in order: bounds, given cell,
    /// value range, row duplicate, column duplicate, then the relations toward
    /// all four neighbors (each only when a relation is defined on the pair
    /// and the neighbor is filled). The first failing rule is reported.
    ///
    /// Replacing the value of an already-filled, non-given cell is legal as
    /// long as the new value passes the same checks; the cell's own current
    /// value is ignored while scanning its row and column.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`MoveError`].
    pub fn check_value(&self, pos: Position, value: Value) -> Result<(), MoveError> {
        if !self.size.contains(pos) {
            return Err(MoveError::OutOfBounds);
        }
        if self.cell(pos).given {
            return Err(MoveError::GivenCell);
        }
        if value.get() > self.size.get() {
            return Err(MoveError::ValueOutOfRange);
        }
        for x in 0..self.size.get() {
            if x != pos.x() && self.value(Position::new(x, pos.y())) == Some(value) {
                return Err(MoveError::DuplicateInRow);
            }
        }
        for y in 0..self.size.get() {
            if y != pos.y() && self.value(Position::new(pos.x(), y)) == Some(value) {
                return Err(MoveError::DuplicateInColumn);
            }
        }
        self.check_relations(pos, value)
    }

    fn check_relations(&self, pos: Position, value: Value) -> Result<(), MoveError> {
        let cell = self.cell(pos);
        if let Some(relation) = cell.right
            && let Some(neighbor) = self.value(pos.right())
            && !relation.holds(value, neighbor)
        {
            return Err(MoveError::from_relation(relation));
        }
        if let Some(relation) = cell.below
            && let Some(neighbor) = self.value(pos.down())
            && !relation.holds(value, neighbor)
        {
            return Err(MoveError::from_relation(relation));
        }
        if let Some(left) = pos.left()
            && let Some(relation) = self.cell(left).right
            && let Some(neighbor) = self.value(left)
            && !relation.holds(neighbor, value)
        {
            return Err(MoveError::from_relation(relation));
        }
        if let Some(up) = pos.up()
            && let Some(relation) = self.cell(up).below
            && let Some(neighbor) = self.value(up)
            && !relation.holds(neighbor, value)
        {
            return Err(MoveError::from_relation(relation));
        }
        Ok(())
    }

    /// Validates and commits a placement.
    ///
    /// On rejection the board is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the violated rule; see [`Board::check_value`].
    pub fn set_value(&mut self, pos: Position, value: Value) -> Result<(), MoveError> {
        self.check_value(pos, value)?;
        let i = self.index(pos);
        self.cells[i].value = Some(value);
        Ok(())
    }

    /// Clears a non-given cell, returning the value it held.
    ///
    /// Clearing an already-empty cell is a no-op that returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside the board
    /// and [`MoveError::GivenCell`] when the cell is a given.
    pub fn clear_value(&mut self, pos: Position) -> Result<Option<Value>, MoveError> {
        if !self.size.contains(pos) {
            return Err(MoveError::OutOfBounds);
        }
        let i = self.index(pos);
        if self.cells[i].given {
            return Err(MoveError::GivenCell);
        }
        Ok(self.cells[i].value.take())
    }

    /// Force-writes `value` at `pos` and marks the cell as a given.
    ///
    /// This bypasses play validation and is intended for seeding a puzzle from
    /// a known-good solution; the caller is responsible for writing a
    /// consistent set of givens.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or `value` exceeds the board size.
    pub fn set_given(&mut self, pos: Position, value: Value) {
        assert!(
            value.get() <= self.size.get(),
            "value {value} exceeds board size {}",
            self.size
        );
        let i = self.index(pos);
        self.cells[i].value = Some(value);
        self.cells[i].given = true;
    }

    /// Defines the ordering relation between `pos` and its neighbor along
    /// `axis`, replacing any relation already defined on the pair.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::OutOfBounds`] for coordinates outside the
    /// board and [`RelationError::NoNeighbor`] when `pos` is on the last
    /// column (horizontal) or last row (vertical).
    pub fn set_relation(
        &mut self,
        pos: Position,
        axis: Axis,
        relation: Relation,
    ) -> Result<(), RelationError> {
        if !self.size.contains(pos) {
            return Err(RelationError::OutOfBounds);
        }
        let last = self.size.get() - 1;
        let has_neighbor = match axis {
            Axis::Horizontal => pos.x() < last,
            Axis::Vertical => pos.y() < last,
        };
        if !has_neighbor {
            return Err(RelationError::NoNeighbor);
        }
        let i = self.index(pos);
        match axis {
            Axis::Horizontal => self.cells[i].right = Some(relation),
            Axis::Vertical => self.cells[i].below = Some(relation),
        }
        Ok(())
    }

    /// Returns `true` if the current state violates no rule: no duplicate
    /// values in any row or column, and every defined relation between two
    /// filled adjacent cells holds. Empty cells never violate anything.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.size.get();
        for y in 0..n {
            if self.line_has_duplicate(|i| Position::new(i, y)) {
                return false;
            }
        }
        for x in 0..n {
            if self.line_has_duplicate(|i| Position::new(x, i)) {
                return false;
            }
        }
        self.relations_hold()
    }

    fn line_has_duplicate(&self, position_at: impl Fn(u8) -> Position) -> bool {
        let mut seen = [false; Size::MAX as usize + 1];
        for i in 0..self.size.get() {
            if let Some(value) = self.value(position_at(i)) {
                let slot = usize::from(value.get());
                if seen[slot] {
                    return true;
                }
                seen[slot] = true;
            }
        }
        false
    }

    fn relations_hold(&self) -> bool {
        for pos in self.positions() {
            let cell = self.cell(pos);
            let Some(value) = cell.value else {
                continue;
            };
            if let Some(relation) = cell.right
                && let Some(neighbor) = self.value(pos.right())
                && !relation.holds(value, neighbor)
            {
                return false;
            }
            if let Some(relation) = cell.below
                && let Some(neighbor) = self.value(pos.down())
                && !relation.holds(value, neighbor)
            {
                return false;
            }
        }
        true
    }

    /// Returns `true` once every cell is filled and every relation holds.
    ///
    /// A board mutated only through the validated setter cannot reach a full,
    /// inconsistent state; the consistency check is re-verified here anyway.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.value.is_some()) && self.is_consistent()
    }
}
