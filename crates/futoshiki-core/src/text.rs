//! Text form of a board, used for test fixtures and debug output.
//!
//! The format is strictly positional, `2n-1` characters per line and `2n-1`
//! lines for a board of size `n`:
//!
//! - value rows hold a value character (`1`-`9`, `a` for 10, `_`/`.`/`0` for
//!   empty) in even columns and the horizontal relation (`<`, `>`, or `.`)
//!   in odd columns;
//! - relation rows between them hold the vertical relation in even columns —
//!   `^` (upper less than lower), `v` (upper greater than lower), or `.` —
//!   with `.` filler in odd columns.
//!
//! ```text
//! 1<2.3
//! ^....
//! _._._
//! ....v
//! _.3._
//! ```
//!
//! Parsing marks every value as a given: fixtures describe puzzles, not play
//! state. Leading/trailing blank lines and indentation are ignored.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Axis, Board, Position, Relation, Size, SizeError, Value};

/// Error from parsing a board's text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input contains no non-blank lines.
    #[display("input is empty")]
    Empty,
    /// The implied grid size is outside the supported range.
    #[display("{_0}")]
    UnsupportedSize(SizeError),
    /// The number of non-blank lines does not match the first line's width.
    #[display("expected {expected} lines, found {found}")]
    LineCount {
        /// Expected line count (`2n-1`).
        expected: usize,
        /// Lines found.
        found: usize,
    },
    /// A line's length does not match the first line's width.
    #[display("line {line} has length {found}, expected {expected}")]
    LineLength {
        /// One-based line number.
        line: usize,
        /// Expected character count (`2n-1`).
        expected: usize,
        /// Characters found.
        found: usize,
    },
    /// A character is not valid for its slot.
    #[display("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// One-based line number.
        line: usize,
        /// One-based column number.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// A value exceeds the grid size implied by the line width.
    #[display("value at line {line}, column {column} exceeds the board size")]
    ValueOutOfRange {
        /// One-based line number.
        line: usize,
        /// One-based column number.
        column: usize,
    },
    /// The parsed board breaks row/column uniqueness or a defined relation.
    #[display("parsed board is inconsistent")]
    Inconsistent,
}

fn value_char(value: Option<Value>) -> char {
    match value {
        None => '_',
        Some(value) => char::from_digit(u32::from(value.get()), 16).unwrap_or('?'),
    }
}

fn horizontal_char(relation: Option<Relation>) -> char {
    match relation {
        None => '.',
        Some(Relation::LessThan) => '<',
        Some(Relation::GreaterThan) => '>',
    }
}

fn vertical_char(relation: Option<Relation>) -> char {
    match relation {
        None => '.',
        Some(Relation::LessThan) => '^',
        Some(Relation::GreaterThan) => 'v',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        let n = self.size().get();
        for y in 0..n {
            if y > 0 {
                f.write_char('\n')?;
                for x in 0..n {
                    if x > 0 {
                        f.write_char('.')?;
                    }
                    let above = Position::new(x, y - 1);
                    f.write_char(vertical_char(self.relation(above, Axis::Vertical)))?;
                }
                f.write_char('\n')?;
            }
            for x in 0..n {
                if x > 0 {
                    let left = Position::new(x - 1, y);
                    f.write_char(horizontal_char(self.relation(left, Axis::Horizontal)))?;
                }
                f.write_char(value_char(self.value(Position::new(x, y))))?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseBoardError::Empty);
        };

        let width = first.chars().count();
        let n = u8::try_from(width.div_ceil(2))
            .map_err(|_| ParseBoardError::UnsupportedSize(SizeError::OutOfRange { size: u8::MAX }))?;
        let size = Size::new(n).map_err(ParseBoardError::UnsupportedSize)?;
        let expected_width = 2 * usize::from(n) - 1;
        if lines.len() != expected_width {
            return Err(ParseBoardError::LineCount {
                expected: expected_width,
                found: lines.len(),
            });
        }

        let mut board = Board::new(size);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected_width {
                return Err(ParseBoardError::LineLength {
                    line: row + 1,
                    expected: expected_width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                parse_slot(&mut board, row, col, ch)?;
            }
        }

        if board.is_consistent() {
            Ok(board)
        } else {
            Err(ParseBoardError::Inconsistent)
        }
    }
}

// `row` and `col` are bounded by `2 * Size::MAX - 1` once the line dimensions
// have been validated, so the index casts cannot truncate.
#[expect(clippy::cast_possible_truncation)]
fn parse_slot(board: &mut Board, row: usize, col: usize, ch: char) -> Result<(), ParseBoardError> {
    let (x, y) = ((col / 2) as u8, (row / 2) as u8);
    let invalid = ParseBoardError::InvalidCharacter {
        line: row + 1,
        column: col + 1,
        found: ch,
    };

    match (row % 2 == 0, col % 2 == 0) {
        // value slot
        (true, true) => {
            let raw = match ch {
                '_' | '.' | '0' => None,
                '1'..='9' => Some(ch as u8 - b'0'),
                'a' | 'A' => Some(10),
                _ => return Err(invalid),
            };
            if let Some(raw) = raw {
                if raw > board.size().get() {
                    return Err(ParseBoardError::ValueOutOfRange {
                        line: row + 1,
                        column: col + 1,
                    });
                }
                let Some(value) = Value::new(raw) else {
                    return Err(invalid);
                };
                board.set_given(Position::new(x, y), value);
            }
        }
        // horizontal relation between (x, y) and its right neighbor
        (true, false) => {
            let relation = match ch {
                '.' | ' ' => None,
                '<' => Some(Relation::LessThan),
                '>' => Some(Relation::GreaterThan),
                _ => return Err(invalid),
            };
            if let Some(relation) = relation {
                let defined = board.set_relation(Position::new(x, y), Axis::Horizontal, relation);
                debug_assert!(defined.is_ok(), "slot position is always left of the last column");
            }
        }
        // vertical relation between (x, y) and the cell below
        (false, true) => {
            let relation = match ch {
                '.' | ' ' => None,
                '^' => Some(Relation::LessThan),
                'v' | 'V' => Some(Relation::GreaterThan),
                _ => return Err(invalid),
            };
            if let Some(relation) = relation {
                let defined = board.set_relation(Position::new(x, y), Axis::Vertical, relation);
                debug_assert!(defined.is_ok(), "slot position is always above the last row");
            }
        }
        // filler between vertical relation slots
        (false, false) => match ch {
            '.' | ' ' => {}
            _ => return Err(invalid),
        },
    }
    Ok(())
}
