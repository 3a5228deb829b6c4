use derive_more::{Display, Error};

use crate::Position;

/// A validated Futoshiki grid size.
///
/// Sizes outside `3..=10` are rejected at construction, before any board or
/// puzzle exists, so every downstream type can rely on the range.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Size, SizeError};
///
/// let size = Size::new(5)?;
/// assert_eq!(size.get(), 5);
/// assert_eq!(size.cell_count(), 25);
///
/// assert_eq!(Size::new(2), Err(SizeError::OutOfRange { size: 2 }));
/// assert_eq!(Size::new(11), Err(SizeError::OutOfRange { size: 11 }));
/// # Ok::<(), SizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Size(u8);

/// Error returned when constructing a [`Size`] from an unsupported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SizeError {
    /// The requested size is not in `3..=10`.
    #[display("grid size {size} is outside the supported range {}-{}", Size::MIN, Size::MAX)]
    OutOfRange {
        /// The rejected size.
        size: u8,
    },
}

impl Size {
    /// Smallest supported grid size.
    pub const MIN: u8 = 3;
    /// Largest supported grid size.
    pub const MAX: u8 = 10;

    /// Creates a validated size.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] if `size` is not in `3..=10`.
    pub fn new(size: u8) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SizeError::OutOfRange { size })
        }
    }

    /// Returns the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Total number of cells on a board of this size.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Number of grid-adjacent cell pairs: `2·n·(n−1)`, horizontal plus vertical.
    ///
    /// This is the maximal number of ordering relations a board can carry.
    #[must_use]
    pub fn adjacent_pair_count(self) -> usize {
        2 * usize::from(self.0) * usize::from(self.0 - 1)
    }

    /// Returns `true` if `pos` lies on a board of this size.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos.x() < self.0 && pos.y() < self.0
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let n = self.0;
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }
}
