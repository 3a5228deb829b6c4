use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Reproducibility seed for puzzle generation.
///
/// A seed is 32 opaque bytes, displayed and parsed as 64 lowercase hex
/// characters. The generator derives its PRNG state by hashing the seed, so
/// any puzzle can be regenerated exactly from the seed printed alongside it.
///
/// # Examples
///
/// ```
/// use futoshiki_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Builds a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// PRNG with its state derived from this seed.
    pub(crate) fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(Sha256::digest(self.0).into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error from parsing a [`PuzzleSeed`] hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be exactly 64 hex characters")]
    BadLength,
    /// The string contains a character that is not a hex digit.
    #[display("seed contains a non-hex character")]
    InvalidHexDigit,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::BadLength);
        }
        let mut bytes = [0_u8; 32];
        for (slot, chunk) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_digit(chunk[0]).ok_or(ParseSeedError::InvalidHexDigit)?;
            let lo = hex_digit(chunk[1]).ok_or(ParseSeedError::InvalidHexDigit)?;
            *slot = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
