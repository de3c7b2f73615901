//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors from parsing a seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, got {length}")]
    WrongLength {
        /// The number of characters found.
        length: usize,
    },
    /// A character was not a hexadecimal digit.
    #[display("invalid seed character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds round-trip through their 64-hex-character string form, so a
/// puzzle can be reproduced from nothing but its printed seed. A seed can
/// also be derived from a human-memorable phrase via SHA-256.
///
/// # Examples
///
/// ```
/// use suji_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
/// );
///
/// // Phrase-derived seeds are deterministic
/// assert_eq!(
///     PuzzleSeed::from_phrase("weekly puzzle 31"),
///     PuzzleSeed::from_phrase("weekly puzzle 31"),
/// );
/// # Ok::<(), suji_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from fresh operating-system entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic random number generator this seed
    /// drives.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 64 {
            return Err(ParseSeedError::WrongLength { length });
        }

        let mut nibbles = [0_u8; 64];
        for (nibble, character) in nibbles.iter_mut().zip(s.chars()) {
            let value = character
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidCharacter { character })?;
            *nibble = value as u8;
        }

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
