use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};
use watersort_core::Level;

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use watersort_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("moonlight");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a free-form phrase (SHA-256 of its UTF-8 bytes).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self::digest(&[phrase.as_bytes()])
    }

    /// Derives the seed for `level` of a session started from this seed.
    ///
    /// Different levels give unrelated seeds, and the same seed and level
    /// always give the same result.
    #[must_use]
    pub fn for_level(&self, level: Level) -> Self {
        Self::digest(&[&self.0, &level.get().to_le_bytes()])
    }

    fn digest(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // `from_str_radix` alone would accept a leading `+`.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (byte, i) in bytes.iter_mut().zip((0..s.len()).step_by(2)) {
            *byte = u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| ParseSeedError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}

/// Errors that can occur when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the given text in bytes.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("seed contains a non-hex digit")]
    InvalidDigit,
}
