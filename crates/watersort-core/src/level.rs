//! Level numbers.

use std::{
    fmt::{self, Display},
    num::NonZero,
};

/// A positive level number.
///
/// Levels start at [`Level::FIRST`] and grow without an upper bound other
/// than the integer range; [`Level::next`] saturates at `u32::MAX`.
///
/// # Examples
///
/// ```
/// use watersort_core::Level;
///
/// let level = Level::FIRST;
/// assert_eq!(level.get(), 1);
/// assert_eq!(level.next().get(), 2);
/// assert_eq!(Level::new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(NonZero<u32>);

impl Level {
    /// The first level.
    pub const FIRST: Self = Self(NonZero::<u32>::MIN);

    /// Creates a level, returning `None` for `0`.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZero::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the level number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following level.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.get()
    }
}
