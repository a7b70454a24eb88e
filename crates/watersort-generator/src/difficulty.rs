//! Level-based difficulty policy.
//!
//! | Levels | Colors | Tier     |
//! |--------|--------|----------|
//! | 1–2    | 3      | Tutorial |
//! | 3–5    | 4      | Easy     |
//! | 6–9    | 5      | Normal   |
//! | 10–14  | 6      | Hard     |
//! | 15+    | 7      | Expert   |
//!
//! Levels grow without bound but the color count is capped at 7.

use watersort_core::Level;

/// Number of empty containers added to every puzzle.
pub const EMPTY_CONTAINERS: usize = 2;

/// Level at which [`progress`] reaches `1.0`.
pub const MASTERY_LEVEL: u32 = 20;

/// Named difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Tier {
    /// Levels 1–2.
    #[display("tutorial")]
    Tutorial,
    /// Levels 3–5.
    #[display("easy")]
    Easy,
    /// Levels 6–9.
    #[display("normal")]
    Normal,
    /// Levels 10–14.
    #[display("hard")]
    Hard,
    /// Levels 15 and above.
    #[display("expert")]
    Expert,
}

impl Tier {
    /// Returns the tier of `level`.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        match level.get() {
            1..=2 => Self::Tutorial,
            3..=5 => Self::Easy,
            6..=9 => Self::Normal,
            10..=14 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// Returns the number of colors (and filled containers) of this tier.
    #[must_use]
    pub const fn color_count(self) -> usize {
        match self {
            Self::Tutorial => 3,
            Self::Easy => 4,
            Self::Normal => 5,
            Self::Hard => 6,
            Self::Expert => 7,
        }
    }
}

/// Returns the number of distinct colors, equal to the number of filled
/// containers, for `level`. Always in `3..=7`.
///
/// # Examples
///
/// ```
/// use watersort_core::Level;
/// use watersort_generator::difficulty;
///
/// assert_eq!(difficulty::color_count(Level::FIRST), 3);
/// assert_eq!(difficulty::color_count(Level::new(10).unwrap()), 6);
/// assert_eq!(difficulty::color_count(Level::new(1000).unwrap()), 7);
/// ```
#[must_use]
pub fn color_count(level: Level) -> usize {
    Tier::for_level(level).color_count()
}

/// Returns how far `level` is along the way to [`MASTERY_LEVEL`], in
/// `0.0..=1.0`.
#[must_use]
pub fn progress(level: Level) -> f64 {
    (f64::from(level.get()) / f64::from(MASTERY_LEVEL)).min(1.0)
}

/// Difficulty parameters of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Difficulty {
    /// Named band the level falls in.
    pub tier: Tier,
    /// Number of distinct colors, each dealt as four units.
    pub color_count: usize,
    /// Total containers: one per color plus [`EMPTY_CONTAINERS`].
    pub container_count: usize,
}

impl Difficulty {
    /// Returns the difficulty of `level`.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        let tier = Tier::for_level(level);
        let color_count = tier.color_count();
        Self {
            tier,
            color_count,
            container_count: color_count + EMPTY_CONTAINERS,
        }
    }
}
