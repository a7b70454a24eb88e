use watersort_core::Level;
use watersort_generator::PuzzleSeed;

/// Options for creating a [`Session`](crate::Session).
///
/// # Example
///
/// ```
/// use watersort_core::Level;
/// use watersort_game::SessionOptions;
/// use watersort_generator::PuzzleSeed;
///
/// let options = SessionOptions::default()
///     .seed(PuzzleSeed::from_phrase("tournament"))
///     .starting_level(Level::new(6).unwrap());
/// assert_eq!(options.starting_level.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Base seed for the whole session.
    ///
    /// When set, the puzzle of every level is generated from
    /// [`PuzzleSeed::for_level`], so replaying the same events gives the same
    /// game. When unset, every level start draws a fresh random seed.
    pub seed: Option<PuzzleSeed>,
    /// Level the session starts at.
    pub starting_level: Level,
}

impl SessionOptions {
    /// Sets the base seed.
    #[must_use]
    pub fn seed(mut self, seed: PuzzleSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the starting level.
    #[must_use]
    pub fn starting_level(mut self, level: Level) -> Self {
        self.starting_level = level;
        self
    }

    pub(crate) fn seed_for(&self, level: Level) -> PuzzleSeed {
        self.seed
            .map_or_else(PuzzleSeed::random, |seed| seed.for_level(level))
    }
}
