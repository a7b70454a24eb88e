use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use watersort_core::{Arrangement, Color, Container, Level};

use crate::{
    PuzzleSeed,
    difficulty::{self, EMPTY_CONTAINERS},
};

/// A generated puzzle and the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The initial arrangement.
    pub arrangement: Arrangement,
    /// The seed the deal was drawn from.
    pub seed: PuzzleSeed,
}

/// Errors that can occur when generating a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested number of colors is zero or exceeds the palette.
    #[display("color count must be between 1 and 8, got {count}")]
    InvalidColorCount {
        /// The requested number of colors.
        count: usize,
    },
}

/// Deals shuffled water sort puzzles.
///
/// A puzzle with `k` colors takes the first `k` colors of the palette, four
/// units each, shuffles all `4k` units uniformly, pours them in order into
/// `k` containers of four, and adds two empty containers.
///
/// # Examples
///
/// ```
/// use watersort_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("level one");
///
/// let a = generator.generate_with_seed(3, seed)?;
/// let b = generator.generate_with_seed(3, seed)?;
/// assert_eq!(a, b);
/// # Ok::<(), watersort_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle with `color_count` colors from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidColorCount`] if `color_count` is `0`
    /// or larger than [`Color::PALETTE_SIZE`].
    pub fn generate(&self, color_count: usize) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(color_count, PuzzleSeed::random())
    }

    /// Generates a puzzle with `color_count` colors from `seed`.
    ///
    /// The same seed and color count always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidColorCount`] if `color_count` is `0`
    /// or larger than [`Color::PALETTE_SIZE`].
    pub fn generate_with_seed(
        &self,
        color_count: usize,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let arrangement = self.generate_with_rng(color_count, &mut rng)?;
        Ok(GeneratedPuzzle { arrangement, seed })
    }

    /// Generates an arrangement with `color_count` colors, drawing the
    /// shuffle from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidColorCount`] if `color_count` is `0`
    /// or larger than [`Color::PALETTE_SIZE`].
    pub fn generate_with_rng<R>(
        &self,
        color_count: usize,
        rng: &mut R,
    ) -> Result<Arrangement, GeneratorError>
    where
        R: Rng + ?Sized,
    {
        if !(1..=Color::PALETTE_SIZE).contains(&color_count) {
            return Err(GeneratorError::InvalidColorCount { count: color_count });
        }
        Ok(deal(color_count, rng))
    }

    /// Generates the puzzle for `level` from `seed`, sized by the
    /// difficulty policy.
    #[must_use]
    pub fn generate_level(&self, level: Level, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let arrangement = deal(difficulty::color_count(level), &mut rng);
        GeneratedPuzzle { arrangement, seed }
    }
}

fn deal<R>(color_count: usize, rng: &mut R) -> Arrangement
where
    R: Rng + ?Sized,
{
    let mut units = Color::ALL[..color_count]
        .iter()
        .flat_map(|&color| [color; Container::CAPACITY])
        .collect::<Vec<_>>();
    units.shuffle(rng);

    let (chunks, rest) = units.as_chunks::<{ Container::CAPACITY }>();
    debug_assert!(rest.is_empty());

    let containers = chunks
        .iter()
        .map(|&chunk| Container::from_array(chunk))
        .chain(std::iter::repeat_with(Container::new).take(EMPTY_CONTAINERS))
        .collect();
    Arrangement::new(containers)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;

    use super::*;

    fn seed(phrase: &str) -> PuzzleSeed {
        PuzzleSeed::from_phrase(phrase)
    }

    fn assert_structure(arrangement: &Arrangement, color_count: usize) {
        assert_eq!(arrangement.len(), color_count + EMPTY_CONTAINERS);
        for (i, container) in arrangement.containers().iter().enumerate() {
            if i < color_count {
                assert!(container.is_full(), "container {i} should be full");
            } else {
                assert!(container.is_empty(), "container {i} should be empty");
            }
        }
        let counts = arrangement.color_counts();
        for color in Color::ALL {
            let expected = if color.index() < color_count {
                Container::CAPACITY
            } else {
                0
            };
            assert_eq!(counts[color.index()], expected, "{color:?}");
        }
    }

    #[test]
    fn test_generated_structure_for_every_tier() {
        let generator = PuzzleGenerator::new();
        for color_count in 3..=7 {
            let puzzle = generator
                .generate_with_seed(color_count, seed("structure"))
                .unwrap();
            assert_structure(&puzzle.arrangement, color_count);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(7, seed("same")).unwrap();
        let b = generator.generate_with_seed(7, seed("same")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed("same"));
    }

    #[test]
    fn test_random_generation_records_seed() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(4).unwrap();
        let replay = generator.generate_with_seed(4, puzzle.seed).unwrap();
        assert_eq!(puzzle, replay);
    }

    #[test]
    fn test_injected_rng() {
        let generator = PuzzleGenerator::new();
        let mut rng = Pcg64::seed_from_u64(42);
        let arrangement = generator.generate_with_rng(5, &mut rng).unwrap();
        assert_structure(&arrangement, 5);
    }

    #[test]
    fn test_single_color_is_already_solved() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate_with_seed(1, seed("one")).unwrap();
        assert_eq!(puzzle.arrangement.to_string(), "RRRR - -");
        assert!(puzzle.arrangement.is_solved());
    }

    #[test]
    fn test_invalid_color_count() {
        let generator = PuzzleGenerator::new();
        assert_eq!(
            generator.generate(0),
            Err(GeneratorError::InvalidColorCount { count: 0 })
        );
        assert_eq!(
            generator.generate_with_seed(9, seed("nine")),
            Err(GeneratorError::InvalidColorCount { count: 9 })
        );
    }

    #[test]
    fn test_generate_level_uses_difficulty() {
        let generator = PuzzleGenerator::new();
        let level = Level::new(12).unwrap();
        let puzzle = generator.generate_level(level, seed("level"));
        assert_structure(&puzzle.arrangement, 6);
        assert_eq!(
            puzzle,
            generator.generate_with_seed(6, seed("level")).unwrap()
        );
    }

    proptest! {
        #[test]
        fn every_deal_has_four_units_per_color(
            color_count in 1..=Color::PALETTE_SIZE,
            bytes in any::<[u8; 32]>(),
        ) {
            let generator = PuzzleGenerator::new();
            let puzzle = generator
                .generate_with_seed(color_count, PuzzleSeed::from_bytes(bytes))
                .unwrap();
            assert_structure(&puzzle.arrangement, color_count);
        }
    }
}
