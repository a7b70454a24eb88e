//! Puzzle generation and difficulty scaling for water sort puzzles.
//!
//! - [`difficulty`]: Maps a [`Level`] to the number of colors its puzzle uses.
//! - [`PuzzleGenerator`]: Deals a shuffled arrangement for a given color count.
//! - [`PuzzleSeed`]: Reproducible seeds for generation.
//!
//! Generated puzzles are uniformly random deals. They are not checked for
//! solvability.
//!
//! # Examples
//!
//! ```
//! use watersort_core::Level;
//! use watersort_generator::{PuzzleGenerator, difficulty};
//!
//! let color_count = difficulty::color_count(Level::FIRST);
//! let puzzle = PuzzleGenerator::new().generate(color_count)?;
//!
//! // Three filled containers plus two empty ones.
//! assert_eq!(puzzle.arrangement.len(), 5);
//! assert_eq!(puzzle.arrangement.total_units(), 12);
//! # Ok::<(), watersort_generator::GeneratorError>(())
//! ```
//!
//! [`Level`]: watersort_core::Level

pub mod difficulty;
mod generator;
mod seed;

pub use self::{
    difficulty::{Difficulty, Tier},
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
