//! Command-line arguments.

use clap::Parser;
use watersort_core::Level;
use watersort_game::SessionOptions;
use watersort_generator::PuzzleSeed;

use crate::render::Palette;

/// Play water sort puzzles in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for the whole session, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Seed for the whole session, derived from a phrase.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Level to start at.
    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub level: u32,

    /// Draw colors as emoji squares instead of letters.
    #[arg(long)]
    pub glyphs: bool,
}

impl Args {
    /// Returns the session options selected by the arguments.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        let mut options =
            SessionOptions::default().starting_level(Level::new(self.level).unwrap_or_default());
        let seed = self
            .seed
            .or_else(|| self.phrase.as_deref().map(PuzzleSeed::from_phrase));
        if let Some(seed) = seed {
            options = options.seed(seed);
        }
        options
    }

    /// Returns the palette selected by the arguments.
    #[must_use]
    pub fn palette(&self) -> Palette {
        if self.glyphs {
            Palette::Glyphs
        } else {
            Palette::Letters
        }
    }
}
