//! Liquid color palette.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A liquid color from the fixed palette.
///
/// Colors only have identity; there is no ordering between them that matters
/// for the rules. The declaration order is the palette order, which decides
/// which colors a puzzle with `k` colors uses (the first `k`).
///
/// # Examples
///
/// ```
/// use watersort_core::Color;
///
/// assert_eq!(Color::ALL.len(), Color::PALETTE_SIZE);
/// assert_eq!(Color::ALL[0], Color::Red);
///
/// assert_eq!(Color::Blue.symbol(), 'B');
/// assert_eq!(Color::from_symbol('b'), Ok(Color::Blue));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Red (`R`).
    #[default]
    Red,
    /// Blue (`B`).
    Blue,
    /// Yellow (`Y`).
    Yellow,
    /// Green (`G`).
    Green,
    /// Purple (`P`).
    Purple,
    /// Orange (`O`).
    Orange,
    /// Brown (`N`).
    Brown,
    /// Black (`K`).
    Black,
}

impl Color {
    /// Number of colors in the palette.
    pub const PALETTE_SIZE: usize = 8;

    /// All colors in palette order.
    pub const ALL: [Self; Self::PALETTE_SIZE] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Brown,
        Self::Black,
    ];

    /// Returns the position of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the one-letter symbol used by the text notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Purple => 'P',
            Self::Orange => 'O',
            Self::Brown => 'N',
            Self::Black => 'K',
        }
    }

    /// Returns a colored square glyph suitable for terminal or web rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Red => "🟥",
            Self::Blue => "🟦",
            Self::Yellow => "🟨",
            Self::Green => "🟩",
            Self::Purple => "🟪",
            Self::Orange => "🟧",
            Self::Brown => "🟫",
            Self::Black => "⬛",
        }
    }

    /// Parses a color from its symbol, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if `symbol` names no palette color.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseColorError> {
        let upper = symbol.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|color| color.symbol() == upper)
            .ok_or(ParseColorError { symbol })
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            (Some(symbol), Some(_)) => Err(ParseColorError { symbol }),
            (None, _) => Err(ParseColorError { symbol: ' ' }),
        }
    }
}

/// Error returned when a symbol does not name a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown color symbol {symbol:?}")]
pub struct ParseColorError {
    /// The offending symbol.
    pub symbol: char,
}
