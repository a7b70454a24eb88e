//! Fixed-capacity liquid containers.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Color, ParseColorError};

/// A container holding up to [`Container::CAPACITY`] units of liquid.
///
/// Units are stored bottom to top; the last unit is the exposed top, the only
/// end that can be poured from or onto. The capacity invariant
/// (`len() <= CAPACITY`) is enforced by construction, and the contents can
/// only change through [`Arrangement::pour`](crate::Arrangement::pour).
///
/// # Examples
///
/// ```
/// use watersort_core::{Color, Container};
///
/// let container: Container = "RBB".parse()?;
/// assert_eq!(container.len(), 3);
/// assert_eq!(container.top(), Some(Color::Blue));
/// assert_eq!(container.top_run(), 2);
/// assert_eq!(container.free_space(), 1);
/// # Ok::<(), watersort_core::container::ParseContainerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Container {
    units: ArrayVec<[Color; Container::CAPACITY]>,
}

impl Container {
    /// Number of units a container can hold.
    pub const CAPACITY: usize = 4;

    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a full container of a single color.
    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self::from_array([color; Self::CAPACITY])
    }

    /// Creates a full container from exactly [`Container::CAPACITY`] units,
    /// listed bottom to top.
    #[must_use]
    pub fn from_array(units: [Color; Self::CAPACITY]) -> Self {
        Self {
            units: ArrayVec::from(units),
        }
    }

    /// Creates a container from units listed bottom to top.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Overflow`] if more than [`Container::CAPACITY`]
    /// units are given.
    pub fn from_units(units: &[Color]) -> Result<Self, ContainerError> {
        if units.len() > Self::CAPACITY {
            return Err(ContainerError::Overflow { len: units.len() });
        }
        let mut container = Self::new();
        for &color in units {
            container.units.push(color);
        }
        Ok(container)
    }

    /// Returns the units from bottom to top.
    #[must_use]
    pub fn units(&self) -> &[Color] {
        &self.units
    }

    /// Returns the number of units held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the container holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns `true` if the container is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.units.len() == Self::CAPACITY
    }

    /// Returns how many more units fit.
    #[must_use]
    pub fn free_space(&self) -> usize {
        Self::CAPACITY - self.units.len()
    }

    /// Returns the exposed top color, if any.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.units.last().copied()
    }

    /// Returns the length of the top-run: the contiguous same-colored units at
    /// the exposed end.
    ///
    /// An empty container has a top-run of `0`.
    #[must_use]
    pub fn top_run(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.units
            .iter()
            .rev()
            .take_while(|&&color| color == top)
            .count()
    }

    /// Returns how many units of `color` the container holds.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.units.iter().filter(|&&c| c == color).count()
    }

    /// Returns `true` if the container is full and holds a single color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.top_run() == Self::CAPACITY
    }

    pub(crate) fn pop(&mut self) -> Option<Color> {
        self.units.pop()
    }

    pub(crate) fn push(&mut self, color: Color) {
        debug_assert!(!self.is_full());
        self.units.push(color);
    }
}

impl Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for color in &self.units {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Container {
    type Err = ParseContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Self::new());
        }
        let units = s
            .chars()
            .map(Color::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_units(&units)?)
    }
}

/// Errors that can occur when building a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContainerError {
    /// More units were given than fit in a container.
    #[display("a container holds at most 4 units, got {len}")]
    Overflow {
        /// Number of units given.
        len: usize,
    },
}

/// Errors that can occur when parsing a container from text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseContainerError {
    /// A symbol named no palette color.
    #[display("{_0}")]
    Color(#[from] ParseColorError),
    /// Too many units were listed.
    #[display("{_0}")]
    Container(#[from] ContainerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(s: &str) -> Container {
        s.parse().expect("valid container")
    }

    #[test]
    fn test_empty_container() {
        let empty = Container::new();
        assert!(empty.is_empty());
        assert!(!empty.is_full());
        assert_eq!(empty.top(), None);
        assert_eq!(empty.top_run(), 0);
        assert_eq!(empty.free_space(), Container::CAPACITY);
        assert!(!empty.is_complete());
        assert_eq!(empty.to_string(), "-");
    }

    #[test]
    fn test_top_run_stops_at_first_other_color() {
        assert_eq!(container("RBBB").top_run(), 3);
        assert_eq!(container("BRBB").top_run(), 2);
        assert_eq!(container("BBBR").top_run(), 1);
        assert_eq!(container("GGGG").top_run(), 4);
    }

    #[test]
    fn test_complete_requires_full_and_single_color() {
        assert!(Container::filled(Color::Green).is_complete());
        assert!(!container("GGG").is_complete());
        assert!(!container("GGGR").is_complete());
    }

    #[test]
    fn test_count() {
        let c = container("RBRY");
        assert_eq!(c.count(Color::Red), 2);
        assert_eq!(c.count(Color::Blue), 1);
        assert_eq!(c.count(Color::Black), 0);
    }

    #[test]
    fn test_from_units_rejects_overflow() {
        assert_eq!(
            Container::from_units(&[Color::Red; 5]),
            Err(ContainerError::Overflow { len: 5 })
        );
        assert_eq!(
            "RRRRR".parse::<Container>(),
            Err(ParseContainerError::Container(ContainerError::Overflow {
                len: 5
            }))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            "RX".parse::<Container>(),
            Err(ParseContainerError::Color(ParseColorError { symbol: 'X' }))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["-", "R", "RBYG", "NKKO"] {
            assert_eq!(container(s).to_string(), s);
        }
    }
}
