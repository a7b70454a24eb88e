//! Puzzle arrangements.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Color, Container, container::ParseContainerError, victory};

/// The ordered containers of one puzzle instance.
///
/// A container's index is its identity for the lifetime of the puzzle. The
/// number of containers never changes after construction; only
/// [`pour`](Self::pour) moves units between them.
///
/// # Examples
///
/// ```
/// use watersort_core::{Arrangement, Color, Container};
///
/// let arrangement = Arrangement::new(vec![
///     Container::filled(Color::Red),
///     Container::new(),
/// ]);
/// assert_eq!(arrangement.len(), 2);
/// assert_eq!(arrangement.total_units(), 4);
/// assert!(arrangement.is_solved());
/// assert_eq!(arrangement.to_string(), "RRRR -");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arrangement {
    containers: Vec<Container>,
}

impl Arrangement {
    /// Creates an arrangement from its containers.
    #[must_use]
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    /// Returns the number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` if there are no containers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Returns all containers in index order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Returns the container at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= len()`.
    pub fn container(&self, index: usize) -> Result<&Container, IndexOutOfRange> {
        self.containers.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.containers.len(),
        })
    }

    /// Returns the number of units of each palette color, indexed by
    /// [`Color::index`].
    ///
    /// Pouring never changes these counts.
    #[must_use]
    pub fn color_counts(&self) -> [usize; Color::PALETTE_SIZE] {
        let mut counts = [0; Color::PALETTE_SIZE];
        for container in &self.containers {
            for color in container.units() {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    /// Returns the total number of units across all containers.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Returns `true` if every container is empty or complete.
    ///
    /// See [`victory::is_solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        victory::is_solved(self)
    }

    pub(crate) fn container_mut(&mut self, index: usize) -> &mut Container {
        &mut self.containers[index]
    }
}

impl From<Vec<Container>> for Arrangement {
    fn from(containers: Vec<Container>) -> Self {
        Self::new(containers)
    }
}

impl Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, container) in self.containers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{container}")?;
        }
        Ok(())
    }
}

impl FromStr for Arrangement {
    type Err = ParseArrangementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let containers = s
            .split_whitespace()
            .enumerate()
            .map(|(container, token)| {
                token
                    .parse()
                    .map_err(|source| ParseArrangementError { container, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(containers))
    }
}

/// Error returned when a container index does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("container index {index} is out of range for {len} containers")]
pub struct IndexOutOfRange {
    /// The requested index.
    pub index: usize,
    /// The number of containers.
    pub len: usize,
}

/// Error returned when an arrangement cannot be parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid container #{container}: {source}")]
pub struct ParseArrangementError {
    /// Zero-based position of the offending container token.
    pub container: usize,
    /// Why the token was rejected.
    pub source: ParseContainerError,
}
