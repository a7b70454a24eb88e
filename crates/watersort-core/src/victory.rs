//! Victory detection.

use crate::Arrangement;

/// Returns `true` if the arrangement is sorted.
///
/// An arrangement is sorted when every container is either empty or
/// complete (full and a single color). A partially filled container fails the
/// check even if all its units share one color.
///
/// # Examples
///
/// ```
/// use watersort_core::{Arrangement, victory};
///
/// let solved: Arrangement = "RRRR BBBB - -".parse()?;
/// assert!(victory::is_solved(&solved));
///
/// let partial: Arrangement = "RRR R BBBB -".parse()?;
/// assert!(!victory::is_solved(&partial));
/// # Ok::<(), watersort_core::ParseArrangementError>(())
/// ```
#[must_use]
pub fn is_solved(arrangement: &Arrangement) -> bool {
    arrangement
        .containers()
        .iter()
        .all(|container| container.is_empty() || container.is_complete())
}
