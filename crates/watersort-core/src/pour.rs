//! The pour rule.
//!
//! A pour moves the top-run of a source container onto a destination
//! container. It is allowed when the source has liquid, the destination has
//! room, and the destination is either empty or shows the same top color.
//! As many units of the top-run as fit are moved; the rest stay behind.

use std::fmt::{self, Display};

use crate::{Arrangement, Color, IndexOutOfRange};

/// A pour that was (or would be) applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pour {
    /// Index of the source container.
    pub from: usize,
    /// Index of the destination container.
    pub to: usize,
    /// Color of the moved units.
    pub color: Color,
    /// Number of units moved; always at least 1.
    pub amount: usize,
}

impl Display for Pour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} from #{} to #{}",
            self.amount, self.color, self.from, self.to
        )
    }
}

/// Reasons a pour cannot be applied.
///
/// All variants except [`PourError::IndexOutOfRange`] are rule violations: an
/// ordinary outcome of play that a front end shows as a notice. An index out
/// of range means the caller used a stale or invalid index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum PourError {
    /// One of the indices does not name a container.
    #[display("{_0}")]
    IndexOutOfRange(#[from] IndexOutOfRange),
    /// The source container is empty.
    #[display("nothing to pour")]
    NothingToPour,
    /// The destination container is at capacity.
    #[display("destination full")]
    DestinationFull,
    /// The destination's top color differs from the source's.
    #[display("color mismatch")]
    ColorMismatch,
}

impl PourError {
    /// Returns `true` for the expected, non-fatal rule violations.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange(_))
    }
}

impl Arrangement {
    /// Returns the pour that moving liquid from `from` to `to` would apply,
    /// without changing anything.
    ///
    /// Checks run in this order: both indices (source first), empty source,
    /// full destination, color mismatch.
    ///
    /// # Errors
    ///
    /// Returns the [`PourError`] describing the first check that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use watersort_core::{Arrangement, Color, Pour, PourError};
    ///
    /// let arrangement: Arrangement = "RBB B GGGG -".parse()?;
    /// assert_eq!(
    ///     arrangement.pour_capability(0, 1),
    ///     Ok(Pour { from: 0, to: 1, color: Color::Blue, amount: 2 })
    /// );
    /// assert_eq!(arrangement.pour_capability(3, 0), Err(PourError::NothingToPour));
    /// assert_eq!(arrangement.pour_capability(0, 2), Err(PourError::DestinationFull));
    /// # Ok::<(), watersort_core::ParseArrangementError>(())
    /// ```
    pub fn pour_capability(&self, from: usize, to: usize) -> Result<Pour, PourError> {
        let source = self.container(from)?;
        let destination = self.container(to)?;

        let Some(color) = source.top() else {
            return Err(PourError::NothingToPour);
        };
        if destination.is_full() {
            return Err(PourError::DestinationFull);
        }
        if destination.top().is_some_and(|top| top != color) {
            return Err(PourError::ColorMismatch);
        }

        let amount = source.top_run().min(destination.free_space());
        Ok(Pour {
            from,
            to,
            color,
            amount,
        })
    }

    /// Pours the top-run of container `from` onto container `to`.
    ///
    /// Either the whole transfer happens or, on error, the arrangement is left
    /// untouched. Pouring a container onto itself is not special-cased; callers
    /// that treat it as a cancel must check for it first.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`pour_capability`](Self::pour_capability).
    pub fn pour(&mut self, from: usize, to: usize) -> Result<Pour, PourError> {
        let pour = self.pour_capability(from, to)?;
        for _ in 0..pour.amount {
            let unit = self.container_mut(pour.from).pop();
            debug_assert_eq!(unit, Some(pour.color));
            self.container_mut(pour.to).push(pour.color);
        }
        Ok(pour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    fn arrangement(s: &str) -> Arrangement {
        s.parse().expect("valid arrangement")
    }

    #[test]
    fn test_pour_into_empty_moves_whole_run() {
        let mut a = arrangement("RBBB -");
        let pour = a.pour(0, 1).unwrap();
        assert_eq!(pour.amount, 3);
        assert_eq!(pour.color, Color::Blue);
        assert_eq!(a.to_string(), "R BBB");
    }

    #[test]
    fn test_pour_is_limited_by_free_space() {
        let mut a = arrangement("BBBB YBB");
        let pour = a.pour(0, 1).unwrap();
        assert_eq!(pour.amount, 1);
        assert_eq!(a.to_string(), "BBB YBBB");
    }

    #[test]
    fn test_pour_onto_matching_top() {
        let mut a = arrangement("GRR YR");
        a.pour(0, 1).unwrap();
        assert_eq!(a.to_string(), "G YRRR");
    }

    #[test]
    fn test_pour_rejections() {
        let a = arrangement("- RRRR GBY B");
        assert_eq!(a.pour_capability(0, 3), Err(PourError::NothingToPour));
        assert_eq!(a.pour_capability(2, 1), Err(PourError::DestinationFull));
        assert_eq!(a.pour_capability(2, 3), Err(PourError::ColorMismatch));
    }

    #[test]
    fn test_full_destination_rejected_even_when_colors_match() {
        let mut a = arrangement("R RRRR");
        let before = a.clone();
        assert_eq!(a.pour(0, 1), Err(PourError::DestinationFull));
        assert_eq!(a, before);
    }

    #[test]
    fn test_empty_source_checked_before_full_destination() {
        let a = arrangement("- RRRR");
        assert_eq!(a.pour_capability(0, 1), Err(PourError::NothingToPour));
    }

    #[test]
    fn test_rejected_pour_leaves_arrangement_unchanged() {
        let mut a = arrangement("RB YG -");
        let before = a.clone();
        assert_eq!(a.pour(0, 1), Err(PourError::ColorMismatch));
        assert_eq!(a, before);
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut a = arrangement("R -");
        assert_eq!(
            a.pour(2, 0),
            Err(PourError::IndexOutOfRange(IndexOutOfRange { index: 2, len: 2 }))
        );
        assert_eq!(
            a.pour(0, 5),
            Err(PourError::IndexOutOfRange(IndexOutOfRange { index: 5, len: 2 }))
        );
        assert_eq!(a.to_string(), "R -");
    }

    #[test]
    fn test_self_pour_does_not_change_contents() {
        let mut a = arrangement("RBB");
        let pour = a.pour(0, 0).unwrap();
        assert_eq!(pour.amount, 1);
        assert_eq!(a.to_string(), "RBB");

        let mut full = Arrangement::new(vec![Container::filled(Color::Red)]);
        assert_eq!(full.pour(0, 0), Err(PourError::DestinationFull));
    }

    #[test]
    fn test_rule_violation_classification() {
        assert!(PourError::NothingToPour.is_rule_violation());
        assert!(PourError::DestinationFull.is_rule_violation());
        assert!(PourError::ColorMismatch.is_rule_violation());
        assert!(!PourError::from(IndexOutOfRange { index: 0, len: 0 }).is_rule_violation());
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(PourError::NothingToPour.to_string(), "nothing to pour");
        assert_eq!(PourError::DestinationFull.to_string(), "destination full");
        assert_eq!(PourError::ColorMismatch.to_string(), "color mismatch");
    }
}
