use watersort_core::IndexOutOfRange;

/// Errors returned by [`Session`](crate::Session) events.
///
/// None of these change the session. Pour rule violations are not errors;
/// they are reported as [`SelectOutcome::Rejected`](crate::SelectOutcome::Rejected).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The container index does not exist in the current arrangement.
    #[display("{_0}")]
    IndexOutOfRange(#[from] IndexOutOfRange),
    /// The level is solved; only retry, advance, or reset are accepted.
    #[display("the level is already solved")]
    LevelSolved,
    /// Advancing requires the current level to be solved first.
    #[display("the level is not solved yet")]
    NotSolved,
}
