//! Play sessions for water sort puzzles.
//!
//! A [`Session`] owns everything about one player's progress: the current
//! level, the puzzle being played, the undo history, the move counter and the
//! current selection. All changes go through five events:
//!
//! - [`Session::select_container`]: select, cancel, or pour onto a container;
//! - [`Session::undo`]: take back the last pour;
//! - [`Session::retry_level`]: restart the current puzzle;
//! - [`Session::advance_level`]: move on after solving;
//! - [`Session::reset_to_level_one`]: start over from the first level.
//!
//! Sessions are independent values; a host serving several players keeps one
//! per player.
//!
//! # Example
//!
//! ```
//! use watersort_game::{SelectOutcome, Session, SessionOptions};
//! use watersort_generator::PuzzleSeed;
//!
//! let options = SessionOptions::default().seed(PuzzleSeed::from_phrase("docs"));
//! let mut session = Session::with_options(options);
//! assert_eq!(session.level().get(), 1);
//! assert_eq!(session.arrangement().len(), 5);
//!
//! // Select container 0, then pour it into the empty container 3.
//! assert_eq!(session.select_container(0)?, SelectOutcome::Selected(0));
//! assert!(session.select_container(3)?.is_poured());
//! assert_eq!(session.move_count(), 1);
//! assert_eq!(session.history_depth(), 1);
//!
//! session.undo()?;
//! assert_eq!(session.arrangement(), session.initial_arrangement());
//! # Ok::<(), watersort_game::SessionError>(())
//! ```

mod error;
mod history;
mod options;
mod session;

pub use self::{
    error::SessionError,
    history::History,
    options::SessionOptions,
    session::{SelectOutcome, Session, SessionState, UndoOutcome},
};
