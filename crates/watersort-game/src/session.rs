use watersort_core::{Arrangement, Level, Pour, PourError};
use watersort_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

use crate::{History, SessionError, SessionOptions};

/// Whether the current level is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Pours and undo are accepted.
    Playing,
    /// The arrangement is sorted; waiting for retry, advance, or reset.
    Solved,
}

/// Result of [`Session::select_container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectOutcome {
    /// Nothing was selected; the container is now selected.
    Selected(usize),
    /// The selected container was chosen again; the selection is cleared.
    Deselected,
    /// Liquid was poured from the selected container onto this one.
    Poured(Pour),
    /// The pour broke a rule; nothing changed except the cleared selection.
    Rejected(PourError),
}

/// Result of [`Session::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UndoOutcome {
    /// The last pour was taken back.
    Undone,
    /// There was no pour to take back; nothing changed.
    NothingToUndo,
}

/// One player's play state across levels.
///
/// See the [crate documentation](crate) for the event model.
#[derive(Debug, Clone)]
pub struct Session {
    options: SessionOptions,
    generator: PuzzleGenerator,
    level: Level,
    seed: Option<PuzzleSeed>,
    arrangement: Arrangement,
    initial_arrangement: Arrangement,
    history: History,
    move_count: usize,
    selection: Option<usize>,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a new session at level 1 with random puzzles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Starts a new session with `options`, generating the puzzle of the
    /// starting level.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        let mut session = Self::with_arrangement(options, Arrangement::default());
        session.start_level(options.starting_level);
        session
    }

    /// Starts a new session at `options.starting_level` with a given puzzle
    /// instead of a generated one.
    ///
    /// Later levels are generated as usual. The session starts in
    /// [`SessionState::Playing`] even if `arrangement` is already sorted.
    #[must_use]
    pub fn with_arrangement(options: SessionOptions, arrangement: Arrangement) -> Self {
        Self {
            options,
            generator: PuzzleGenerator::new(),
            level: options.starting_level,
            seed: None,
            initial_arrangement: arrangement.clone(),
            arrangement,
            history: History::new(),
            move_count: 0,
            selection: None,
            state: SessionState::Playing,
        }
    }

    /// Returns the options the session was created with.
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the difficulty parameters of the current level.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::for_level(self.level)
    }

    /// Returns the seed the current puzzle was generated from, or `None` if
    /// it was supplied through [`Session::with_arrangement`].
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the current arrangement.
    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Returns the arrangement the current level started from.
    #[must_use]
    pub fn initial_arrangement(&self) -> &Arrangement {
        &self.initial_arrangement
    }

    /// Returns the undo history of the current level.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the number of pours that can be undone.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Returns the number of pours made on the current level, net of undos.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the selected container index, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Returns whether the level is being played or solved.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` once a pour has sorted the arrangement.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Handles a click (or tap) on container `index`.
    ///
    /// - With nothing selected, selects `index`.
    /// - With `index` already selected, clears the selection.
    /// - With another container selected, pours from it onto `index` and
    ///   clears the selection. A successful pour records an undo snapshot,
    ///   counts a move, and may solve the level. A rejected pour changes
    ///   nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LevelSolved`] if the level is solved, and
    /// [`SessionError::IndexOutOfRange`] if `index` names no container. The
    /// session is unchanged in both cases.
    pub fn select_container(&mut self, index: usize) -> Result<SelectOutcome, SessionError> {
        if self.state.is_solved() {
            return Err(SessionError::LevelSolved);
        }
        self.arrangement.container(index)?;

        let Some(from) = self.selection.take() else {
            log::trace!("selected container {index}");
            self.selection = Some(index);
            return Ok(SelectOutcome::Selected(index));
        };
        if from == index {
            log::trace!("deselected container {index}");
            return Ok(SelectOutcome::Deselected);
        }

        let snapshot = self.arrangement.clone();
        match self.arrangement.pour(from, index) {
            Ok(pour) => {
                self.history.push(snapshot);
                self.move_count += 1;
                log::debug!("move {}: poured {pour}", self.move_count);
                if self.arrangement.is_solved() {
                    self.state = SessionState::Solved;
                    log::info!(
                        "level {} solved in {} moves",
                        self.level,
                        self.move_count
                    );
                }
                Ok(SelectOutcome::Poured(pour))
            }
            Err(err) => {
                log::debug!("pour from #{from} to #{index} rejected: {err}");
                Ok(SelectOutcome::Rejected(err))
            }
        }
    }

    /// Takes back the most recent pour.
    ///
    /// Restores the previous arrangement, decrements the move count, and
    /// clears the selection. With an empty history this is a no-op reported
    /// as [`UndoOutcome::NothingToUndo`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LevelSolved`] if the level is solved.
    pub fn undo(&mut self) -> Result<UndoOutcome, SessionError> {
        if self.state.is_solved() {
            return Err(SessionError::LevelSolved);
        }
        let Some(previous) = self.history.pop() else {
            log::debug!("nothing to undo");
            return Ok(UndoOutcome::NothingToUndo);
        };
        self.arrangement = previous;
        self.move_count = self.move_count.saturating_sub(1);
        self.selection = None;
        log::debug!("undo: back to move {}", self.move_count);
        Ok(UndoOutcome::Undone)
    }

    /// Restarts the current level from its initial arrangement.
    ///
    /// Clears the history, move count, and selection. Accepted in any state.
    pub fn retry_level(&mut self) {
        log::info!("retrying level {}", self.level);
        self.arrangement.clone_from(&self.initial_arrangement);
        self.reset_progress();
    }

    /// Moves on to the next level with a newly generated puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSolved`] if the current level is not solved.
    pub fn advance_level(&mut self) -> Result<(), SessionError> {
        if !self.state.is_solved() {
            return Err(SessionError::NotSolved);
        }
        self.start_level(self.level.next());
        Ok(())
    }

    /// Starts over from level 1 with a newly generated puzzle. Accepted in
    /// any state.
    pub fn reset_to_level_one(&mut self) {
        self.start_level(Level::FIRST);
    }

    fn start_level(&mut self, level: Level) {
        let seed = self.options.seed_for(level);
        let puzzle = self.generator.generate_level(level, seed);
        log::info!(
            "level {level} started: {} colors, seed {seed}",
            Difficulty::for_level(level).color_count
        );
        self.level = level;
        self.seed = Some(puzzle.seed);
        self.initial_arrangement.clone_from(&puzzle.arrangement);
        self.arrangement = puzzle.arrangement;
        self.reset_progress();
    }

    fn reset_progress(&mut self) {
        self.history.clear();
        self.move_count = 0;
        self.selection = None;
        self.state = SessionState::Playing;
    }
}
