//! The read-eval-render loop.

use std::io::{self, BufRead, Write};

use watersort_game::{SelectOutcome, Session, UndoOutcome};

use crate::{
    Command,
    render::{self, Palette},
};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Redraw, optionally showing a one-line notice first.
    Redraw(Option<String>),
    /// Print a message without redrawing.
    Message(String),
    /// Stop the loop.
    Quit,
}

/// Terminal front end around one [`Session`].
#[derive(Debug)]
pub struct App {
    session: Session,
    palette: Palette,
}

impl App {
    /// Creates a front end for `session`.
    #[must_use]
    pub fn new(session: Session, palette: Palette) -> Self {
        Self { session, palette }
    }

    /// Returns the session being played.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies `command` to the session.
    pub fn execute(&mut self, command: Command) -> Response {
        let notice = match command {
            Command::Select(index) => match self.session.select_container(index) {
                Ok(SelectOutcome::Rejected(err)) => Some(format!("can't pour: {err}")),
                Ok(
                    SelectOutcome::Selected(_)
                    | SelectOutcome::Deselected
                    | SelectOutcome::Poured(_),
                ) => None,
                Err(err) => Some(err.to_string()),
            },
            Command::Undo => match self.session.undo() {
                Ok(UndoOutcome::Undone) => None,
                Ok(UndoOutcome::NothingToUndo) => Some("nothing to undo".to_owned()),
                Err(err) => Some(err.to_string()),
            },
            Command::Retry => {
                self.session.retry_level();
                None
            }
            Command::Next => self
                .session
                .advance_level()
                .err()
                .map(|err| err.to_string()),
            Command::Reset => {
                self.session.reset_to_level_one();
                None
            }
            Command::Help => return Response::Message(Command::HELP.to_owned()),
            Command::Quit => return Response::Quit,
        };
        Response::Redraw(notice)
    }

    /// Runs the loop until `input` ends or the player quits.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.draw(&mut output)?;
        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(command) => match self.execute(command) {
                    Response::Redraw(notice) => {
                        if let Some(notice) = notice {
                            writeln!(output, "! {notice}")?;
                        }
                        self.draw(&mut output)?;
                    }
                    Response::Message(message) => {
                        writeln!(output, "{message}")?;
                        prompt(&mut output)?;
                    }
                    Response::Quit => break,
                },
                Err(err) => {
                    writeln!(output, "! {err}")?;
                    prompt(&mut output)?;
                }
            }
        }
        log::info!(
            "leaving at level {} after {} moves",
            self.session.level(),
            self.session.move_count()
        );
        Ok(())
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        write!(output, "{}", render::render(&self.session, self.palette))?;
        prompt(output)
    }
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
