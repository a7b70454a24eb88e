//! Player commands.

use std::str::FromStr;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a container (zero-based index).
    Select(usize),
    /// Take back the last pour.
    Undo,
    /// Restart the current level.
    Retry,
    /// Go to the next level.
    Next,
    /// Start over from level 1.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Help text listing every command.
    pub const HELP: &str = "\
commands:
  <n>     select container n (1-based); select another to pour, the same to cancel
  u       undo the last pour
  r       retry this level
  n       next level (after solving)
  reset   start over from level 1
  h, ?    show this help
  q       quit";
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let command = match s.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "u" | "undo" => Self::Undo,
            "r" | "retry" => Self::Retry,
            "n" | "next" => Self::Next,
            "reset" => Self::Reset,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(0) => return Err(ParseCommandError::ZeroContainer),
                Ok(number) => Self::Select(number - 1),
                Err(_) => {
                    return Err(ParseCommandError::Unknown {
                        input: s.to_owned(),
                    });
                }
            },
        };
        Ok(command)
    }
}

/// Errors that can occur when parsing a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    /// The line was blank.
    #[display("type a command, or h for help")]
    Empty,
    /// Container numbers start at 1.
    #[display("containers are numbered from 1")]
    ZeroContainer,
    /// The line matched no command.
    #[display("unknown command {input:?}, type h for help")]
    Unknown {
        /// The trimmed input line.
        input: String,
    },
}
