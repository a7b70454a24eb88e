//! Terminal front end for water sort sessions.
//!
//! The front end reads one command per line, forwards it to a
//! [`Session`](watersort_game::Session), and redraws the puzzle. It holds no
//! game logic of its own.

pub mod app;
pub mod args;
pub mod command;
pub mod render;

pub use self::{
    app::App,
    args::Args,
    command::{Command, ParseCommandError},
};
