//! Core data structures and rules for water sort puzzles.
//!
//! This crate provides the puzzle model shared by generation and game
//! management, together with the two pieces of pure rule logic: pouring and
//! victory detection.
//!
//! # Overview
//!
//! 1. **Model types**
//!    - [`color`]: The fixed palette of liquid colors.
//!    - [`container`]: A fixed-capacity stack of color units.
//!    - [`arrangement`]: The ordered set of containers of one puzzle.
//!    - [`level`]: Positive level numbers used for progression.
//!
//! 2. **Rules**
//!    - [`pour`]: Validates and applies a pour between two containers.
//!    - [`victory`]: Decides whether an arrangement is sorted.
//!
//! All types also support a compact text notation, used by tests and
//! terminal front ends: a container is written as its unit symbols from
//! bottom to top (`RRBY`), an empty container as `-`, and an arrangement as
//! its containers separated by spaces.
//!
//! # Examples
//!
//! ```
//! use watersort_core::{Arrangement, Color, PourError};
//!
//! let mut arrangement: Arrangement = "RRBY YBRR - -".parse()?;
//!
//! let pour = arrangement.pour(0, 2).expect("destination is empty");
//! assert_eq!(pour.color, Color::Yellow);
//! assert_eq!(pour.amount, 1);
//! assert_eq!(arrangement.to_string(), "RRB YBRR Y -");
//!
//! // Blue cannot go onto yellow.
//! assert_eq!(arrangement.pour(0, 2), Err(PourError::ColorMismatch));
//! assert!(!arrangement.is_solved());
//! # Ok::<(), watersort_core::ParseArrangementError>(())
//! ```

pub mod arrangement;
pub mod color;
pub mod container;
pub mod level;
pub mod pour;
pub mod victory;

pub use self::{
    arrangement::{Arrangement, IndexOutOfRange, ParseArrangementError},
    color::{Color, ParseColorError},
    container::{Container, ContainerError, ParseContainerError},
    level::Level,
    pour::{Pour, PourError},
};
