//! Rover control module
//!
//! Interprets strings of single character commands and drives the rover
//! around the grid one step at a time, stopping at the first command that
//! can't be executed.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use params::*;
pub use state::*;

use crate::loc::Position;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Reasons a command string is aborted part way through.
///
/// These never escape `Rover::execute`, they are converted into the rover's
/// status instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoverError {
    #[error("invalid command character: {0}")]
    InvalidCmd(char),

    #[error("obstacle detected at: {0}")]
    ObstacleDetected(Position),
}
