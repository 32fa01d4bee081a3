//! # Rover library.
//!
//! This library allows other crates in the workspace to access items defined inside the rover
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Localisation module - where the rover is and which way it's pointing
pub mod loc;

/// Map module - the wrap-around grid and the obstacles on it
pub mod map;

/// Rover control module - converts command strings into steps across the grid
pub mod rover_ctrl;
