//! # Map module
//!
//! The surface the rover drives on: the wrap-around grid and what is on it.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod grid;
mod obstacle;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use grid::*;
pub use obstacle::*;
