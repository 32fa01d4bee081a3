//! # Grid
//!
//! [`Grid`] describes the toroidal surface the rover drives over. Leaving the
//! grid on one edge brings the rover back in on the opposite edge.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::warn;
use serde::{Deserialize, Serialize};

use crate::loc::Position;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Width used when none (or an invalid one) is given.
pub const DEFAULT_WIDTH: i32 = 10;

/// Height used when none (or an invalid one) is given.
pub const DEFAULT_HEIGHT: i32 = 10;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A fixed size wrap-around grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Grid {
    /// Create a new grid of the given size.
    ///
    /// If either dimension is not positive both are replaced by the default size, a partially
    /// valid size is never kept.
    pub fn new(width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            warn!(
                "Invalid grid size {}x{}, using the default {}x{}",
                width, height, DEFAULT_WIDTH, DEFAULT_HEIGHT
            );
            return Self::default();
        }

        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Wrap the given position into `[0, width) x [0, height)`.
    ///
    /// Negative coordinates wrap to the high end, so `-1` becomes `width - 1`.
    pub fn normalize(&self, position: Position) -> Position {
        Position {
            x: position.x.rem_euclid(self.width),
            y: position.y.rem_euclid(self.height),
        }
    }

    /// True if the position is already in normal form for this grid.
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
