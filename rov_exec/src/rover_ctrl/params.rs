//! Parameters structure for RoverCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::warn;
use serde::Deserialize;

use super::Rover;
use crate::{
    loc::{Facing, Position},
    map::{Grid, ObstacleSet, DEFAULT_HEIGHT, DEFAULT_WIDTH},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters describing a rover scenario.
///
/// Loaded from a TOML file such as:
///
/// ```toml
/// obstacles = [{ x = 1, y = 1 }]
///
/// [grid]
/// width = 8
/// height = 8
///
/// [start]
/// x = 0
/// y = 0
/// facing = "East"
/// ```
#[derive(Debug, Deserialize)]
pub struct Params {
    /// Size of the grid, the default size is used if not given.
    #[serde(default)]
    pub grid: GridParams,

    /// Where the rover starts.
    pub start: StartParams,

    /// Blocked cells.
    #[serde(default)]
    pub obstacles: Option<Vec<Position>>,
}

/// Grid size, each dimension falls back to its default on its own.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Deserialize)]
pub struct StartParams {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Params {
    /// Build the rover these parameters describe.
    ///
    /// Obstacle positions are wrapped into the grid so that they can be
    /// matched against the rover's normalised positions.
    pub fn build(&self) -> Rover {
        let grid = Grid::new(self.grid.width, self.grid.height);

        let obstacles = self.obstacles.as_ref().map(|obs| {
            obs.iter()
                .map(|&o| {
                    let n = grid.normalize(o);
                    if n != o {
                        warn!("Obstacle at {} is outside the grid, moved to {}", o, n);
                    }
                    n
                })
                .collect::<Vec<_>>()
        });

        Rover::new(
            Position::new(self.start.x, self.start.y),
            self.start.facing,
            grid,
            ObstacleSet::from_option(obstacles),
        )
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
