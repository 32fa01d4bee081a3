//! Commands passed into RoverCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::loc::Pose;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A single step the rover can be told to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Move one cell in the direction the rover is facing.
    Forward,
    /// Move one cell away from the direction the rover is facing, without
    /// turning round.
    Backward,
    /// Turn 90 degrees anticlockwise on the spot.
    TurnLeft,
    /// Turn 90 degrees clockwise on the spot.
    TurnRight,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Cmd {
    /// Look up the command for a character code, ignoring case.
    ///
    /// Returns `None` if the character isn't a command.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'f' => Some(Cmd::Forward),
            'b' => Some(Cmd::Backward),
            'l' => Some(Cmd::TurnLeft),
            'r' => Some(Cmd::TurnRight),
            _ => None,
        }
    }

    /// Calculate the pose reached by executing this command from `pose`.
    ///
    /// The result is not wrapped into the grid and isn't checked for
    /// obstacles, that's the job of the caller.
    pub fn apply(self, pose: Pose) -> Pose {
        match self {
            Cmd::Forward => Pose {
                position: pose.position.offset(pose.facing.unit_vector()),
                ..pose
            },
            Cmd::Backward => {
                let (dx, dy) = pose.facing.unit_vector();
                Pose {
                    position: pose.position.offset((-dx, -dy)),
                    ..pose
                }
            }
            Cmd::TurnLeft => Pose {
                facing: pose.facing.left(),
                ..pose
            },
            Cmd::TurnRight => Pose {
                facing: pose.facing.right(),
                ..pose
            },
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
