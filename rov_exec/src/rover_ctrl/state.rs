//! Implementations for the Rover state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

// Internal
use super::{Cmd, RoverError};
use crate::{
    loc::{Facing, Pose, Position},
    map::{Grid, ObstacleDetector, ObstacleSet},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A rover driving over a wrap-around grid.
pub struct Rover<D = ObstacleSet> {
    grid: Grid,
    detector: D,
    state: RoverState,
}

/// Everything a caller can read back from the rover after a command string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub pose: Pose,
    pub status: RoverStatus,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Outcome of the most recent command string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RoverStatus {
    /// Every command was executed.
    Ok,

    /// An obstacle blocked a step, the rover stopped before it.
    Fail { message: String, obstacle: Position },

    /// The command string couldn't be interpreted.
    Error { message: String },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rover<ObstacleSet> {
    /// Create a rover on a default sized grid with nothing in the way.
    pub fn on_default_grid(start: Position, facing: Facing) -> Self {
        Self::new(start, facing, Grid::default(), ObstacleSet::default())
    }
}

impl<D> Rover<D>
where
    D: ObstacleDetector,
{
    /// Create a new rover.
    ///
    /// The start position is wrapped into the grid. An obstacle on the start
    /// cell itself isn't checked for.
    pub fn new(start: Position, facing: Facing, grid: Grid, detector: D) -> Self {
        let pose = Pose::new(grid.normalize(start), facing);

        debug!("Rover created, {} on a {}x{} grid", pose, grid.width(), grid.height());

        Self {
            grid,
            detector,
            state: RoverState {
                pose,
                status: RoverStatus::Ok,
            },
        }
    }

    /// Execute a string of commands, one character per command.
    ///
    /// Execution stops at the first invalid character (`Error`) or the first
    /// step into an obstacle (`Fail`). Steps before that point are kept, the
    /// aborted step is not. The resulting status is returned and also
    /// remains readable through `status()` until the next call.
    pub fn execute(&mut self, cmds: &str) -> &RoverStatus {
        let mut pose = self.state.pose;

        let status = match self.step_all(&mut pose, cmds) {
            Ok(()) => RoverStatus::Ok,
            Err(e) => {
                debug!("Command string {:?} aborted: {}", cmds, e);
                RoverStatus::from(e)
            }
        };

        self.state = RoverState { pose, status };

        &self.state.status
    }

    pub fn pose(&self) -> Pose {
        self.state.pose
    }

    pub fn position(&self) -> Position {
        self.state.pose.position
    }

    pub fn facing(&self) -> Facing {
        self.state.pose.facing
    }

    pub fn status(&self) -> &RoverStatus {
        &self.state.status
    }

    pub fn state(&self) -> &RoverState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Step through every command, updating `pose` after each step that
    /// succeeds.
    fn step_all(&self, pose: &mut Pose, cmds: &str) -> Result<(), RoverError> {
        for c in cmds.chars() {
            let cmd = Cmd::from_char(c).ok_or(RoverError::InvalidCmd(c))?;
            *pose = self.step(*pose, cmd)?;
        }

        Ok(())
    }

    /// Calculate the pose after a single command, wrapped into the grid and
    /// checked against the obstacle detector.
    fn step(&self, pose: Pose, cmd: Cmd) -> Result<Pose, RoverError> {
        let candidate = cmd.apply(pose);
        let position = self.grid.normalize(candidate.position);

        if self.detector.is_obstacle(&position) {
            return Err(RoverError::ObstacleDetected(position));
        }

        let next = Pose::new(position, candidate.facing);
        trace!("{:?}: {} -> {}", cmd, pose, next);

        Ok(next)
    }
}

impl RoverStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, RoverStatus::Ok)
    }

    /// Human readable description of the status.
    pub fn message(&self) -> &str {
        match self {
            RoverStatus::Ok => "OK",
            RoverStatus::Fail { message, .. } | RoverStatus::Error { message } => message.as_str(),
        }
    }
}

impl Default for RoverStatus {
    fn default() -> Self {
        RoverStatus::Ok
    }
}

impl From<RoverError> for RoverStatus {
    fn from(e: RoverError) -> Self {
        let message = e.to_string();
        match e {
            RoverError::InvalidCmd(_) => RoverStatus::Error { message },
            RoverError::ObstacleDetected(obstacle) => RoverStatus::Fail { message, obstacle },
        }
    }
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn rover_with(
        start: (i32, i32),
        facing: Facing,
        size: (i32, i32),
        obstacles: &[(i32, i32)],
    ) -> Rover {
        Rover::new(
            Position::new(start.0, start.1),
            facing,
            Grid::new(size.0, size.1),
            ObstacleSet::new(obstacles.iter().map(|&(x, y)| Position::new(x, y))),
        )
    }

    #[test]
    fn test_move_one_step_forward() {
        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::East);

        assert_eq!(rover.execute("f"), &RoverStatus::Ok);
        assert_eq!(rover.position(), Position::new(1, 0));
        assert_eq!(rover.facing(), Facing::East);
    }

    #[test]
    fn test_move_one_step_backward() {
        let mut rover = Rover::on_default_grid(Position::new(0, 1), Facing::North);

        rover.execute("b");

        assert_eq!(rover.position(), Position::new(0, 0));
        assert_eq!(rover.facing(), Facing::North);
        assert!(rover.status().is_ok());
    }

    #[test]
    fn test_turn_right() {
        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::North);
        rover.execute("r");
        assert_eq!(rover.pose(), Pose::new(Position::new(0, 0), Facing::East));

        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::East);
        rover.execute("r");
        assert_eq!(rover.facing(), Facing::South);
        assert!(rover.status().is_ok());
    }

    #[test]
    fn test_wrap_over_top_edge() {
        let mut rover = rover_with((0, 9), Facing::North, (10, 10), &[]);

        rover.execute("f");

        assert_eq!(rover.position(), Position::new(0, 0));
        assert!(rover.status().is_ok());
    }

    #[test]
    fn test_wrap_under_bottom_edge() {
        let mut rover = rover_with((0, 0), Facing::North, (10, 10), &[]);

        rover.execute("b");

        assert_eq!(rover.position(), Position::new(0, 9));
        assert!(rover.status().is_ok());
    }

    #[test]
    fn test_start_is_normalized() {
        let rover = rover_with((-1, 12), Facing::South, (8, 8), &[]);
        assert_eq!(rover.position(), Position::new(7, 4));
        assert!(rover.status().is_ok());
    }

    #[test]
    fn test_respond_to_obstacle() {
        let mut rover = rover_with((0, 0), Facing::North, (10, 10), &[(0, 1)]);

        rover.execute("f");

        assert_eq!(rover.pose(), Pose::new(Position::new(0, 0), Facing::North));
        assert_eq!(
            rover.status(),
            &RoverStatus::Fail {
                message: String::from("obstacle detected at: (0, 1)"),
                obstacle: Position::new(0, 1),
            }
        );
    }

    #[test]
    fn test_obstacle_blocks_the_step_onto_it() {
        let mut rover = rover_with((0, 0), Facing::East, (8, 8), &[(1, 0)]);

        rover.execute("f");

        assert_eq!(rover.pose(), Pose::new(Position::new(0, 0), Facing::East));
        match rover.status() {
            RoverStatus::Fail { obstacle, .. } => assert_eq!(*obstacle, Position::new(1, 0)),
            s => panic!("Expected Fail, got {:?}", s),
        }
    }

    #[test]
    fn test_obstacle_keeps_earlier_steps() {
        let mut rover = rover_with((0, 0), Facing::East, (8, 8), &[(1, 1)]);

        rover.execute("flf");

        // "f" and "l" are committed, the last "f" would land on (1, 1)
        assert_eq!(rover.pose(), Pose::new(Position::new(1, 0), Facing::North));
        match rover.status() {
            RoverStatus::Fail { obstacle, message } => {
                assert_eq!(*obstacle, Position::new(1, 1));
                assert_eq!(message, "obstacle detected at: (1, 1)");
            }
            s => panic!("Expected Fail, got {:?}", s),
        }
    }

    #[test]
    fn test_obstacle_across_the_wrap() {
        let mut rover = rover_with((0, 0), Facing::West, (8, 8), &[(7, 0)]);

        rover.execute("f");

        assert_eq!(rover.position(), Position::new(0, 0));
        match rover.status() {
            RoverStatus::Fail { obstacle, .. } => assert_eq!(*obstacle, Position::new(7, 0)),
            s => panic!("Expected Fail, got {:?}", s),
        }
    }

    #[test]
    fn test_invalid_cmd() {
        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::North);

        rover.execute("?");

        assert_eq!(
            rover.status(),
            &RoverStatus::Error {
                message: String::from("invalid command character: ?")
            }
        );
        assert_eq!(rover.pose(), Pose::new(Position::new(0, 0), Facing::North));
    }

    #[test]
    fn test_invalid_cmd_keeps_earlier_steps() {
        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::North);

        rover.execute("ffrxff");

        assert_eq!(rover.pose(), Pose::new(Position::new(0, 2), Facing::East));
        assert!(matches!(rover.status(), RoverStatus::Error { .. }));
        assert_eq!(rover.status().message(), "invalid command character: x");
    }

    #[test]
    fn test_status_reset_on_each_call() {
        let mut rover = rover_with((0, 0), Facing::North, (10, 10), &[(0, 1)]);

        rover.execute("f");
        assert!(matches!(rover.status(), RoverStatus::Fail { .. }));

        rover.execute("rf");
        assert!(rover.status().is_ok());
        assert_eq!(rover.pose(), Pose::new(Position::new(1, 0), Facing::East));

        rover.execute("z");
        assert!(matches!(rover.status(), RoverStatus::Error { .. }));

        rover.execute("");
        assert!(rover.status().is_ok());
        assert_eq!(rover.position(), Position::new(1, 0));
    }

    #[test]
    fn test_case_insensitive() {
        let mut lower = Rover::on_default_grid(Position::new(3, 3), Facing::South);
        let mut upper = Rover::on_default_grid(Position::new(3, 3), Facing::South);

        lower.execute("fflbr");
        upper.execute("FFLBR");

        assert_eq!(lower.state(), upper.state());
        assert!(upper.status().is_ok());
    }

    #[test]
    fn test_identical_rovers_agree() {
        let cmds = "ffrfflbbbrrflfffffffffffb";

        let mut a = rover_with((2, 5), Facing::West, (6, 9), &[(4, 4), (0, 0)]);
        let mut b = rover_with((2, 5), Facing::West, (6, 9), &[(4, 4), (0, 0)]);

        a.execute(cmds);
        b.execute(cmds);

        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_position_always_in_grid() {
        let mut rover = rover_with((0, 0), Facing::North, (3, 5), &[]);

        for cmds in &["bbbbbbb", "lffffffff", "rbbbbbbbbbbb", "ffffffffffff", "lblblblb"] {
            rover.execute(cmds);
            assert!(rover.grid().contains(rover.position()));
            assert!(rover.status().is_ok());
        }
    }

    #[test]
    fn test_forward_backward_round_trip() {
        for &facing in &[Facing::North, Facing::East, Facing::South, Facing::West] {
            let mut rover = rover_with((0, 0), facing, (4, 4), &[]);
            let start = rover.pose();

            rover.execute("fb");
            assert_eq!(rover.pose(), start);

            rover.execute("bbbbbffffff");
            rover.execute("b");
            assert_eq!(rover.pose(), start);
        }
    }

    #[test]
    fn test_status_serialization() {
        let status = RoverStatus::from(RoverError::ObstacleDetected(Position::new(1, 1)));
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["code"], "Fail");
        assert_eq!(json["message"], "obstacle detected at: (1, 1)");
        assert_eq!(json["obstacle"]["x"], 1);

        let back: RoverStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }
}
