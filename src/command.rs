//! Queued command records and the operations symbols map onto.

use crate::config::SpeedLimits;
use crate::error::RobotError;
use serde::Serialize;
use std::fmt;

/// A step count that has already been checked against the robot's [`SpeedLimits`].
///
/// [`Speed::new`] is the only way to build one; it is serializable but not
/// deserializable, since the limits it was checked against are not part of the value.
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<grid_rover::Speed>();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Speed(u8);

impl Speed {
    /// Validates `steps` against `limits`. Out-of-range values are rejected, never clamped.
    pub fn new(steps: i64, limits: &SpeedLimits) -> Result<Self, RobotError> {
        if limits.contains(steps) {
            // `contains` bounds steps by a u8 maximum.
            Ok(Self(steps as u8))
        } else {
            Err(RobotError::InvalidSpeed {
                steps,
                min: limits.min,
                max: limits.max,
            })
        }
    }

    pub fn get(self) -> i32 {
        i32::from(self.0)
    }
}

/// A single entry in the robot's command queue.
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<grid_rover::RobotCommand>();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RobotCommand {
    TurnLeft,
    TurnRight,
    MoveForward(Speed),
    MoveBackward(Speed),
}

impl fmt::Display for RobotCommand {
    /// Compact form: `l`, `r`, `f2`, `b1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotCommand::TurnLeft => f.write_str("l"),
            RobotCommand::TurnRight => f.write_str("r"),
            RobotCommand::MoveForward(s) => write!(f, "f{}", s.get()),
            RobotCommand::MoveBackward(s) => write!(f, "b{}", s.get()),
        }
    }
}

/// What a symbol asks the robot to queue.
///
/// Move operations take their step count from the symbol's first parameter,
/// falling back to the configured default speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Queue a left turn (`L`).
    TurnLeft,
    /// Queue a right turn (`R`).
    TurnRight,
    /// Queue a forward move (`F`).
    Forward,
    /// Queue a backward move (`B`).
    Backward,
    /// No-op: symbol has no registered meaning.
    Ignore,
}
