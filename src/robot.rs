//! The grid robot: pose, command queue, and deferred replay.

use crate::command::{RobotCommand, Speed};
use crate::config::{RobotConfig, SpeedLimits};
use crate::error::RobotError;
use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A robot on an unbounded integer grid.
///
/// Commands are queued first and only take effect when [`execute`](Self::execute)
/// replays the queue. Replaying mutates the pose, so executing the same queue twice
/// applies it twice, each time starting from wherever the previous run left off.
#[derive(Clone, Debug)]
pub struct Robot {
    position: IVec2,
    heading: Heading,
    commands: Vec<RobotCommand>,
    speed: SpeedLimits,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot {
    /// A robot at `(0, 0)` facing `NORTH` with an empty queue.
    pub fn new() -> Self {
        Self::with_config(&RobotConfig::default())
    }

    /// A robot placed at the configured origin and heading, using the configured speed limits.
    pub fn with_config(config: &RobotConfig) -> Self {
        Self {
            position: config.origin,
            heading: config.heading,
            commands: Vec::new(),
            speed: config.speed,
        }
    }

    /// A robot at `(x, y)` facing `heading`.
    pub fn at(x: i32, y: i32, heading: Heading) -> Self {
        Self::with_config(&RobotConfig {
            origin: IVec2::new(x, y),
            heading,
            ..Default::default()
        })
    }

    /// Like [`at`](Self::at), but the heading is a raw cycle index.
    ///
    /// An index outside `0..4` is not an error: the robot faces `NORTH` instead.
    pub fn from_raw_heading(x: i32, y: i32, heading: i32) -> Self {
        let heading = Heading::from_index(heading).unwrap_or_else(|| {
            tracing::debug!(index = heading, "unknown heading index, facing NORTH");
            Heading::North
        });
        Self::at(x, y, heading)
    }

    /// Like [`at`](Self::at), but the heading is given by name. Unknown names face `NORTH`.
    pub fn from_heading_name(x: i32, y: i32, heading: &str) -> Self {
        Self::at(x, y, Heading::from_name_or_north(heading))
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed_limits(&self) -> &SpeedLimits {
        &self.speed
    }

    /// The queued commands in insertion order.
    pub fn commands(&self) -> &[RobotCommand] {
        &self.commands
    }

    /// Rotates the heading `delta` places around the compass; `+1` is right, `-1` is left.
    pub fn update_heading(&mut self, delta: i32) {
        self.heading = self.heading.rotated(delta);
    }

    pub fn queue_left_turn(&mut self) {
        self.commands.push(RobotCommand::TurnLeft);
    }

    pub fn queue_right_turn(&mut self) {
        self.commands.push(RobotCommand::TurnRight);
    }

    /// Queues a forward move of `steps` cells.
    ///
    /// A step count outside the speed limits is logged and returned as
    /// [`RobotError::InvalidSpeed`]; nothing is queued and the robot stays usable.
    pub fn queue_forward(&mut self, steps: i64) -> Result<(), RobotError> {
        let speed = self.checked_speed(steps)?;
        self.commands.push(RobotCommand::MoveForward(speed));
        Ok(())
    }

    /// Queues a forward move at the default speed.
    pub fn queue_forward_default(&mut self) -> Result<(), RobotError> {
        self.queue_forward(i64::from(self.speed.default))
    }

    /// Queues a backward move of `steps` cells. Rejection rules match [`queue_forward`](Self::queue_forward).
    pub fn queue_backward(&mut self, steps: i64) -> Result<(), RobotError> {
        let speed = self.checked_speed(steps)?;
        self.commands.push(RobotCommand::MoveBackward(speed));
        Ok(())
    }

    pub fn queue_backward_default(&mut self) -> Result<(), RobotError> {
        self.queue_backward(i64::from(self.speed.default))
    }

    fn checked_speed(&self, steps: i64) -> Result<Speed, RobotError> {
        Speed::new(steps, &self.speed).inspect_err(|e| tracing::warn!("{e}"))
    }

    /// Replays the whole queue in order, updating heading and position.
    ///
    /// Moves use the heading in effect when they are reached during the replay,
    /// not the heading at the time they were queued. Coordinates wrap around at
    /// the `i32` bounds.
    pub fn execute(&mut self) {
        tracing::debug!(
            commands = self.commands.len(),
            heading = %self.heading,
            x = self.position.x,
            y = self.position.y,
            "replaying command queue"
        );
        for command in &self.commands {
            match *command {
                RobotCommand::TurnLeft => self.heading = self.heading.rotated(-1),
                RobotCommand::TurnRight => self.heading = self.heading.rotated(1),
                RobotCommand::MoveForward(speed) => {
                    self.position = self.position.wrapping_add(self.heading.unit() * speed.get());
                }
                RobotCommand::MoveBackward(speed) => {
                    self.position = self.position.wrapping_sub(self.heading.unit() * speed.get());
                }
            }
        }
    }

    /// Snapshot of the current heading and position.
    pub fn report_state(&self) -> RobotReport {
        RobotReport {
            heading: self.heading,
            position: self.position,
        }
    }
}

/// The observable state of a [`Robot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    pub heading: Heading,
    pub position: IVec2,
}

impl fmt::Display for RobotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Now facing \"{}\" at ({},{})",
            self.heading, self.position.x, self.position.y
        )
    }
}
