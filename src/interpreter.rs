//! Interpreter that queues robot commands from an L-System symbol sequence.
//!
//! The entry point is [`CommandInterpreter`]. Register symbol-to-operation mappings via
//! [`CommandInterpreter::set_op`] or [`CommandInterpreter::populate_standard_symbols`],
//! then call [`CommandInterpreter::queue_state`] with a [`symbios::SymbiosState`] and
//! the [`Robot`] that should receive the commands.

use crate::command::RoverOp;
use crate::error::RobotError;
use crate::robot::Robot;
use symbios::{SymbiosState, SymbolTable};

/// Outcome of queuing a symbol sequence onto a robot.
#[derive(Debug, Default)]
pub struct QueueSummary {
    /// Commands appended to the robot's queue.
    pub queued: usize,
    /// Symbols with no registered operation.
    pub ignored: usize,
    /// Moves refused because their step count was fractional or out of range, in symbol order.
    pub rejected: Vec<RobotError>,
}

impl QueueSummary {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Maps symbol IDs onto queuing operations.
#[derive(Clone, Debug, Default)]
pub struct CommandInterpreter {
    op_map: Vec<RoverOp>,
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty symbol map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    ///
    /// `map` is indexed by symbol ID as returned by [`symbios::SymbolTable`].
    /// Any ID that falls outside the slice is treated as [`RoverOp::Ignore`].
    pub fn with_map(mut self, map: Vec<RoverOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RoverOp`] to a symbol ID, growing the map with
    /// [`RoverOp::Ignore`] as needed.
    pub fn set_op(&mut self, sym_id: u16, op: RoverOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, RoverOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Returns the operation registered for `sym_id`.
    pub fn op(&self, sym_id: u16) -> RoverOp {
        self.op_map
            .get(sym_id as usize)
            .copied()
            .unwrap_or(RoverOp::Ignore)
    }

    /// Registers `L`, `R`, `F`, `B` (either case) for every one of them the
    /// interner knows about. Missing symbols are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("L", RoverOp::TurnLeft),
            ("l", RoverOp::TurnLeft),
            ("R", RoverOp::TurnRight),
            ("r", RoverOp::TurnRight),
            ("F", RoverOp::Forward),
            ("f", RoverOp::Forward),
            ("B", RoverOp::Backward),
            ("b", RoverOp::Backward),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Walks every symbol in `state` in order and queues the matching command on `robot`.
    ///
    /// A move's step count is the symbol's first parameter, which must be a whole
    /// number; without one the robot's default speed is used. Fractional and
    /// out-of-range moves are collected in [`QueueSummary::rejected`] and the walk
    /// carries on. Nothing is executed.
    pub fn queue_state(&self, robot: &mut Robot, state: &SymbiosState) -> QueueSummary {
        let mut summary = QueueSummary::default();
        let default_steps = i64::from(robot.speed_limits().default);

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let param = view.params.first().copied();

            let queued = match self.op(view.sym) {
                RoverOp::TurnLeft => {
                    robot.queue_left_turn();
                    Ok(())
                }
                RoverOp::TurnRight => {
                    robot.queue_right_turn();
                    Ok(())
                }
                RoverOp::Forward => {
                    step_count(param, default_steps).and_then(|s| robot.queue_forward(s))
                }
                RoverOp::Backward => {
                    step_count(param, default_steps).and_then(|s| robot.queue_backward(s))
                }
                RoverOp::Ignore => {
                    summary.ignored += 1;
                    continue;
                }
            };

            match queued {
                Ok(()) => summary.queued += 1,
                Err(e) => summary.rejected.push(e),
            }
        }

        summary
    }
}

/// Converts a symbol parameter into a step count. Fractions are rejected rather than
/// truncated.
fn step_count(param: Option<f64>, default_steps: i64) -> Result<i64, RobotError> {
    match param {
        None => Ok(default_steps),
        // Out-of-range whole numbers saturate here and fail speed validation later.
        Some(x) if x.is_finite() && x.fract() == 0.0 => Ok(x as i64),
        Some(value) => {
            tracing::warn!(value, "step count is not a whole number");
            Err(RobotError::FractionalSpeed { value })
        }
    }
}
