//! Error type shared by the robot, its configuration and the script front end.

use thiserror::Error;

/// Errors produced while configuring a robot or queuing commands on it.
///
/// Only [`RobotError::InvalidSpeed`] can come out of the robot itself, and it is
/// recoverable: the rejected command is simply not queued. The interpreter adds
/// [`RobotError::FractionalSpeed`] for symbol parameters that are not whole numbers.
#[derive(Debug, Error)]
pub enum RobotError {
    #[error(
        "The given speed is not legal. The step size can only range from {min} up to {max} (got {steps})"
    )]
    InvalidSpeed { steps: i64, min: u8, max: u8 },

    #[error("The given speed is not legal. The step size must be a whole number (got {value})")]
    FractionalSpeed { value: f64 },

    #[error("invalid robot configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read robot configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse robot configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unexpected {found:?} at offset {offset} in command script")]
    Script { offset: usize, found: char },

    #[error("command script ended inside a step count")]
    ScriptEnd,

    #[error("symbios rejected symbol {0:?}")]
    SymbolTable(String),
}

impl RobotError {
    /// Returns `true` for the speed-range rejection raised at queue time.
    pub fn is_invalid_speed(&self) -> bool {
        matches!(self, Self::InvalidSpeed { .. })
    }
}
