//! Construction defaults and speed limits for a [`Robot`](crate::Robot).

use crate::error::RobotError;
use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The legal step range for a single forward or backward move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedLimits {
    /// Smallest legal step count. Must be at least 1.
    pub min: u8,
    /// Largest legal step count.
    pub max: u8,
    /// Step count used by `queue_forward_default` / `queue_backward_default`.
    pub default: u8,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            min: 1,
            max: 3,
            default: 1,
        }
    }
}

impl SpeedLimits {
    pub fn contains(&self, steps: i64) -> bool {
        i64::from(self.min) <= steps && steps <= i64::from(self.max)
    }
}

/// Configuration for a newly constructed robot.
///
/// Every field has a default, so a TOML document only needs the keys it changes:
///
/// ```toml
/// origin = [2, 5]
/// heading = "WEST"
///
/// [speed]
/// max = 5
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Starting grid position. Default: `(0, 0)`.
    pub origin: IVec2,
    /// Starting heading. Default: `NORTH`.
    pub heading: Heading,
    pub speed: SpeedLimits,
}

impl RobotConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, RobotError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RobotError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// Checks that the speed limits describe a non-empty range starting at 1 or above
    /// and that the default speed lies inside it.
    pub fn validate(&self) -> Result<(), RobotError> {
        let SpeedLimits { min, max, default } = self.speed;
        if min == 0 {
            return Err(RobotError::InvalidConfig(
                "speed.min must be at least 1".into(),
            ));
        }
        if min > max {
            return Err(RobotError::InvalidConfig(format!(
                "speed.min ({min}) exceeds speed.max ({max})"
            )));
        }
        if !(min..=max).contains(&default) {
            return Err(RobotError::InvalidConfig(format!(
                "speed.default ({default}) is outside {min}..={max}"
            )));
        }
        Ok(())
    }
}
