//! Compass headings on the grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four directions the robot can face.
///
/// The variants form a fixed cycle, `North -> East -> South -> West -> North`,
/// and their discriminants are the cycle indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings in cycle order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in the cycle (`0..4`).
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Looks up a heading by cycle index. Returns `None` outside `0..4`.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Looks up a heading by name, ignoring ASCII case (`"north"`, `"WEST"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`from_name`](Self::from_name), but unknown names fall back to `NORTH`.
    pub fn from_name_or_north(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown heading name, facing NORTH");
            Heading::North
        })
    }

    /// Moves `delta` places around the cycle. `+1` is a right turn, `-1` a left turn.
    ///
    /// Wraps in both directions, so any `delta` lands on a valid heading.
    pub fn rotated(self, delta: i32) -> Self {
        let index = (i64::from(self.index()) + i64::from(delta)).rem_euclid(4);
        Self::ALL[index as usize]
    }

    /// Unit displacement for one step forward on the grid.
    pub fn unit(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
