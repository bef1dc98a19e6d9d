//! Drive output volume
//!
//! The drive exposes one 8-bit level per channel. Only the first two
//! channels (left/right) are used.

use serde::{Deserialize, Serialize};

/// Per-channel output volume (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Volume {
    /// Channel 0
    pub left: u8,

    /// Channel 1
    pub right: u8,
}

impl Volume {
    /// Highest level a channel accepts
    pub const MAX: u8 = u8::MAX;

    /// Create a volume from in-range levels
    pub fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Create a volume from arbitrary levels, clamping each into 0-255
    ///
    /// Out-of-range input is corrected, never rejected.
    pub fn clamped(left: i64, right: i64) -> Self {
        Self {
            left: Self::clamp_level(left),
            right: Self::clamp_level(right),
        }
    }

    fn clamp_level(level: i64) -> u8 {
        level.clamp(0, Self::MAX as i64) as u8
    }
}

impl From<(u8, u8)> for Volume {
    fn from((left, right): (u8, u8)) -> Self {
        Self::new(left, right)
    }
}
