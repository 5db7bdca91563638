//! The adherence score and the reward it selects.
//!
//! Adherence is computed by the application layer (doses taken over
//! doses expected in the trailing 7-day window); this module only
//! consumes the resulting percentage.

use medtimer_graphics::types::Scalar;

use crate::decor::{Decor, SMILEY, TROPHY};
use crate::error::SceneError;

/// A validated adherence percentage, 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adherence(u8);

impl Adherence {
    /// Validate a raw percentage.
    pub fn new(percent: u8) -> Result<Self, SceneError> {
        if percent > 100 {
            return Err(SceneError::InvalidAdherence(percent));
        }
        Ok(Self(percent))
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Sweep of the gauge's accent arc: `360 × pct / 100` degrees.
    #[must_use]
    pub fn arc_extent(self) -> Scalar {
        360.0 * Scalar::from(self.0) / 100.0
    }

    /// Which reward composite this score earns, if any.
    #[must_use]
    pub const fn reward(self) -> Option<Reward> {
        match self.0 {
            90..=100 => Some(Reward::Trophy),
            50..=89 => Some(Reward::Smiley),
            _ => None,
        }
    }
}

/// Decorative reward shown next to the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Trophy,
    Smiley,
}

impl Reward {
    /// The shape table for this reward.
    #[must_use]
    pub const fn decor(self) -> &'static [Decor] {
        match self {
            Self::Trophy => TROPHY,
            Self::Smiley => SMILEY,
        }
    }
}
