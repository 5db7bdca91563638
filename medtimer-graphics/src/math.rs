//! Degree-based trigonometry helpers.
//!
//! The turtle convention throughout: angles in degrees, 0 = east,
//! counter-clockwise positive.

use crate::types::Scalar;

/// Sine of an angle in degrees.
#[inline]
pub fn sind(degrees: Scalar) -> Scalar {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cosd(degrees: Scalar) -> Scalar {
    degrees.to_radians().cos()
}

/// Normalize an angle to [0, 360).
pub fn normalize_deg(degrees: Scalar) -> Scalar {
    let d = degrees % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

/// Unit vector for a heading in degrees.
#[inline]
pub fn unit(degrees: Scalar) -> kurbo::Vec2 {
    kurbo::Vec2::new(cosd(degrees), sind(degrees))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
