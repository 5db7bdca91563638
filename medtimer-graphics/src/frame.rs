//! Layout-to-canvas coordinate conversion.
//!
//! UI layout uses top-left-origin, Y-down coordinates (typical screen
//! layout); the turtle engine uses center-origin, Y-up. Every shape
//! anchor goes through this conversion exactly once, with no rounding,
//! so nested shapes stay aligned.

use kurbo::Point;

use crate::error::{GraphicsError, GraphicsResult};
use crate::types::Scalar;

/// A layout canvas of known size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    width: Scalar,
    height: Scalar,
}

impl Frame {
    /// A frame with the given layout dimensions. Dimensions must be
    /// finite and strictly positive.
    pub fn new(width: Scalar, height: Scalar) -> GraphicsResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GraphicsError::InvalidGeometry(format!(
                "canvas size must be finite and positive, got {width}×{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }

    /// Layout point (top-left origin, Y down) → canvas point
    /// (center origin, Y up).
    #[must_use]
    pub fn to_canvas(&self, layout: Point) -> Point {
        Point::new(layout.x - self.width / 2.0, self.height / 2.0 - layout.y)
    }

    /// Exact inverse of [`Frame::to_canvas`].
    #[must_use]
    pub fn to_layout(&self, canvas: Point) -> Point {
        Point::new(canvas.x + self.width / 2.0, self.height / 2.0 - canvas.y)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
