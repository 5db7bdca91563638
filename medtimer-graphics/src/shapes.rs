//! Shape-composition helpers.
//!
//! Each shape is a descriptor struct that knows how to validate its
//! numeric input and emit itself through a [`Turtle`]. Descriptors are
//! pure value inputs: anchored in layout coordinates (top-left origin,
//! Y down) and converted through a [`Frame`] at every anchor point.
//!
//! Validation happens before any turtle call, so a rejected shape
//! leaves no partial geometry behind.

use kurbo::Point;

use crate::error::{GraphicsError, GraphicsResult};
use crate::frame::Frame;
use crate::turtle::Turtle;
use crate::types::{Color, Scalar, StrokeStyle};

/// Lift the pen, jump to a layout point, put the pen back down.
fn goto_layout(t: &mut Turtle, frame: &Frame, layout: Point) {
    t.pen_up();
    t.move_to(frame.to_canvas(layout));
    t.pen_down();
}

fn ensure_finite(name: &str, v: Scalar) -> GraphicsResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GraphicsError::InvalidGeometry(format!("{name} is {v}")))
    }
}

fn ensure_non_negative(name: &str, v: Scalar) -> GraphicsResult<()> {
    ensure_finite(name, v)?;
    if v < 0.0 {
        return Err(GraphicsError::InvalidGeometry(format!(
            "{name} must be non-negative, got {v}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rounded rectangle
// ---------------------------------------------------------------------------

/// A rounded rectangle anchored at a layout point.
///
/// Drawn as four straight edges joined by four 90° arcs, as one filled
/// and stroked loop. `radius = 0` degenerates to a plain rectangle
/// (the corner arcs become zero-length turns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
    pub radius: Scalar,
    pub stroke: Color,
    pub fill: Color,
    pub stroke_width: Scalar,
}

impl RoundedRect {
    fn validate(&self) -> GraphicsResult<()> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        ensure_non_negative("width", self.width)?;
        ensure_non_negative("height", self.height)?;
        ensure_non_negative("radius", self.radius)?;
        ensure_non_negative("stroke_width", self.stroke_width)?;
        if 2.0 * self.radius > self.width.min(self.height) {
            return Err(GraphicsError::InvalidGeometry(format!(
                "corner radius {} exceeds half the smaller side of {}×{}",
                self.radius, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Emit the rectangle through the turtle.
    pub fn draw(&self, frame: &Frame, t: &mut Turtle) -> GraphicsResult<()> {
        self.validate()?;
        let r = self.radius;

        // Start on the top edge, inset by the corner radius.
        goto_layout(t, frame, Point::new(self.x + r, self.y));
        t.set_stroke(StrokeStyle {
            color: self.stroke,
            width: self.stroke_width,
        });
        t.set_fill(self.fill);
        t.begin_fill()?;

        t.set_heading(0.0);
        t.forward(self.width - 2.0 * r);
        t.arc(r, 90.0);
        t.forward(self.height - 2.0 * r);
        t.arc(r, 90.0);
        t.forward(self.width - 2.0 * r);
        t.arc(r, 90.0);
        t.forward(self.height - 2.0 * r);
        t.arc(r, 90.0);

        t.end_fill()
    }
}

// ---------------------------------------------------------------------------
// Ring / arc gauge
// ---------------------------------------------------------------------------

/// A ring or partial arc of a given thickness, stroked, never filled.
///
/// The pen starts at the layout point `(center_x, center_y - radius)`
/// (the source convention) and draws one arc of `extent` degrees from
/// `start_heading`. Used twice per gauge: a full-circle track in a
/// neutral color, then an accent arc whose extent encodes a
/// percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center_x: Scalar,
    pub center_y: Scalar,
    pub radius: Scalar,
    pub thickness: Scalar,
    pub color: Color,
    pub start_heading: Scalar,
    pub extent: Scalar,
}

impl Ring {
    fn validate(&self) -> GraphicsResult<()> {
        ensure_finite("center_x", self.center_x)?;
        ensure_finite("center_y", self.center_y)?;
        ensure_finite("radius", self.radius)?;
        ensure_non_negative("thickness", self.thickness)?;
        ensure_finite("start_heading", self.start_heading)?;
        ensure_finite("extent", self.extent)?;
        if self.radius <= 0.0 {
            return Err(GraphicsError::InvalidGeometry(format!(
                "ring radius must be positive, got {}",
                self.radius
            )));
        }
        if !(0.0..=360.0).contains(&self.extent) {
            return Err(GraphicsError::InvalidGeometry(format!(
                "ring extent must be within [0, 360], got {}",
                self.extent
            )));
        }
        Ok(())
    }

    pub fn draw(&self, frame: &Frame, t: &mut Turtle) -> GraphicsResult<()> {
        self.validate()?;

        goto_layout(
            t,
            frame,
            Point::new(self.center_x, self.center_y - self.radius),
        );
        t.set_stroke(StrokeStyle {
            color: self.color,
            width: self.thickness,
        });
        t.set_heading(self.start_heading);
        t.arc(self.radius, self.extent);
        t.pen_up();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Filled circle
// ---------------------------------------------------------------------------

/// A filled circle properly centered at a layout point. No outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center_x: Scalar,
    pub center_y: Scalar,
    pub radius: Scalar,
    pub fill: Color,
}

impl Circle {
    fn validate(&self) -> GraphicsResult<()> {
        ensure_finite("center_x", self.center_x)?;
        ensure_finite("center_y", self.center_y)?;
        ensure_non_negative("radius", self.radius)
    }

    pub fn draw(&self, frame: &Frame, t: &mut Turtle) -> GraphicsResult<()> {
        self.validate()?;

        // Start at the bottom of the circle, heading east; a positive
        // full-circle arc then orbits the intended center.
        t.pen_up();
        t.move_to(frame.to_canvas(Point::new(self.center_x, self.center_y + self.radius)));
        t.set_fill(self.fill);
        t.begin_fill()?;
        t.set_heading(0.0);
        t.arc(self.radius, 360.0);
        t.end_fill()
    }
}

// ---------------------------------------------------------------------------
// Pill chip
// ---------------------------------------------------------------------------

/// A capsule chip (rounded rect with `r = h/2`) plus a filled tick
/// circle near its left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillChip {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
    pub background: Color,
    pub border: Color,
    pub tick: Color,
}

impl PillChip {
    pub fn draw(&self, frame: &Frame, t: &mut Turtle) -> GraphicsResult<()> {
        RoundedRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            radius: self.height / 2.0,
            stroke: self.border,
            fill: self.background,
            stroke_width: 1.0,
        }
        .draw(frame, t)?;

        let tick_r = 0.35 * self.height;
        Circle {
            center_x: self.x + self.height / 2.0 + tick_r / 2.0,
            center_y: self.y + self.height / 2.0,
            radius: tick_r,
            fill: self.tick,
        }
        .draw(frame, t)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
