//! The cursor/path engine.
//!
//! A [`Turtle`] owns the cursor state (position, heading, pen, styles)
//! and accumulates finished strokes and fills into a [`Picture`]. It is
//! a plain value object: no globals, no hidden state, so every motion
//! is directly testable.
//!
//! Conventions: headings in degrees, 0 = east, counter-clockwise
//! positive; coordinates center-origin with Y up. Layout-space callers
//! convert through [`crate::frame::Frame`] first.

use kurbo::Point;

use crate::error::{GraphicsError, GraphicsResult};
use crate::math::{normalize_deg, unit};
use crate::types::{
    ArcSeg, Color, FillObject, GraphicsObject, Path, PathSeg, Picture, Scalar, StrokeObject,
    StrokeStyle,
};

/// An open fill bracket: the boundary so far, and whether the pen was
/// down for any of it (which decides whether the fill is also stroked).
#[derive(Debug)]
struct FillRun {
    boundary: Path,
    stroked: bool,
}

/// The virtual pen. See the module docs for conventions.
#[derive(Debug)]
pub struct Turtle {
    pos: Point,
    heading: Scalar,
    pen_down: bool,
    stroke: StrokeStyle,
    fill_color: Color,
    /// Open pen-down run, absent while a fill bracket is recording.
    run: Option<Path>,
    fill: Option<FillRun>,
    picture: Picture,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    /// A fresh turtle at the origin, heading east, pen down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: Point::ZERO,
            heading: 0.0,
            pen_down: true,
            stroke: StrokeStyle::default(),
            fill_color: Color::WHITE,
            run: None,
            fill: None,
            picture: Picture::new(),
        }
    }

    // -- accessors --

    #[must_use]
    pub const fn position(&self) -> Point {
        self.pos
    }

    #[must_use]
    pub const fn heading(&self) -> Scalar {
        self.heading
    }

    #[must_use]
    pub const fn pen_is_down(&self) -> bool {
        self.pen_down
    }

    // -- pen state --

    /// Lower the pen: subsequent motion emits visible segments.
    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Lift the pen, finishing the current run.
    pub fn pen_up(&mut self) {
        self.flush_run();
        self.pen_down = false;
    }

    // -- styles --

    /// Set the stroke style for subsequent segments. Finishes the open
    /// run so earlier segments keep the style they were drawn with.
    pub fn set_stroke(&mut self, style: StrokeStyle) {
        if style != self.stroke {
            self.flush_run();
        }
        self.stroke = style;
    }

    /// Set the color used by the next `end_fill`.
    pub fn set_fill(&mut self, color: Color) {
        self.fill_color = color;
    }

    // -- motion --

    /// Relocate the cursor; emits a straight segment when the pen is
    /// down (and always extends an open fill boundary).
    pub fn move_to(&mut self, target: Point) {
        self.record(PathSeg::Line(target));
        self.pos = target;
    }

    /// Set the absolute heading, normalized to [0, 360).
    pub fn set_heading(&mut self, degrees: Scalar) {
        debug_assert!(degrees.is_finite(), "heading must be finite");
        self.heading = normalize_deg(degrees);
    }

    /// Move `distance` units along the current heading.
    pub fn forward(&mut self, distance: Scalar) {
        debug_assert!(distance.is_finite(), "distance must be finite");
        let target = self.pos + distance * unit(self.heading);
        self.move_to(target);
    }

    /// Draw a circular arc sweeping `extent` degrees from the current
    /// heading.
    ///
    /// Positive `radius`: the center lies 90° to the left of the
    /// heading and the turtle turns counter-clockwise; negative:
    /// center to the right, clockwise. `radius = 0` emits a
    /// zero-length arc that only turns (so a degenerate rounded
    /// rectangle still accumulates 360° of turning). `extent = 0`
    /// leaves the cursor untouched. The cursor ends at the arc
    /// endpoint with the tangent heading.
    pub fn arc(&mut self, radius: Scalar, extent: Scalar) {
        debug_assert!(
            radius.is_finite() && extent.is_finite(),
            "arc args must be finite"
        );
        if extent == 0.0 {
            return;
        }

        let (side, sweep) = if radius >= 0.0 {
            (self.heading + 90.0, extent)
        } else {
            (self.heading - 90.0, -extent)
        };
        let r = radius.abs();
        let center = self.pos + r * unit(side);
        let start_angle = normalize_deg(side + 180.0);

        let seg = ArcSeg {
            center,
            radius: r,
            start_angle,
            sweep,
        };
        self.record(PathSeg::Arc(seg));
        self.pos = seg.end_point();
        self.heading = normalize_deg(self.heading + sweep);
    }

    // -- fill brackets --

    /// Start recording a fill boundary at the current position.
    pub fn begin_fill(&mut self) -> GraphicsResult<()> {
        if self.fill.is_some() {
            return Err(GraphicsError::FillAlreadyStarted);
        }
        self.flush_run();
        self.fill = Some(FillRun {
            boundary: Path::new(self.pos),
            stroked: false,
        });
        Ok(())
    }

    /// Close the fill bracket and push the filled region. The region
    /// is also stroked (with the current stroke style) when the pen
    /// contributed any boundary segment while down.
    pub fn end_fill(&mut self) -> GraphicsResult<()> {
        let Some(fill) = self.fill.take() else {
            return Err(GraphicsError::FillNotStarted);
        };
        if !fill.boundary.is_empty() {
            self.picture.push(GraphicsObject::Fill(FillObject {
                path: fill.boundary,
                color: self.fill_color,
                stroke: fill.stroked.then_some(self.stroke),
            }));
        }
        Ok(())
    }

    // -- output --

    /// Finish drawing, flushing the open run, and return the picture.
    pub fn finish(mut self) -> GraphicsResult<Picture> {
        if self.fill.is_some() {
            return Err(GraphicsError::UnclosedFill);
        }
        self.flush_run();
        Ok(self.picture)
    }

    // -- internals --

    /// Route a segment to the open fill boundary or the stroke run.
    ///
    /// While a fill is recording, every motion extends the boundary
    /// (pen up or down) and no separate stroke object is produced: the
    /// fill itself carries the outline.
    fn record(&mut self, seg: PathSeg) {
        if let Some(fill) = &mut self.fill {
            fill.boundary.push(seg);
            if self.pen_down {
                fill.stroked = true;
            }
        } else if self.pen_down {
            self.run.get_or_insert_with(|| Path::new(self.pos)).push(seg);
        }
    }

    fn flush_run(&mut self) {
        if let Some(path) = self.run.take() {
            if !path.is_empty() {
                self.picture.push(GraphicsObject::Stroke(StrokeObject {
                    path,
                    style: self.stroke,
                }));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
