//! Core types shared across the MedTimer drawing system.
//!
//! These define the backend-neutral drawing model: colors, stroke
//! styles, paths made of straight and circular-arc segments, and
//! pictures (ordered object lists rendered with the painter's
//! algorithm).

pub use kurbo::{Point, Vec2};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias; all geometry is `f64`.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-6;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    #[inline]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels. `const` so palette entries
    /// can be compile-time constants.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as Scalar / 255.0,
            g: g as Scalar / 255.0,
            b: b as Scalar / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ---------------------------------------------------------------------------
// StrokeStyle
// ---------------------------------------------------------------------------

/// Stroke color and width. Turtle strokes always render with round
/// caps and joins, so neither is a parameter here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: Scalar,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Path segments
// ---------------------------------------------------------------------------

/// A circular arc segment.
///
/// Angles are in degrees, measured counter-clockwise from east. The
/// segment starts at `center + radius·(cosd(start_angle), sind(start_angle))`
/// and sweeps `sweep` degrees; a positive sweep is counter-clockwise.
/// `radius` is non-negative — direction lives in the sweep sign. A
/// zero radius is a degenerate, zero-length arc that carries turning
/// but no visible geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSeg {
    pub center: Point,
    pub radius: Scalar,
    pub start_angle: Scalar,
    pub sweep: Scalar,
}

/// One segment of a pen-down run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    /// Straight segment to an absolute endpoint.
    Line(Point),
    /// Circular arc (see [`ArcSeg`]).
    Arc(ArcSeg),
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A single continuous pen-down run: a start point plus segments.
///
/// Invariant: each segment begins where the previous one ended (an
/// arc's start point, derived from its center and start angle, must
/// coincide with the running endpoint).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub start: Point,
    pub segments: Vec<PathSeg>,
}

impl Path {
    pub const fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, seg: PathSeg) {
        self.segments.push(seg);
    }
}

// ---------------------------------------------------------------------------
// Picture and GraphicsObject
// ---------------------------------------------------------------------------

/// A filled region. When `stroke` is present the boundary is also
/// stroked, producing a single fill-and-outline object.
#[derive(Debug, Clone, PartialEq)]
pub struct FillObject {
    pub path: Path,
    pub color: Color,
    pub stroke: Option<StrokeStyle>,
}

/// A stroked path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeObject {
    pub path: Path,
    pub style: StrokeStyle,
}

/// A single graphical object in a picture.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsObject {
    Fill(FillObject),
    Stroke(StrokeObject),
}

/// An ordered collection of graphical objects. Later objects occlude
/// earlier ones; there is no other depth ordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Picture {
    pub objects: Vec<GraphicsObject>,
}

impl Picture {
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, obj: GraphicsObject) {
        self.objects.push(obj);
    }

    /// Append all objects from another picture.
    pub fn merge(&mut self, other: &Self) {
        self.objects.extend(other.objects.iter().cloned());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn color_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
        let g = Color::from_rgb8(0x80, 0x80, 0x80);
        assert!((g.r - 128.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn path_starts_empty() {
        let p = Path::new(Point::new(1.0, 2.0));
        assert!(p.is_empty());
        assert_eq!(p.start, Point::new(1.0, 2.0));
    }

    #[test]
    fn picture_merge() {
        let mut p1 = Picture::new();
        p1.push(GraphicsObject::Stroke(StrokeObject {
            path: Path::new(Point::ZERO),
            style: StrokeStyle::default(),
        }));
        let mut p2 = Picture::new();
        p2.push(GraphicsObject::Fill(FillObject {
            path: Path::new(Point::ZERO),
            color: Color::WHITE,
            stroke: None,
        }));
        p1.merge(&p2);
        assert_eq!(p1.objects.len(), 2);
    }
}
