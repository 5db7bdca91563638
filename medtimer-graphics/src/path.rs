//! Path queries and conversion to `kurbo::BezPath`.
//!
//! Paths stay exact (lines and circular arcs) until a backend needs
//! Bezier or polyline form; the conversion here is what the raster
//! backend flattens.

use kurbo::{BezPath, Point, Vec2};

use crate::math::unit;
use crate::types::{ArcSeg, Path, PathSeg, Scalar, EPSILON};

impl ArcSeg {
    /// The point where the arc begins.
    #[must_use]
    pub fn start_point(&self) -> Point {
        self.center + self.radius * unit(self.start_angle)
    }

    /// The point where the arc ends.
    #[must_use]
    pub fn end_point(&self) -> Point {
        self.center + self.radius * unit(self.start_angle + self.sweep)
    }

    /// Tangent direction (degrees) at the arc's endpoint, following
    /// the sweep direction.
    #[must_use]
    pub fn end_tangent(&self) -> Scalar {
        let normal = self.start_angle + self.sweep;
        if self.sweep >= 0.0 {
            normal + 90.0
        } else {
            normal - 90.0
        }
    }
}

impl Path {
    /// The endpoint of the last segment (the start point for an empty
    /// path).
    #[must_use]
    pub fn end_point(&self) -> Point {
        match self.segments.last() {
            Some(PathSeg::Line(p)) => *p,
            Some(PathSeg::Arc(arc)) => arc.end_point(),
            None => self.start,
        }
    }

    /// Whether the path returns to its start point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let e = self.end_point();
        (e - self.start).hypot() < EPSILON
    }

    /// Sum of all arc sweeps, in degrees. For a closed convex loop of
    /// straight edges and corner arcs this is ±360.
    #[must_use]
    pub fn total_turning(&self) -> Scalar {
        self.segments
            .iter()
            .map(|seg| match seg {
                PathSeg::Line(_) => 0.0,
                PathSeg::Arc(arc) => arc.sweep,
            })
            .sum()
    }
}

/// Convert a [`Path`] to a `kurbo::BezPath`, approximating arcs with
/// cubic Beziers to the given tolerance.
///
/// `close` appends a closing element, which fills rely on.
#[must_use]
pub fn to_bez_path(path: &Path, tolerance: Scalar, close: bool) -> BezPath {
    let mut bp = BezPath::new();
    bp.move_to(path.start);

    for seg in &path.segments {
        match seg {
            PathSeg::Line(p) => bp.line_to(*p),
            PathSeg::Arc(arc) => {
                if arc.radius == 0.0 {
                    // Degenerate turn-in-place arc: nothing to emit.
                    continue;
                }
                let k = kurbo::Arc::new(
                    arc.center,
                    Vec2::new(arc.radius, arc.radius),
                    arc.start_angle.to_radians(),
                    arc.sweep.to_radians(),
                    0.0,
                );
                k.to_cubic_beziers(tolerance, |p1, p2, p| {
                    bp.curve_to(p1, p2, p);
                });
            }
        }
    }

    if close {
        bp.close_path();
    }
    bp
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
