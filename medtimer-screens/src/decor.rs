//! Decorative reward composites.
//!
//! The trophy and smiley are literal constants: tables of shape
//! descriptors at hard-coded offsets from a drawing origin, not
//! procedural code. Offsets are layout-style (x right, y down from
//! the origin).

use kurbo::Point;

use medtimer_graphics::error::GraphicsResult;
use medtimer_graphics::frame::Frame;
use medtimer_graphics::shapes::{Circle, RoundedRect};
use medtimer_graphics::turtle::Turtle;
use medtimer_graphics::types::{Color, Scalar, StrokeStyle};

use crate::palette;

/// One element of a composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decor {
    /// Filled circle centered at the offset.
    Circle {
        dx: Scalar,
        dy: Scalar,
        radius: Scalar,
        color: Color,
    },
    /// Filled-and-outlined rounded rectangle anchored at the offset.
    Rect {
        dx: Scalar,
        dy: Scalar,
        width: Scalar,
        height: Scalar,
        radius: Scalar,
        color: Color,
    },
    /// Stroked arc: the pen starts at the offset with the given
    /// heading and sweeps `extent` degrees. Radius is signed, as in
    /// the turtle itself.
    Arc {
        dx: Scalar,
        dy: Scalar,
        radius: Scalar,
        thickness: Scalar,
        start_heading: Scalar,
        extent: Scalar,
        color: Color,
    },
}

/// Trophy: cup with two handles on a stem and base.
pub const TROPHY: &[Decor] = &[
    Decor::Rect {
        dx: -22.0,
        dy: 10.0,
        width: 44.0,
        height: 32.0,
        radius: 6.0,
        color: palette::REWARD_GOLD,
    },
    Decor::Arc {
        dx: -22.0,
        dy: -8.0,
        radius: 8.0,
        thickness: 4.0,
        start_heading: 180.0,
        extent: 180.0,
        color: palette::REWARD_GOLD,
    },
    Decor::Arc {
        dx: 22.0,
        dy: -8.0,
        radius: -8.0,
        thickness: 4.0,
        start_heading: 0.0,
        extent: 180.0,
        color: palette::REWARD_GOLD,
    },
    Decor::Rect {
        dx: -4.0,
        dy: 22.0,
        width: 8.0,
        height: 12.0,
        radius: 0.0,
        color: palette::REWARD_GOLD,
    },
    Decor::Rect {
        dx: -14.0,
        dy: 30.0,
        width: 28.0,
        height: 8.0,
        radius: 2.0,
        color: palette::REWARD_GOLD,
    },
];

/// Smiley: face, two eyes, a smile bulging downward.
pub const SMILEY: &[Decor] = &[
    Decor::Circle {
        dx: 0.0,
        dy: 0.0,
        radius: 24.0,
        color: palette::REWARD_SUN,
    },
    Decor::Circle {
        dx: -8.0,
        dy: -6.0,
        radius: 3.0,
        color: palette::TEXT,
    },
    Decor::Circle {
        dx: 8.0,
        dy: -6.0,
        radius: 3.0,
        color: palette::TEXT,
    },
    Decor::Arc {
        dx: -10.0,
        dy: 4.0,
        radius: 10.0,
        thickness: 3.0,
        start_heading: 270.0,
        extent: 180.0,
        color: palette::TEXT,
    },
];

/// Draw a composite with its origin at the given layout point.
pub fn draw_composite(
    t: &mut Turtle,
    frame: &Frame,
    origin_x: Scalar,
    origin_y: Scalar,
    items: &[Decor],
) -> GraphicsResult<()> {
    for item in items {
        match *item {
            Decor::Circle {
                dx,
                dy,
                radius,
                color,
            } => {
                Circle {
                    center_x: origin_x + dx,
                    center_y: origin_y + dy,
                    radius,
                    fill: color,
                }
                .draw(frame, t)?;
            }
            Decor::Rect {
                dx,
                dy,
                width,
                height,
                radius,
                color,
            } => {
                RoundedRect {
                    x: origin_x + dx,
                    y: origin_y + dy,
                    width,
                    height,
                    radius,
                    stroke: color,
                    fill: color,
                    stroke_width: 1.0,
                }
                .draw(frame, t)?;
            }
            Decor::Arc {
                dx,
                dy,
                radius,
                thickness,
                start_heading,
                extent,
                color,
            } => {
                t.pen_up();
                t.move_to(frame.to_canvas(Point::new(origin_x + dx, origin_y + dy)));
                t.set_stroke(StrokeStyle {
                    color,
                    width: thickness,
                });
                t.pen_down();
                t.set_heading(start_heading);
                t.arc(radius, extent);
                t.pen_up();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtimer_graphics::types::{GraphicsObject, EPSILON};

    #[test]
    fn trophy_draws_five_objects() {
        let frame = Frame::new(300.0, 300.0).unwrap();
        let mut t = Turtle::new();
        draw_composite(&mut t, &frame, 150.0, 150.0, TROPHY).unwrap();
        let pic = t.finish().unwrap();
        assert_eq!(pic.objects.len(), TROPHY.len());
    }

    #[test]
    fn smiley_mouth_is_a_bottom_half_arc() {
        let frame = Frame::new(300.0, 300.0).unwrap();
        let mut t = Turtle::new();
        draw_composite(&mut t, &frame, 150.0, 150.0, SMILEY).unwrap();
        let pic = t.finish().unwrap();
        assert_eq!(pic.objects.len(), SMILEY.len());

        let GraphicsObject::Stroke(mouth) = &pic.objects[3] else {
            panic!("mouth should be a stroke");
        };
        let [medtimer_graphics::types::PathSeg::Arc(arc)] = mouth.path.segments[..] else {
            panic!("mouth should be one arc");
        };
        // Mouth arc is centered just below the face center and runs
        // from the west point through the bottom to the east point.
        let center = frame.to_canvas(Point::new(150.0, 154.0));
        assert!((arc.center - center).hypot() < EPSILON, "got {arc:?}");
        assert!((arc.sweep - 180.0).abs() < EPSILON);
        let start = arc.start_point();
        assert!(start.x < arc.center.x, "starts at the west point");
        let end = arc.end_point();
        assert!(end.x > arc.center.x, "ends at the east point");
    }
}
