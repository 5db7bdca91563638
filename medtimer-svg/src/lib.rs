//! SVG renderer for MedTimer pictures.
//!
//! Converts a [`Picture`] into an SVG [`Document`] using the `svg`
//! crate.
//!
//! Key design points:
//! - Canvas coordinates have Y pointing **up**; SVG has Y pointing
//!   **down**. All Y coordinates are negated at render time, so no
//!   global transform or `viewBox` trick is needed.
//! - Path data is built as raw `d` strings to preserve `f64` precision.
//! - The document carries explicit `width`/`height` attributes equal to
//!   the requested canvas size and a centered `viewBox`; the embedding
//!   layer sizes its container from those attributes.
//! - Output is deterministic: fixed-precision formatting with
//!   trailing-zero stripping, no timestamps, no generated ids.
//!   Identical pictures serialize to byte-identical documents.

use svg::node::element::Group;
use svg::Document;

use medtimer_graphics::types::{
    ArcSeg, Color, FillObject, GraphicsObject, Path, PathSeg, Picture, Scalar, StrokeObject,
    StrokeStyle,
};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of decimal places for coordinates. Default: 4.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

/// Render a [`Picture`] onto a canvas of the given layout size.
///
/// The resulting document spans `[-w/2, w/2] × [-h/2, h/2]` in canvas
/// coordinates with explicit `width`/`height` matching the inputs.
#[must_use]
pub fn render(picture: &Picture, width: Scalar, height: Scalar) -> Document {
    render_with_options(picture, width, height, &RenderOptions::default())
}

/// Render a [`Picture`] to an SVG string.
#[must_use]
pub fn render_to_string(picture: &Picture, width: Scalar, height: Scalar) -> String {
    render(picture, width, height).to_string()
}

/// Render with custom options.
#[must_use]
pub fn render_with_options(
    picture: &Picture,
    width: Scalar,
    height: Scalar,
    opts: &RenderOptions,
) -> Document {
    let mut content = Group::new();
    for obj in &picture.objects {
        match obj {
            GraphicsObject::Fill(fill) => content = content.add(render_fill(fill, opts)),
            GraphicsObject::Stroke(stroke) => content = content.add(render_stroke(stroke, opts)),
        }
    }

    let p = opts.precision;
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", fmt_scalar(width, p))
        .set("height", fmt_scalar(height, p))
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_scalar(-width / 2.0, p),
                fmt_scalar(-height / 2.0, p),
                fmt_scalar(width, p),
                fmt_scalar(height, p),
            ),
        )
        .add(content)
}

// ---------------------------------------------------------------------------
// Individual object renderers
// ---------------------------------------------------------------------------

/// Render a filled region to an SVG `<path>` element. When the fill
/// carries a stroke the boundary is outlined too.
fn render_fill(fill: &FillObject, opts: &RenderOptions) -> svg::node::element::Path {
    let d = path_to_d(&fill.path, true, opts.precision);
    let mut el = svg::node::element::Path::new()
        .set("d", d)
        .set("fill", color_to_svg(fill.color));

    if let Some(stroke) = fill.stroke {
        el = set_stroke_attrs(el, stroke, opts);
    } else {
        el = el.set("stroke", "none");
    }

    el
}

/// Render a stroked run to an SVG `<path>` element.
fn render_stroke(stroke: &StrokeObject, opts: &RenderOptions) -> svg::node::element::Path {
    let d = path_to_d(&stroke.path, false, opts.precision);
    let el = svg::node::element::Path::new()
        .set("d", d)
        .set("fill", "none");
    set_stroke_attrs(el, stroke.style, opts)
}

/// Stroke attributes shared by fills-with-outline and plain strokes.
/// The turtle pen is round, so caps and joins always are.
fn set_stroke_attrs(
    el: svg::node::element::Path,
    style: StrokeStyle,
    opts: &RenderOptions,
) -> svg::node::element::Path {
    el.set("stroke", color_to_svg(style.color))
        .set("stroke-width", fmt_scalar(style.width, opts.precision))
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
}

// ---------------------------------------------------------------------------
// Path → SVG "d" attribute
// ---------------------------------------------------------------------------

/// Convert a [`Path`] to an SVG path data string (M, L, A and
/// optionally Z commands). Y coordinates are negated to convert from
/// canvas (Y-up) to SVG (Y-down).
fn path_to_d(path: &Path, close: bool, precision: usize) -> String {
    let mut d = String::with_capacity(path.segments.len() * 24 + 16);
    d.push('M');
    write_point(&mut d, path.start.x, -path.start.y, precision);

    for seg in &path.segments {
        match seg {
            PathSeg::Line(p) => {
                d.push('L');
                write_point(&mut d, p.x, -p.y, precision);
            }
            PathSeg::Arc(arc) => write_arc(&mut d, arc, precision),
        }
    }

    if close {
        d.push('Z');
    }
    d
}

/// Append one or two SVG `A` commands for an arc segment.
///
/// A zero radius or zero sweep moves nothing and emits nothing. A full
/// circle is split into two half arcs because an SVG arc whose
/// endpoints coincide renders as empty.
fn write_arc(d: &mut String, arc: &ArcSeg, precision: usize) {
    if arc.radius == 0.0 || arc.sweep == 0.0 {
        return;
    }
    if arc.sweep.abs() >= 360.0 {
        let half = ArcSeg {
            sweep: arc.sweep / 2.0,
            ..*arc
        };
        write_arc_command(d, &half, precision);
        let second = ArcSeg {
            start_angle: arc.start_angle + arc.sweep / 2.0,
            sweep: arc.sweep / 2.0,
            ..*arc
        };
        write_arc_command(d, &second, precision);
    } else {
        write_arc_command(d, arc, precision);
    }
}

fn write_arc_command(d: &mut String, arc: &ArcSeg, precision: usize) {
    use std::fmt::Write;

    let end = arc.end_point();
    let large_arc = i32::from(arc.sweep.abs() > 180.0);
    // A counter-clockwise sweep in Y-up canvas space runs against
    // SVG's positive-angle (Y-down) direction.
    let sweep_flag = i32::from(arc.sweep < 0.0);

    let r = fmt_scalar(arc.radius, precision);
    let _ = write!(d, "A{r},{r} 0 {large_arc} {sweep_flag} ");
    write_point(d, end.x, -end.y, precision);
}

/// Write "x,y" with the given precision.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    d.push_str(&fmt_coord(x, precision));
    d.push(',');
    d.push_str(&fmt_coord(y, precision));
}

/// Format a coordinate at fixed precision, normalizing values that
/// round to zero so they never print as "-0.0".
fn fmt_coord(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.starts_with('-') && s[1..].bytes().all(|b| b == b'0' || b == b'.') {
        s[1..].to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Color / number helpers
// ---------------------------------------------------------------------------

/// Convert a [`Color`] to an SVG color string.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "color components are clamped to [0, 255]"
)]
fn color_to_svg(c: Color) -> String {
    let r = (c.r.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (c.g.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (c.b.clamp(0.0, 1.0) * 255.0).round() as u8;
    if r == 0 && g == 0 && b == 0 {
        "black".to_owned()
    } else if r == 255 && g == 255 && b == 255 {
        "white".to_owned()
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use medtimer_graphics::frame::Frame;
    use medtimer_graphics::shapes::{Ring, RoundedRect};
    use medtimer_graphics::turtle::Turtle;
    use medtimer_graphics::types::Point;

    fn make_line() -> Path {
        let mut p = Path::new(Point::ZERO);
        p.push(PathSeg::Line(Point::new(10.0, 5.0)));
        p
    }

    fn make_quarter_arc() -> Path {
        let arc = ArcSeg {
            center: Point::ZERO,
            radius: 10.0,
            start_angle: 0.0,
            sweep: 90.0,
        };
        let mut p = Path::new(arc.start_point());
        p.push(PathSeg::Arc(arc));
        p
    }

    // -- path_to_d --

    #[test]
    fn test_path_to_d_line() {
        let d = path_to_d(&make_line(), false, 2);
        assert_eq!(d, "M0.00,0.00L10.00,-5.00");
    }

    #[test]
    fn test_path_to_d_y_negation() {
        let mut p = Path::new(Point::new(5.0, 10.0));
        p.push(PathSeg::Line(Point::new(5.0, -10.0)));
        let d = path_to_d(&p, false, 1);
        assert!(d.starts_with("M5.0,-10.0"), "Y should be negated: {d}");
        assert!(d.contains("L5.0,10.0"), "Y should be negated: {d}");
    }

    #[test]
    fn test_path_to_d_arc() {
        let d = path_to_d(&make_quarter_arc(), false, 1);
        // Quarter CCW arc from (10,0) to (0,10): one A command, small
        // arc, sweep flag 0 in SVG space (radii are zero-trimmed).
        assert_eq!(d, "M10.0,0.0A10,10 0 0 0 0.0,-10.0");
    }

    #[test]
    fn test_path_to_d_clockwise_arc_flag() {
        let arc = ArcSeg {
            center: Point::ZERO,
            radius: 10.0,
            start_angle: 90.0,
            sweep: -90.0,
        };
        let mut p = Path::new(arc.start_point());
        p.push(PathSeg::Arc(arc));
        let d = path_to_d(&p, false, 0);
        assert!(d.contains(" 0 1 "), "CW sweep uses SVG flag 1: {d}");
    }

    #[test]
    fn test_full_circle_splits_into_two_arcs() {
        let arc = ArcSeg {
            center: Point::ZERO,
            radius: 10.0,
            start_angle: 270.0,
            sweep: 360.0,
        };
        let mut p = Path::new(arc.start_point());
        p.push(PathSeg::Arc(arc));
        let d = path_to_d(&p, false, 1);
        assert_eq!(d.matches('A').count(), 2, "full circle → two arcs: {d}");
        // Both halves are ≤ 180°, so neither sets the large-arc flag;
        // the path must return to its start.
        assert!(d.ends_with("0.0,10.0"), "must close on start: {d}");
    }

    #[test]
    fn test_large_arc_flag() {
        let arc = ArcSeg {
            center: Point::ZERO,
            radius: 10.0,
            start_angle: 0.0,
            sweep: 270.0,
        };
        let mut p = Path::new(arc.start_point());
        p.push(PathSeg::Arc(arc));
        let d = path_to_d(&p, false, 1);
        assert!(d.contains(" 1 0 "), "270° sweep sets large-arc: {d}");
    }

    #[test]
    fn test_degenerate_arc_emits_nothing() {
        let mut p = Path::new(Point::ZERO);
        p.push(PathSeg::Arc(ArcSeg {
            center: Point::ZERO,
            radius: 0.0,
            start_angle: 0.0,
            sweep: 90.0,
        }));
        assert_eq!(path_to_d(&p, false, 1), "M0.0,0.0");
    }

    #[test]
    fn test_path_to_d_close() {
        let d = path_to_d(&make_line(), true, 1);
        assert!(d.ends_with('Z'));
    }

    // -- colors and numbers --

    #[test]
    fn test_color_to_svg() {
        assert_eq!(color_to_svg(Color::BLACK), "black");
        assert_eq!(color_to_svg(Color::WHITE), "white");
        assert_eq!(color_to_svg(Color::new(1.0, 0.0, 0.0)), "#ff0000");
        assert_eq!(color_to_svg(Color::from_rgb8(0xEA, 0xF2, 0xFF)), "#eaf2ff");
    }

    #[test]
    fn test_fmt_scalar_trailing_zeros() {
        assert_eq!(fmt_scalar(1.0, 4), "1");
        assert_eq!(fmt_scalar(1.5, 4), "1.5");
        assert_eq!(fmt_scalar(1.25, 4), "1.25");
        assert_eq!(fmt_scalar(-640.0, 4), "-640");
    }

    // -- object renderers --

    #[test]
    fn test_render_fill_with_outline() {
        let fill = FillObject {
            path: make_quarter_arc(),
            color: Color::new(1.0, 0.0, 0.0),
            stroke: Some(StrokeStyle {
                color: Color::BLACK,
                width: 2.0,
            }),
        };
        let s = render_fill(&fill, &RenderOptions::default()).to_string();
        assert!(s.contains("fill=\"#ff0000\""), "missing fill: {s}");
        assert!(s.contains("stroke=\"black\""), "missing stroke: {s}");
        assert!(s.contains("stroke-linecap=\"round\""), "missing cap: {s}");
        assert!(s.contains(" d=\"M"), "missing d attr: {s}");
    }

    #[test]
    fn test_render_fill_without_outline() {
        let fill = FillObject {
            path: make_quarter_arc(),
            color: Color::WHITE,
            stroke: None,
        };
        let s = render_fill(&fill, &RenderOptions::default()).to_string();
        assert!(s.contains("stroke=\"none\""), "missing stroke=none: {s}");
    }

    #[test]
    fn test_render_stroke() {
        let stroke = StrokeObject {
            path: make_line(),
            style: StrokeStyle {
                color: Color::BLACK,
                width: 18.0,
            },
        };
        let s = render_stroke(&stroke, &RenderOptions::default()).to_string();
        assert!(s.contains("fill=\"none\""), "missing fill=none: {s}");
        assert!(s.contains("stroke-width=\"18\""), "missing width: {s}");
    }

    // -- full document --

    #[test]
    fn test_document_dimensions() {
        let pic = Picture::new();
        let s = render_to_string(&pic, 1280.0, 800.0);
        assert!(s.contains("width=\"1280\""), "missing width: {s}");
        assert!(s.contains("height=\"800\""), "missing height: {s}");
        assert!(
            s.contains("viewBox=\"-640 -400 1280 800\""),
            "missing centered viewBox: {s}"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let frame = Frame::new(375.0, 812.0).unwrap();
        let mut t = Turtle::new();
        RoundedRect {
            x: 20.0,
            y: 110.0,
            width: 300.0,
            height: 220.0,
            radius: 16.0,
            stroke: Color::from_rgb8(0xCB, 0xE9, 0xDD),
            fill: Color::WHITE,
            stroke_width: 2.0,
        }
        .draw(&frame, &mut t)
        .unwrap();
        Ring {
            center_x: 187.5,
            center_y: 400.0,
            radius: 100.0,
            thickness: 18.0,
            color: Color::from_rgb8(0xFF, 0x7A, 0x00),
            start_heading: 90.0,
            extent: 50.4,
        }
        .draw(&frame, &mut t)
        .unwrap();
        let pic = t.finish().unwrap();

        let a = render_to_string(&pic, 375.0, 812.0);
        let b = render_to_string(&pic, 375.0, 812.0);
        assert_eq!(a, b, "identical inputs must yield identical bytes");
        assert!(a.contains("<svg"));
    }
}
