//! Raster (PNG) renderer for MedTimer pictures.
//!
//! Rasterizes a [`Picture`] into an in-memory RGBA surface and encodes
//! it as PNG bytes. The whole pipeline is memory-only: no intermediate
//! files, no fixed filenames, so repeated renders cannot collide. The
//! surface lives inside the render call and is dropped on every exit
//! path.
//!
//! Geometry is flattened to polylines via kurbo; fills use even-odd
//! scanline coverage over the flattened boundary, strokes use
//! distance-to-segment coverage, which gives the turtle pen its round
//! caps and joins for free.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::{PathEl, Point};

use medtimer_graphics::path::to_bez_path;
use medtimer_graphics::types::{Color, GraphicsObject, Path, Picture, Scalar};

/// Flattening tolerance in pixels.
const FLATTEN_TOLERANCE: Scalar = 0.1;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the raster backend.
#[derive(Debug)]
pub enum RasterError {
    /// The requested surface size is unusable.
    InvalidSize(String),
    /// PNG encoding failed. Non-retryable.
    Encode(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(msg) => write!(f, "invalid surface size: {msg}"),
            Self::Encode(e) => write!(f, "PNG encoding failed: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSize(_) => None,
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a [`Picture`] onto a `width`×`height` surface and return the
/// encoded PNG bytes.
///
/// Canvas coordinates are center-origin with Y up; the surface places
/// the origin at its center.
pub fn render(picture: &Picture, width: u32, height: u32) -> Result<Vec<u8>, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidSize(format!("{width}×{height}")));
    }

    let mut surface = Surface::new(width, height);
    for obj in &picture.objects {
        match obj {
            GraphicsObject::Fill(fill) => {
                let pts = flatten(&fill.path, &surface, true);
                surface.fill_polygon(&pts, fill.color);
                if let Some(stroke) = fill.stroke {
                    surface.stroke_polyline(&pts, stroke.width, stroke.color);
                }
            }
            GraphicsObject::Stroke(stroke) => {
                let pts = flatten(&stroke.path, &surface, false);
                surface.stroke_polyline(&pts, stroke.style.width, stroke.style.color);
            }
        }
    }

    let mut out = Vec::new();
    surface
        .pixels
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// An owned RGBA surface with bounds-checked pixel writes.
struct Surface {
    width: u32,
    height: u32,
    pixels: RgbaImage,
}

impl Surface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    /// Set a pixel if (x, y) is inside bounds.
    #[inline]
    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "bounds-checked against surface dimensions just above"
        )]
        self.pixels.put_pixel(x as u32, y as u32, color);
    }

    /// Fill a flattened closed boundary using even-odd scanline
    /// coverage. Pixel centers are sampled at half-integer offsets.
    fn fill_polygon(&mut self, pts: &[Point], color: Color) {
        if pts.len() < 3 {
            return;
        }
        let rgba = to_rgba(color);

        let (min_y, max_y) = pts
            .iter()
            .fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let y0 = min_y.floor().max(0.0) as i64;
        let y1 = max_y.ceil().min(f64::from(self.height - 1)) as i64;

        let mut crossings: Vec<Scalar> = Vec::new();
        for py in y0..=y1 {
            let sample = py as Scalar + 0.5;
            crossings.clear();
            for w in pts.windows(2) {
                let (a, b) = (w[0], w[1]);
                if (a.y <= sample) != (b.y <= sample) {
                    let t = (sample - a.y) / (b.y - a.y);
                    crossings.push(t.mul_add(b.x - a.x, a.x));
                }
            }
            crossings.sort_by(Scalar::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = pair[0].round() as i64;
                let x1 = pair[1].round() as i64;
                for px in x0..x1 {
                    self.put_pixel(px, py, rgba);
                }
            }
        }
    }

    /// Stroke a flattened polyline with the given width: every pixel
    /// within `width / 2` of a segment is covered.
    fn stroke_polyline(&mut self, pts: &[Point], width: Scalar, color: Color) {
        if pts.is_empty() || width <= 0.0 {
            return;
        }
        let rgba = to_rgba(color);
        let half = width / 2.0;

        if pts.len() == 1 {
            self.stroke_segment(pts[0], pts[0], half, rgba);
            return;
        }
        for w in pts.windows(2) {
            self.stroke_segment(w[0], w[1], half, rgba);
        }
    }

    fn stroke_segment(&mut self, a: Point, b: Point, half: Scalar, rgba: Rgba<u8>) {
        let x0 = (a.x.min(b.x) - half).floor() as i64;
        let x1 = (a.x.max(b.x) + half).ceil() as i64;
        let y0 = (a.y.min(b.y) - half).floor() as i64;
        let y1 = (a.y.max(b.y) + half).ceil() as i64;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let p = Point::new(px as Scalar + 0.5, py as Scalar + 0.5);
                if segment_distance(p, a, b) <= half {
                    self.put_pixel(px, py, rgba);
                }
            }
        }
    }
}

/// Distance from `p` to the segment `a`–`b` (to the point when the
/// segment is degenerate).
fn segment_distance(p: Point, a: Point, b: Point) -> Scalar {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + t * ab)).hypot()
}

// ---------------------------------------------------------------------------
// Geometry helpers
// ---------------------------------------------------------------------------

/// Flatten a path to a polyline in pixel space (top-left origin,
/// Y down, the canvas origin at the surface center).
fn flatten(path: &Path, surface: &Surface, close: bool) -> Vec<Point> {
    let bp = to_bez_path(path, FLATTEN_TOLERANCE, close);
    let half_w = Scalar::from(surface.width) / 2.0;
    let half_h = Scalar::from(surface.height) / 2.0;
    let to_pixel = |p: Point| Point::new(p.x + half_w, half_h - p.y);

    let mut pts: Vec<Point> = Vec::new();
    let mut start = Point::ZERO;
    kurbo::flatten(bp.elements().iter().copied(), FLATTEN_TOLERANCE, |el| {
        match el {
            PathEl::MoveTo(p) => {
                start = to_pixel(p);
                pts.push(start);
            }
            PathEl::LineTo(p) => pts.push(to_pixel(p)),
            PathEl::ClosePath => pts.push(start),
            // flatten only emits the three variants above
            _ => {}
        }
    });
    pts
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "color components are clamped to [0, 255]"
)]
fn to_rgba(c: Color) -> Rgba<u8> {
    Rgba([
        (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        255,
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use medtimer_graphics::frame::Frame;
    use medtimer_graphics::shapes::{Circle, RoundedRect};
    use medtimer_graphics::turtle::Turtle;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn empty_picture_encodes_transparent_png() {
        let bytes = render(&Picture::new(), 32, 32).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (32, 32));
        assert!(img.pixels().all(|p| p.0[3] == 0), "all transparent");
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            render(&Picture::new(), 0, 100),
            Err(RasterError::InvalidSize(_))
        ));
    }

    #[test]
    fn filled_rect_covers_interior() {
        let frame = Frame::new(100.0, 100.0).unwrap();
        let mut t = Turtle::new();
        // Anchored at layout (20, 80); the body rises from the anchor
        // edge, spanning pixels x 20..80, y 40..80.
        RoundedRect {
            x: 20.0,
            y: 80.0,
            width: 60.0,
            height: 40.0,
            radius: 0.0,
            stroke: red(),
            fill: red(),
            stroke_width: 1.0,
        }
        .draw(&frame, &mut t)
        .unwrap();
        let pic = t.finish().unwrap();

        let bytes = render(&pic, 100, 100).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(50, 60).0, [255, 0, 0, 255], "interior");
        let covered = img.pixels().filter(|p| p.0 == [255, 0, 0, 255]).count();
        assert!(covered > 2000, "interior mostly covered: {covered}");
        // Far corner stays empty.
        assert_eq!(img.get_pixel(2, 7).0[3], 0);
    }

    #[test]
    fn filled_circle_is_centered_and_round() {
        let frame = Frame::new(100.0, 100.0).unwrap();
        let mut t = Turtle::new();
        Circle {
            center_x: 50.0,
            center_y: 50.0,
            radius: 20.0,
            fill: red(),
        }
        .draw(&frame, &mut t)
        .unwrap();
        let pic = t.finish().unwrap();

        let bytes = render(&pic, 100, 100).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(50, 50).0, [255, 0, 0, 255], "center covered");
        assert_eq!(img.get_pixel(50, 25).0[3], 0, "outside the radius");
        assert_eq!(img.get_pixel(50, 75).0[3], 0, "outside the radius");
        let area = img.pixels().filter(|p| p.0[3] != 0).count() as f64;
        let expect = std::f64::consts::PI * 20.0 * 20.0;
        assert!(
            (area - expect).abs() < expect * 0.1,
            "area ≈ πr²: {area} vs {expect}"
        );
    }

    #[test]
    fn stroke_has_round_caps() {
        let mut pic = Picture::new();
        let mut path = medtimer_graphics::types::Path::new(Point::new(-20.0, 0.0));
        path.push(medtimer_graphics::types::PathSeg::Line(Point::new(
            20.0, 0.0,
        )));
        pic.push(GraphicsObject::Stroke(
            medtimer_graphics::types::StrokeObject {
                path,
                style: medtimer_graphics::types::StrokeStyle {
                    color: red(),
                    width: 10.0,
                },
            },
        ));
        let bytes = render(&pic, 100, 100).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        // On the line.
        assert_eq!(img.get_pixel(50, 50).0, [255, 0, 0, 255]);
        // Cap extends past the endpoint.
        assert_eq!(img.get_pixel(73, 50).0, [255, 0, 0, 255]);
        // But not past the cap radius.
        assert_eq!(img.get_pixel(80, 50).0[3], 0);
        // Stroke width reaches sideways.
        assert_eq!(img.get_pixel(50, 46).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(50, 40).0[3], 0);
    }

    #[test]
    fn painter_order_later_wins() {
        let frame = Frame::new(40.0, 40.0).unwrap();
        let mut t = Turtle::new();
        Circle {
            center_x: 20.0,
            center_y: 20.0,
            radius: 15.0,
            fill: red(),
        }
        .draw(&frame, &mut t)
        .unwrap();
        Circle {
            center_x: 20.0,
            center_y: 20.0,
            radius: 8.0,
            fill: Color::new(0.0, 0.0, 1.0),
        }
        .draw(&frame, &mut t)
        .unwrap();
        let pic = t.finish().unwrap();
        let bytes = render(&pic, 40, 40).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 255, 255], "later occludes");
        assert_eq!(img.get_pixel(20, 8).0, [255, 0, 0, 255], "annulus is red");
    }

    #[test]
    fn render_is_deterministic() {
        let frame = Frame::new(60.0, 60.0).unwrap();
        let mut t = Turtle::new();
        Circle {
            center_x: 30.0,
            center_y: 30.0,
            radius: 12.0,
            fill: red(),
        }
        .draw(&frame, &mut t)
        .unwrap();
        let pic = t.finish().unwrap();
        let a = render(&pic, 60, 60).unwrap();
        let b = render(&pic, 60, 60).unwrap();
        assert_eq!(a, b);
    }
}
