//! Screen composition and the public render contracts of the MedTimer
//! drawing core.
//!
//! Two entry points matter to embedders:
//! - [`vector_scene`] returns a self-contained SVG document whose
//!   `width`/`height` match the requested canvas; the embedding layer
//!   base64-encodes it into a data URI and sizes its container
//!   [`EMBED_MARGIN`] wider and taller on each axis.
//! - [`raster_scene`] returns PNG bytes of a fixed
//!   [`RASTER_SIZE`]×[`RASTER_SIZE`] snapshot, shown as an inline
//!   image with a caption.
//!
//! Both are pure: identical inputs produce byte-identical output, and
//! no filesystem paths take part in either contract.

pub mod adherence;
pub mod decor;
pub mod device;
pub mod error;
pub mod palette;
pub mod screens;

pub use adherence::{Adherence, Reward};
pub use device::Device;
pub use error::SceneError;
pub use screens::Screen;

use medtimer_graphics::frame::Frame;
use medtimer_graphics::types::Scalar;

/// Side of the square raster snapshot, in pixels.
pub const RASTER_SIZE: u32 = 300;

/// Extra room, per axis, the embedding container leaves around a
/// vector scene.
pub const EMBED_MARGIN: Scalar = 40.0;

/// Render a screen to a self-contained SVG string.
///
/// `adherence` drives the Score screen's accent arc and reward; the
/// Home screen ignores it.
pub fn vector_scene(
    screen: Screen,
    width: Scalar,
    height: Scalar,
    adherence: Adherence,
) -> Result<String, SceneError> {
    let frame = Frame::new(width, height)?;
    let picture = match screen {
        Screen::Home => screens::home_picture(&frame)?,
        Screen::Score => screens::score_picture(&frame, adherence)?,
    };
    Ok(medtimer_svg::render_to_string(&picture, width, height))
}

/// Render the fixed-size raster snapshot to PNG bytes.
pub fn raster_scene(adherence: Adherence) -> Result<Vec<u8>, SceneError> {
    let size = Scalar::from(RASTER_SIZE);
    let frame = Frame::new(size, size)?;
    let picture = screens::snapshot_picture(&frame, adherence)?;
    Ok(medtimer_raster::render(&picture, RASTER_SIZE, RASTER_SIZE)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn adherence(pct: u8) -> Adherence {
        Adherence::new(pct).unwrap()
    }

    #[test]
    fn vector_scene_carries_canvas_dimensions() {
        let svg = vector_scene(Screen::Home, 1280.0, 800.0, adherence(0)).unwrap();
        assert!(svg.contains("<svg"), "not an svg document: {svg}");
        assert!(svg.contains("width=\"1280\""), "missing width: {svg}");
        assert!(svg.contains("height=\"800\""), "missing height: {svg}");
    }

    #[test]
    fn vector_scene_is_byte_identical_across_calls() {
        let a = vector_scene(Screen::Score, 1280.0, 800.0, adherence(14)).unwrap();
        let b = vector_scene(Screen::Score, 1280.0, 800.0, adherence(14)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn score_scene_contains_accent_and_track_colors() {
        let svg = vector_scene(Screen::Score, 1280.0, 800.0, adherence(14)).unwrap();
        assert!(svg.contains("#ff7a00"), "missing accent color: {svg}");
        assert!(svg.contains("#e9ecf2"), "missing track color: {svg}");
    }

    #[test]
    fn vector_scene_rejects_bad_canvas() {
        assert!(vector_scene(Screen::Home, 0.0, 800.0, adherence(0)).is_err());
        assert!(vector_scene(Screen::Home, f64::NAN, 800.0, adherence(0)).is_err());
    }

    #[test]
    fn mobile_preset_renders() {
        let (w, h) = Device::Mobile.size();
        let svg = vector_scene(Screen::Home, w, h, adherence(0)).unwrap();
        assert!(svg.contains("width=\"375\""));
    }

    #[test]
    fn raster_scene_is_a_300_square_png() {
        let bytes = raster_scene(adherence(95)).unwrap();
        assert_eq!(
            bytes[..8],
            [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']
        );
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), RASTER_SIZE);
        assert_eq!(img.height(), RASTER_SIZE);
    }

    #[test]
    fn raster_scene_is_deterministic() {
        let a = raster_scene(adherence(60)).unwrap();
        let b = raster_scene(adherence(60)).unwrap();
        assert_eq!(a, b);
    }
}
