use std::fmt;

use medtimer_graphics::error::GraphicsError;
use medtimer_raster::RasterError;

/// Errors returned by the screen-level render entry points.
///
/// Every error is fatal to that render call only; no partial document
/// is ever returned. Nothing here is retried.
#[derive(Debug)]
pub enum SceneError {
    /// Adherence percentages live in 0–100.
    InvalidAdherence(u8),
    /// A shape rejected its numeric input or the drawing misused the
    /// engine.
    Graphics(GraphicsError),
    /// The raster backend could not produce PNG bytes.
    Raster(RasterError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAdherence(pct) => {
                write!(f, "adherence must be within 0..=100, got {pct}")
            }
            Self::Graphics(e) => write!(f, "drawing failed: {e}"),
            Self::Raster(e) => write!(f, "raster export failed: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAdherence(_) => None,
            Self::Graphics(e) => Some(e),
            Self::Raster(e) => Some(e),
        }
    }
}

impl From<GraphicsError> for SceneError {
    fn from(e: GraphicsError) -> Self {
        Self::Graphics(e)
    }
}

impl From<RasterError> for SceneError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}
