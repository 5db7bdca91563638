use std::fmt;

/// Errors returned by the drawing engine and shape helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A shape descriptor or turtle motion was given malformed numeric
    /// input (NaN/infinite values, negative dimensions, corner radius
    /// exceeding half the smaller side). Rejected before any drawing.
    InvalidGeometry(String),
    /// `end_fill` was called with no fill in progress.
    FillNotStarted,
    /// `begin_fill` was called while a fill was already in progress.
    FillAlreadyStarted,
    /// The turtle was finished while a fill was still open.
    UnclosedFill,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
            Self::FillNotStarted => write!(f, "end_fill without a matching begin_fill"),
            Self::FillAlreadyStarted => write!(f, "begin_fill while a fill is already open"),
            Self::UnclosedFill => write!(f, "drawing finished with an open fill"),
        }
    }
}

impl std::error::Error for GraphicsError {}

/// Convenience alias for results using [`GraphicsError`].
pub type GraphicsResult<T> = Result<T, GraphicsError>;
