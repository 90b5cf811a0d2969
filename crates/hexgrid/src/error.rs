use std::fmt;

/// Errors surfaced by grid construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero.
    InvalidDimensions { width: usize, height: usize },
    /// A grid coordinate outside `0..width` x `0..height`.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// A strict direction conversion got an index >= 6.
    DirectionOutOfRange { index: usize },
    /// Parameters for an auxiliary routine (e.g. labelings) were rejected.
    InvalidParams { reason: String },
    /// A construction pass left the cell at `(x, y)` inconsistent.
    BrokenTopology {
        x: usize,
        y: usize,
        reason: &'static str,
    },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "grid dimensions must be positive (got {width}x{height})"
            ),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) is outside the {width}x{height} grid"),
            Self::DirectionOutOfRange { index } => {
                write!(f, "direction index {index} is not in 0..6")
            }
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
            Self::BrokenTopology { x, y, reason } => {
                write!(f, "broken topology at cell ({x}, {y}): {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}
