use std::{collections::TryReserveError, error::Error, fmt};

use crate::core::data::escape_grid::EscapeGridError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    GridTooSmall { width: usize, height: usize },
    GridTooLarge { width: usize, height: usize },
    AllocationFailed(TryReserveError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::GridTooSmall { width, height } => {
                write!(f, "grid must be at least 2x2 pixels: {}x{}", width, height)
            }
            Self::GridTooLarge { width, height } => {
                write!(f, "grid of {}x{} pixels cannot be addressed", width, height)
            }
            Self::AllocationFailed(err) => {
                write!(f, "could not allocate escape-time buffers: {}", err)
            }
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for MandelbrotError {
    fn from(err: TryReserveError) -> Self {
        Self::AllocationFailed(err)
    }
}

impl From<ViewportError> for MandelbrotError {
    fn from(err: ViewportError) -> Self {
        match err {
            ViewportError::GridTooSmall { width, height } => Self::GridTooSmall { width, height },
        }
    }
}

impl From<EscapeGridError> for MandelbrotError {
    fn from(err: EscapeGridError) -> Self {
        match err {
            EscapeGridError::TooLarge { width, height } => Self::GridTooLarge { width, height },
            EscapeGridError::AllocationFailed(err) => Self::AllocationFailed(err),
        }
    }
}
