use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

use crate::core::data::aligned_buffer::AlignedBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeGridError {
    TooLarge { width: usize, height: usize },
    AllocationFailed(TryReserveError),
}

impl fmt::Display for EscapeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { width, height } => {
                write!(f, "grid of {}x{} cells cannot be addressed", width, height)
            }
            Self::AllocationFailed(err) => {
                write!(f, "could not allocate grid cells: {}", err)
            }
        }
    }
}

impl Error for EscapeGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed(err) => Some(err),
            Self::TooLarge { .. } => None,
        }
    }
}

impl From<TryReserveError> for EscapeGridError {
    fn from(err: TryReserveError) -> Self {
        Self::AllocationFailed(err)
    }
}

/// Row-major `width x height` grid of escape iteration counts.
///
/// Point `(row, col)` lives at `row * width + col`. Every cell holds either an
/// escape iteration below the limit or the limit itself for points that never
/// escaped.
#[derive(Debug)]
pub struct EscapeGrid {
    width: usize,
    height: usize,
    cells: AlignedBuffer<u32>,
}

impl EscapeGrid {
    pub fn try_new(width: usize, height: usize, initial: u32) -> Result<Self, EscapeGridError> {
        let len = width
            .checked_mul(height)
            .ok_or(EscapeGridError::TooLarge { width, height })?;
        let cells = AlignedBuffer::try_new(len, initial)?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        self.cells.as_slice()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(self.as_slice()[row * self.width + col])
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.width;
        &self.as_slice()[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let start = row * self.width;
        let width = self.width;
        &mut self.cells.as_mut_slice()[start..start + width]
    }

    /// Mutable view of `cols` cells of `row`, starting at `col`.
    pub fn span_mut(&mut self, row: usize, col: usize, cols: usize) -> &mut [u32] {
        let start = row * self.width + col;
        &mut self.cells.as_mut_slice()[start..start + cols]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.as_slice().chunks_exact(self.width)
    }

    /// Copies row `src` verbatim over row `dst`.
    pub fn mirror_row(&mut self, src: usize, dst: usize) {
        let width = self.width;
        self.cells
            .as_mut_slice()
            .copy_within(src * width..(src + 1) * width, dst * width);
    }
}
