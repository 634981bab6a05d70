use std::collections::TryReserveError;

use log::trace;

use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
use crate::core::data::aligned_buffer::AlignedBuffer;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::{settle_group, RowSeeds};

/// One group per image row; the kernel writes straight into the grid row.
#[derive(Debug)]
pub struct RowStrategy {
    width: usize,
    c_re: AlignedBuffer<f32>,
    z_re: AlignedBuffer<f32>,
    z_im: AlignedBuffer<f32>,
}

impl RowStrategy {
    pub fn try_new(width: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            width,
            c_re: AlignedBuffer::try_new(width, 0.0)?,
            z_re: AlignedBuffer::try_new(width, 0.0)?,
            z_im: AlignedBuffer::try_new(width, 0.0)?,
        })
    }

    fn compute_row(&mut self, viewport: &Viewport, limit: u32, row: usize, grid: &mut EscapeGrid) {
        let c_im = viewport.im_at(row);

        let lanes = self
            .c_re
            .as_mut_slice()
            .iter_mut()
            .zip(self.z_re.as_mut_slice().iter_mut())
            .zip(self.z_im.as_mut_slice().iter_mut());
        for (col, ((c_re, re), im)) in lanes.enumerate() {
            *c_re = viewport.re_at(col);
            *re = *c_re;
            *im = c_im;
        }

        let seeds = RowSeeds {
            re: self.c_re.as_slice(),
            im: c_im,
        };
        let rounds = settle_group(
            self.z_re.as_mut_slice(),
            self.z_im.as_mut_slice(),
            grid.row_mut(row),
            &seeds,
            limit,
        );

        trace!("row {} settled after {} rounds", row, rounds);
    }
}

impl TilingStrategy for RowStrategy {
    fn kind(&self) -> TilingStrategyKinds {
        TilingStrategyKinds::Row
    }

    fn compute_rows(&mut self, viewport: &Viewport, limit: u32, rows: usize, grid: &mut EscapeGrid) {
        debug_assert_eq!(grid.width(), self.width);

        for row in 0..rows {
            self.compute_row(viewport, limit, row, grid);
        }
    }
}
