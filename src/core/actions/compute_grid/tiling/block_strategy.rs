use std::collections::TryReserveError;
use std::num::NonZeroUsize;

use log::trace;

use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
use crate::core::data::aligned_buffer::AlignedBuffer;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::{settle_group, TileSeeds};
use crate::core::util::block_tiles::{block_tiles, Tile};

/// Side length of a full tile, `2^6`.
pub const BLOCK_SIDE: usize = 1 << 6;

const BLOCK_AREA: usize = BLOCK_SIDE * BLOCK_SIDE;

const NONZERO_BLOCK_SIDE: NonZeroUsize = NonZeroUsize::new(BLOCK_SIDE).unwrap();

/// One group per `BLOCK_SIDE x BLOCK_SIDE` tile.
///
/// Scratch is sized for a full tile and reused for every tile; clipped edge
/// tiles pack their valid cells densely at the front of it. Results are
/// settled in tile-shaped scratch and copied out into the grid afterwards.
#[derive(Debug)]
pub struct BlockStrategy {
    col_re: AlignedBuffer<f32>,
    row_im: AlignedBuffer<f32>,
    z_re: AlignedBuffer<f32>,
    z_im: AlignedBuffer<f32>,
    escapes: AlignedBuffer<u32>,
}

impl BlockStrategy {
    pub fn try_new() -> Result<Self, TryReserveError> {
        Ok(Self {
            col_re: AlignedBuffer::try_new(BLOCK_SIDE, 0.0)?,
            row_im: AlignedBuffer::try_new(BLOCK_SIDE, 0.0)?,
            z_re: AlignedBuffer::try_new(BLOCK_AREA, 0.0)?,
            z_im: AlignedBuffer::try_new(BLOCK_AREA, 0.0)?,
            escapes: AlignedBuffer::try_new(BLOCK_AREA, 0)?,
        })
    }

    fn compute_tile(&mut self, viewport: &Viewport, limit: u32, tile: Tile, grid: &mut EscapeGrid) {
        let lanes = tile.area();
        let col_re = &mut self.col_re.as_mut_slice()[..tile.width];
        let row_im = &mut self.row_im.as_mut_slice()[..tile.height];

        for (k, re) in col_re.iter_mut().enumerate() {
            *re = viewport.re_at(tile.col + k);
        }
        for (j, im) in row_im.iter_mut().enumerate() {
            *im = viewport.im_at(tile.row + j);
        }

        let z_re = &mut self.z_re.as_mut_slice()[..lanes];
        let z_im = &mut self.z_im.as_mut_slice()[..lanes];
        let tile_rows = z_re
            .chunks_exact_mut(tile.width)
            .zip(z_im.chunks_exact_mut(tile.width))
            .zip(row_im.iter());
        for ((re_row, im_row), &im) in tile_rows {
            re_row.copy_from_slice(col_re);
            im_row.fill(im);
        }

        let escapes = &mut self.escapes.as_mut_slice()[..lanes];
        let seeds = TileSeeds {
            re: col_re,
            im: row_im,
        };
        let rounds = settle_group(z_re, z_im, escapes, &seeds, limit);

        for (j, tile_row) in escapes.chunks_exact(tile.width).enumerate() {
            grid.span_mut(tile.row + j, tile.col, tile.width)
                .copy_from_slice(tile_row);
        }

        trace!("tile {:?} settled after {} rounds", tile, rounds);
    }
}

impl TilingStrategy for BlockStrategy {
    fn kind(&self) -> TilingStrategyKinds {
        TilingStrategyKinds::Block
    }

    fn compute_rows(&mut self, viewport: &Viewport, limit: u32, rows: usize, grid: &mut EscapeGrid) {
        for tile in block_tiles(grid.width(), rows, NONZERO_BLOCK_SIDE) {
            self.compute_tile(viewport, limit, tile, grid);
        }
    }
}
