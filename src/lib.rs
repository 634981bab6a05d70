mod controllers;
mod core;

pub use controllers::mandelbrot::{mandelbrot_controller, TilingComparison, TilingMismatchError, TilingRun};

pub use crate::core::actions::compute_grid::compute_grid::compute_grid;
pub use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
pub use crate::core::actions::compute_grid::symmetry::{computed_rows, mirror_upper_half};
pub use crate::core::actions::compute_grid::tiling::block_strategy::{BlockStrategy, BLOCK_SIDE};
pub use crate::core::actions::compute_grid::tiling::factory::tiling_strategy_factory;
pub use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
pub use crate::core::actions::compute_grid::tiling::row_strategy::RowStrategy;
pub use crate::core::data::aligned_buffer::{AlignedBuffer, ALIGN_BYTES};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::viewport::{canonical_region, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::engine::MandelbrotEngine;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::escape_time::{
    settle_group, GroupSeeds, RowSeeds, TileSeeds, ESCAPE_RADIUS_SQ,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::block_tiles::{block_tiles, Tile};
