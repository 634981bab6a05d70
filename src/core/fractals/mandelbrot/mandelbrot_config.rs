use crate::core::{
    actions::compute_grid::tiling::kinds::TilingStrategyKinds,
    data::{complex_rect::ComplexRect, viewport::canonical_region},
    fractals::mandelbrot::{engine::MandelbrotEngine, errors::MandelbrotError},
};

const DEFAULT_BASE_SIZE: usize = 1024;
const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Everything needed to build a [`MandelbrotEngine`].
///
/// `region` must be symmetric about the real axis for the mirrored lower half
/// to be correct; the engine warns about, but never corrects, other regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub base_size: usize,
    pub max_iterations: u32,
    pub region: ComplexRect,
    pub tiling: TilingStrategyKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            region: canonical_region(),
            tiling: TilingStrategyKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn new(base_size: usize, max_iterations: u32) -> Self {
        Self {
            base_size,
            max_iterations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tiling(self, tiling: TilingStrategyKinds) -> Self {
        Self { tiling, ..self }
    }

    pub fn build_engine(&self) -> Result<MandelbrotEngine, MandelbrotError> {
        MandelbrotEngine::from_config(self)
    }
}
