use log::{debug, warn};

use crate::core::actions::compute_grid::compute_grid::compute_grid;
use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
use crate::core::actions::compute_grid::tiling::factory::tiling_strategy_factory;
use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Escape-time engine for a square `base_size x base_size` sampling of a
/// region of the complex plane.
///
/// All buffers are acquired up front; [`MandelbrotEngine::compute_grid`]
/// never allocates and can be called any number of times.
#[derive(Debug)]
pub struct MandelbrotEngine {
    viewport: Viewport,
    max_iterations: u32,
    strategy: Box<dyn TilingStrategy>,
    grid: EscapeGrid,
}

impl MandelbrotEngine {
    /// Engine over the canonical region with the default tiling.
    pub fn new(base_size: usize, max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::from_config(&MandelbrotConfig::new(base_size, max_iterations))
    }

    pub fn with_tiling(
        base_size: usize,
        max_iterations: u32,
        tiling: TilingStrategyKinds,
    ) -> Result<Self, MandelbrotError> {
        Self::from_config(&MandelbrotConfig::new(base_size, max_iterations).with_tiling(tiling))
    }

    pub fn from_config(config: &MandelbrotConfig) -> Result<Self, MandelbrotError> {
        if config.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        let width = config.base_size;
        let height = config.base_size;
        let viewport = Viewport::from_region(config.region, width, height)?;

        if !viewport.is_vertically_symmetric(height) {
            warn!(
                "region {:?} is not symmetric about the real axis; the lower half is mirrored regardless",
                config.region
            );
        }

        let grid = EscapeGrid::try_new(width, height, config.max_iterations)?;
        let strategy = tiling_strategy_factory(config.tiling, width)?;

        debug!(
            "{} tiling engine for {}x{} grid, limit {}, {:?}",
            strategy.display_name(),
            width,
            height,
            config.max_iterations,
            viewport
        );

        Ok(Self {
            viewport,
            max_iterations: config.max_iterations,
            strategy,
            grid,
        })
    }

    /// Recomputes every cell from scratch and returns the settled grid.
    pub fn compute_grid(&mut self) -> &EscapeGrid {
        compute_grid(
            self.strategy.as_mut(),
            &self.viewport,
            self.max_iterations,
            &mut self.grid,
        );

        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn tiling(&self) -> TilingStrategyKinds {
        self.strategy.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;

    #[test]
    fn test_zero_iterations_is_rejected() {
        assert_eq!(
            MandelbrotEngine::new(16, 0).unwrap_err(),
            MandelbrotError::ZeroMaxIterationsError
        );
    }

    #[test]
    fn test_degenerate_base_size_is_rejected() {
        assert_eq!(
            MandelbrotEngine::new(0, 10).unwrap_err(),
            MandelbrotError::GridTooSmall { width: 0, height: 0 }
        );
        assert_eq!(
            MandelbrotEngine::new(1, 10).unwrap_err(),
            MandelbrotError::GridTooSmall { width: 1, height: 1 }
        );
    }

    #[test]
    fn test_unaddressable_grid_is_rejected() {
        let size = usize::MAX / 2;

        assert_eq!(
            MandelbrotEngine::new(size, 10).unwrap_err(),
            MandelbrotError::GridTooLarge {
                width: size,
                height: size
            }
        );
    }

    #[test]
    fn test_oversized_grid_reports_allocation_failure() {
        let size = 1usize << (usize::BITS / 2 - 1);

        let result = MandelbrotEngine::new(size, 10);

        assert!(matches!(result, Err(MandelbrotError::AllocationFailed(_))));
    }

    #[test]
    fn test_accessors() {
        let engine = MandelbrotEngine::with_tiling(8, 50, TilingStrategyKinds::Block).unwrap();

        assert_eq!(engine.width(), 8);
        assert_eq!(engine.height(), 8);
        assert_eq!(engine.max_iterations(), 50);
        assert_eq!(engine.tiling(), TilingStrategyKinds::Block);
        assert_eq!(engine.viewport(), Viewport::canonical(8, 8).unwrap());
    }

    #[test]
    fn test_repeated_computation_is_deterministic() {
        let mut engine = MandelbrotEngine::new(24, 120).unwrap();

        let first = engine.compute_grid().as_slice().to_vec();
        let second = engine.compute_grid().as_slice().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn test_asymmetric_region_is_still_mirrored() {
        let region = ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.5)).unwrap();
        let config = MandelbrotConfig {
            region,
            ..MandelbrotConfig::new(9, 30)
        };
        let mut engine = MandelbrotEngine::from_config(&config).unwrap();

        let grid = engine.compute_grid();

        for row in 0..9 {
            assert_eq!(grid.row(row), grid.row(8 - row));
        }
    }
}
