use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use log::info;

use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingMismatchError {
    GridsDiffer {
        reference: TilingStrategyKinds,
        other: TilingStrategyKinds,
        first_difference: usize,
    },
}

impl fmt::Display for TilingMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridsDiffer {
                reference,
                other,
                first_difference,
            } => {
                write!(
                    f,
                    "{} and {} tilings disagree at cell {}",
                    reference, other, first_difference
                )
            }
        }
    }
}

impl Error for TilingMismatchError {}

#[derive(Debug, Clone, PartialEq)]
pub struct TilingRun {
    pub tiling: TilingStrategyKinds,
    pub duration: Duration,
}

/// Outcome of running one configuration under every tiling strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct TilingComparison {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub bounded_points: usize,
    pub runs: Vec<TilingRun>,
}

/// Computes `config` once per tiling strategy and checks every strategy
/// produced the same grid.
pub fn mandelbrot_controller(config: &MandelbrotConfig) -> Result<TilingComparison, Box<dyn Error>> {
    info!("Rendering Mandelbrot set...");
    info!("Grid size: {}x{}", config.base_size, config.base_size);
    info!("Max iterations: {}", config.max_iterations);

    let mut runs = Vec::with_capacity(TilingStrategyKinds::ALL.len());
    let mut grids: Vec<Vec<u32>> = Vec::with_capacity(TilingStrategyKinds::ALL.len());

    for &tiling in TilingStrategyKinds::ALL {
        let mut engine = config.with_tiling(tiling).build_engine()?;

        let start = Instant::now();
        let grid = engine.compute_grid();
        let duration = start.elapsed();

        info!("{} tiling duration: {:?}", tiling, duration);
        runs.push(TilingRun { tiling, duration });
        grids.push(grid.as_slice().to_vec());
    }

    let reference = &grids[0];
    for (run, cells) in runs.iter().zip(&grids).skip(1) {
        if let Some(first_difference) = reference.iter().zip(cells).position(|(a, b)| a != b) {
            return Err(Box::new(TilingMismatchError::GridsDiffer {
                reference: runs[0].tiling,
                other: run.tiling,
                first_difference,
            }));
        }
    }

    let bounded_points = reference
        .iter()
        .filter(|&&v| v == config.max_iterations)
        .count();

    Ok(TilingComparison {
        width: config.base_size,
        height: config.base_size,
        max_iterations: config.max_iterations,
        bounded_points,
        runs,
    })
}
