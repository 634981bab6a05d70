use std::collections::TryReserveError;

use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
use crate::core::actions::compute_grid::tiling::{
    block_strategy::BlockStrategy, kinds::TilingStrategyKinds, row_strategy::RowStrategy,
};

/// Builds the strategy for `kind`, sizing its scratch for grids `width` wide.
pub fn tiling_strategy_factory(
    kind: TilingStrategyKinds,
    width: usize,
) -> Result<Box<dyn TilingStrategy>, TryReserveError> {
    let strategy: Box<dyn TilingStrategy> = match kind {
        TilingStrategyKinds::Row => Box::new(RowStrategy::try_new(width)?),
        TilingStrategyKinds::Block => Box::new(BlockStrategy::try_new()?),
    };

    Ok(strategy)
}
