use log::debug;

use crate::core::actions::compute_grid::ports::tiling_strategy::TilingStrategy;
use crate::core::actions::compute_grid::symmetry::{computed_rows, mirror_upper_half};
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;

/// Fills `grid` with escape counts for `viewport`, computing the upper half
/// with `strategy` and mirroring it into the lower half.
pub fn compute_grid<T: TilingStrategy + ?Sized>(
    strategy: &mut T,
    viewport: &Viewport,
    limit: u32,
    grid: &mut EscapeGrid,
) {
    let rows = computed_rows(grid.height());

    debug!(
        "{} tiling: computing {} of {} rows, limit {}",
        strategy.display_name(),
        rows,
        grid.height(),
        limit
    );

    strategy.compute_rows(viewport, limit, rows, grid);
    mirror_upper_half(grid);
}
