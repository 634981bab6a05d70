use std::fmt::Debug;

use crate::core::actions::compute_grid::tiling::kinds::TilingStrategyKinds;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;

/// Partitions grid rows into groups and runs the escape-time kernel on each.
///
/// Implementations own their scratch buffers and reuse them from one group to
/// the next.
pub trait TilingStrategy: Debug {
    fn kind(&self) -> TilingStrategyKinds;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Settles every cell of rows `0..rows` of `grid`.
    fn compute_rows(&mut self, viewport: &Viewport, limit: u32, rows: usize, grid: &mut EscapeGrid);
}
