use std::num::NonZeroUsize;

/// A rectangle of grid cells processed as one group, clipped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Tile {
    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Splits the first `rows` rows of a `width` wide grid into `side x side`
/// tiles, row of tiles by row of tiles. Tiles on the right and bottom edges
/// are clipped to what remains.
pub fn block_tiles(width: usize, rows: usize, side: NonZeroUsize) -> impl Iterator<Item = Tile> {
    let side = side.get();

    (0..rows).step_by(side).flat_map(move |row| {
        (0..width).step_by(side).map(move |col| Tile {
            row,
            col,
            width: side.min(width - col),
            height: side.min(rows - row),
        })
    })
}
