use crate::core::data::escape_grid::EscapeGrid;

/// Number of leading rows that must be computed: the upper half, plus the
/// middle row when `height` is odd.
#[must_use]
pub fn computed_rows(height: usize) -> usize {
    height.div_ceil(2)
}

/// Copies row `i` over row `height - 1 - i` for every row of the upper half.
///
/// Only valid when the sampled rows are mirror images across the real axis;
/// that is the caller's contract and is not checked here.
pub fn mirror_upper_half(grid: &mut EscapeGrid) {
    let height = grid.height();

    for row in 0..height / 2 {
        grid.mirror_row(row, height - 1 - row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_row_ids(width: usize, height: usize, computed: usize) -> EscapeGrid {
        let mut grid = EscapeGrid::try_new(width, height, u32::MAX).unwrap();
        for row in 0..computed {
            grid.row_mut(row).fill(row as u32);
        }
        grid
    }

    #[test]
    fn test_computed_rows_rounds_up() {
        assert_eq!(computed_rows(1), 1);
        assert_eq!(computed_rows(4), 2);
        assert_eq!(computed_rows(5), 3);
        assert_eq!(computed_rows(1024), 512);
    }

    #[test]
    fn test_even_height_mirrors_every_lower_row() {
        let mut grid = grid_with_row_ids(3, 4, computed_rows(4));

        mirror_upper_half(&mut grid);

        let firsts: Vec<u32> = grid.rows().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_odd_height_keeps_middle_row() {
        let mut grid = grid_with_row_ids(2, 5, computed_rows(5));

        mirror_upper_half(&mut grid);

        let firsts: Vec<u32> = grid.rows().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![0, 1, 2, 1, 0]);
    }
}
