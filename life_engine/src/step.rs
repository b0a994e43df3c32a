// step.rs - One generation advance

use crate::grid::Grid;
use crate::neighbors::live_neighbors;
use crate::rules::next_state;

/// Computes the next generation into a fresh grid.
///
/// Every cell reads only from `grid`, so no cell observes a partially
/// updated neighbourhood. Total over any grid, including empty ones.
pub fn advance(grid: &Grid) -> Grid {
    Grid::from_fn(grid.dimensions(), |row, col| {
        let alive = grid.get(row, col).unwrap_or_default();
        next_state(alive, live_neighbors(grid, row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;

    fn grid(rows: i64, cols: i64, live: &[(usize, usize)]) -> Grid {
        Grid::with_live_cells(Dimensions::new(rows, cols).unwrap(), live).unwrap()
    }

    #[test]
    fn test_lonely_cell_dies() {
        let g = grid(5, 5, &[(2, 2)]);
        assert!(advance(&g).is_dead());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = grid(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn test_blinker_period_two() {
        let horizontal = grid(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let once = advance(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(advance(&once), horizontal);
    }

    #[test]
    fn test_one_by_one_grid() {
        let g = grid(1, 1, &[(0, 0)]);
        assert!(advance(&g).is_dead());
    }

    #[test]
    fn test_degenerate_grids() {
        let empty = grid(0, 0, &[]);
        assert_eq!(advance(&empty), empty);

        let strip = grid(1, 5, &[(0, 1), (0, 2), (0, 3)]);
        // Middle cell keeps two neighbours, the ends have one.
        assert_eq!(advance(&strip), grid(1, 5, &[(0, 2)]));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let g = grid(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = g.clone();
        let _ = advance(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = grid(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let moved = grid(8, 8, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        let after = (0..4).fold(glider, |g, _| advance(&g));
        assert_eq!(after, moved);
    }
}
