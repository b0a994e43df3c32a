// neighbors.rs - Live-neighbor counting with hard grid edges

use crate::error::GridError;
use crate::grid::Grid;

/// Relative positions of the eight surrounding cells.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Number of live cells around (row, col), in `0..=8`.
///
/// Cells beyond the edge count as dead; the grid does not wrap.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
    grid.is_alive(row, col)?;
    Ok(live_neighbors(grid, row, col))
}

/// Unchecked variant for callers that already iterate valid coordinates.
pub(crate) fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.get(nr, nc) == Some(true) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;

    fn grid(rows: i64, cols: i64, live: &[(usize, usize)]) -> Grid {
        Grid::with_live_cells(Dimensions::new(rows, cols).unwrap(), live).unwrap()
    }

    #[test]
    fn test_offsets_exclude_center() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        let mut sorted = NEIGHBOR_OFFSETS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_fully_surrounded() {
        let all: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let g = grid(3, 3, &all);
        assert_eq!(count_live_neighbors(&g, 1, 1), Ok(8));
    }

    #[test]
    fn test_cell_itself_not_counted() {
        let g = grid(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&g, 1, 1), Ok(0));
        assert_eq!(count_live_neighbors(&g, 0, 0), Ok(1));
    }

    #[test]
    fn test_corner_does_not_wrap() {
        // Opposite corners would be neighbors on a torus.
        let g = grid(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(count_live_neighbors(&g, 0, 0), Ok(0));
    }

    #[test]
    fn test_single_cell_grid() {
        let g = grid(1, 1, &[(0, 0)]);
        assert_eq!(count_live_neighbors(&g, 0, 0), Ok(0));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let g = grid(2, 2, &[]);
        assert!(matches!(
            count_live_neighbors(&g, 2, 1),
            Err(GridError::IndexOutOfRange { .. })
        ));
    }
}
