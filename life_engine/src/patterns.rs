// patterns.rs - Named starting configurations

use crate::error::GridError;
use crate::grid::{Dimensions, Grid};

/// A named shape given as (row, col) offsets from its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as (height, width).
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Fresh grid with this pattern's top-left corner at `origin`.
    pub fn place(&self, dims: Dimensions, origin: (usize, usize)) -> Result<Grid, GridError> {
        let (top, left) = origin;
        let cells: Vec<_> = self
            .cells
            .iter()
            .map(|&(r, c)| (top + r, left + c))
            .collect();
        Grid::with_live_cells(dims, &cells)
    }

    /// Fresh grid with this pattern centered.
    pub fn centered(&self, dims: Dimensions) -> Result<Grid, GridError> {
        let (height, width) = self.extent();
        let origin = (
            dims.rows.saturating_sub(height) / 2,
            dims.cols.saturating_sub(width) / 2,
        );
        self.place(dims, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::advance;

    fn dims(rows: i64, cols: i64) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_extents() {
        assert_eq!(find("Pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find("Gosper Glider Gun").unwrap().extent(), (9, 36));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let gun = find("Gosper Glider Gun").unwrap();
        assert!(matches!(
            gun.centered(dims(20, 20)),
            Err(GridError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_oscillator_periods() {
        for (name, period) in [("Blinker", 2), ("Toad", 2), ("Beacon", 2), ("Pulsar", 3)] {
            let start = find(name).unwrap().centered(dims(20, 20)).unwrap();
            let mut g = advance(&start);
            assert_ne!(g, start, "{name} should change");
            for _ in 1..period {
                g = advance(&g);
            }
            assert_eq!(g, start, "{name} should have period {period}");
        }
    }

    #[test]
    fn test_gun_keeps_firing() {
        let gun = find("Gosper Glider Gun").unwrap();
        let start = gun.place(dims(40, 60), (5, 5)).unwrap();
        let after = (0..60).fold(start.clone(), |g, _| advance(&g));
        assert!(after.live_count() > start.live_count());
    }
}
