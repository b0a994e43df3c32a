// grid.rs - Grid types for Conway's Game of Life

use crate::error::GridError;

/// Validated grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Checks caller-supplied dimensions. Negative sizes, or sizes whose
    /// cell count does not fit in memory addressing, are rejected.
    pub fn new(rows: i64, cols: i64) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidDimension { rows, cols };
        let r = usize::try_from(rows).map_err(|_| invalid())?;
        let c = usize::try_from(cols).map_err(|_| invalid())?;
        r.checked_mul(c).ok_or_else(invalid)?;
        Ok(Self { rows: r, cols: c })
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// One generation: a rows x cols matrix of live/dead cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..dims.rows)
            .flat_map(|row| (0..dims.cols).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { dims, cells }
    }

    /// Grid with exactly the listed cells alive.
    pub fn with_live_cells(dims: Dimensions, live: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::empty(dims);
        for &(row, col) in live {
            let idx = grid.offset(row, col)?;
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub const fn rows(&self) -> usize {
        self.dims.rows
    }

    pub const fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Cell state, or `None` when the coordinate is off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.dims
            .contains(row, col)
            .then(|| self.cells[row * self.dims.cols + col])
    }

    /// Cell state; off-grid coordinates are an error.
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.offset(row, col).map(|idx| self.cells[idx])
    }

    /// Row `row` as a slice of `cols` cells.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.dims.rows).then(|| {
            let start = row * self.dims.cols;
            &self.cells[start..start + self.dims.cols]
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.dims.rows).filter_map(move |row| self.row(row))
    }

    /// Returns a copy of this grid with cell (row, col) flipped.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let idx = self.offset(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = !next.cells[idx];
        Ok(next)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.dims.contains(row, col) {
            Ok(row * self.dims.cols + col)
        } else {
            Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.dims.rows,
                cols: self.dims.cols,
            })
        }
    }
}
