use std::fmt;

use rand::Rng;

use super::{Cell, GridError};

/// Default board size used by the app and the reset seed.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 6;

/// Grid is a rectangular snapshot of the board, stored row-major.
///
/// Rectangularity is enforced on construction, so every value of this type
/// has `rows >= 1`, `cols >= 1` and `cells.len() == rows * cols`.
/// `Clone` is a structural deep copy and `PartialEq` compares by value.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Build a grid from a nested boolean matrix, rejecting jagged input
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::NonRectangularGrid { row, expected, found });
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied().map(Cell::from))
            .collect();
        Ok(Self {
            rows: rows.len(),
            cols: expected,
            cells,
        })
    }

    /// Copy the grid out as a fresh nested boolean matrix
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.is_alive()).collect())
            .collect()
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.get_index(row, col))
        } else {
            Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Whether the cell at position is alive; out-of-range reads as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Set cell at (row, col) taken modulo the grid size
    pub(crate) fn set_wrapped(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.get_index(row % self.rows, col % self.cols);
        self.cells[idx] = cell;
    }

    /// Flip the cell at position and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize grid, each cell alive with probability `density`.
    /// Out-of-range densities are clamped and NaN counts as 0.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Build a grid of the same shape from a per-cell function
    pub(crate) fn map_cells(&self, mut f: impl FnMut(usize, usize, Cell) -> Cell) -> Self {
        let cells = self.iter_cells().map(|(row, col, cell)| f(row, col, cell)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Dead; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

/// Text form: one line per row, `#` alive and `.` dead
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row
                .iter()
                .map(|c| if c.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
