use thiserror::Error;

/// Precondition violations reported by the grid and the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    /// Row `row` does not have the same length as row 0.
    #[error("row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Coordinates outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
