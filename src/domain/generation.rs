//! Generation engine.
//!
//! Pure functions mapping one grid snapshot to the next on a torus: the row
//! above row 0 is the last row and the column left of column 0 is the last
//! column. Nothing here holds state; the caller owns the grid.

use super::{Grid, GridError};

/// The 8 neighbor offsets as (row delta, col delta): N, NE, E, SE, S, SW, W, NW
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Wrap `index + delta` into `[0, size)`.
///
/// `%` keeps the sign of the dividend, so a negative sum is shifted by
/// `size` and reduced again.
pub fn wrap(index: usize, delta: isize, size: usize) -> usize {
    let size = size as isize;
    (((index as isize + delta) % size + size) % size) as usize
}

/// Count live neighbors, assuming (row, col) is in bounds
fn alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.is_alive(wrap(row, dr, rows), wrap(col, dc, cols)))
        .count() as u8
}

/// Number of alive cells among the 8 toroidal neighbors of (row, col).
///
/// On grids narrower than 3 cells some offsets wrap onto the same cell (or
/// the cell itself); each offset is counted on its own.
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
    let (rows, cols) = grid.dimensions();
    if row >= rows || col >= cols {
        return Err(GridError::IndexOutOfRange { row, col, rows, cols });
    }
    Ok(alive_neighbors(grid, row, col))
}

/// Compute the next generation as a new grid.
///
/// Every decision reads the input snapshot only, never a cell already
/// updated in this pass.
pub fn next_generation(grid: &Grid) -> Grid {
    grid.map_cells(|row, col, cell| cell.evolve(alive_neighbors(grid, row, col)))
}

/// Same as [`next_generation`] for callers holding a raw boolean matrix.
pub fn next_generation_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Vec<Vec<bool>>, GridError> {
    let grid = Grid::from_rows(rows)?;
    Ok(next_generation(&grid).to_rows())
}

/// Endless iterator over successive generations, starting after `seed`
pub fn generations(seed: &Grid) -> Generations {
    Generations {
        current: seed.clone(),
    }
}

pub struct Generations {
    current: Grid,
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        self.current = next_generation(&self.current);
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn grid(rows: &[[bool; 3]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    const F: bool = false;
    const T: bool = true;

    fn survives(grid: &Grid, row: usize, col: usize) -> bool {
        next_generation(grid).get(row, col) == Some(Cell::Alive)
    }

    #[test]
    fn test_wrap_handles_negative_offsets() {
        assert_eq!(wrap(0, -1, 6), 5);
        assert_eq!(wrap(5, 1, 6), 0);
        assert_eq!(wrap(3, -1, 6), 2);
        assert_eq!(wrap(0, -1, 1), 0);
    }

    #[test]
    fn test_all_alive_center_has_eight() {
        let g = grid(&[[T, T, T], [T, T, T], [T, T, T]]);
        assert_eq!(count_alive_neighbors(&g, 1, 1), Ok(8));
    }

    #[test]
    fn test_count_out_of_range() {
        let g = Grid::default();
        assert_eq!(
            count_alive_neighbors(&g, 6, 0),
            Err(GridError::IndexOutOfRange { row: 6, col: 0, rows: 6, cols: 6 })
        );
    }

    #[test]
    fn test_single_cell_dies() {
        let g = grid(&[[F, F, F], [F, T, F], [F, F, F]]);
        assert!(!survives(&g, 1, 1));
    }

    #[test]
    fn test_plus_center_dies_of_overpopulation() {
        let g = grid(&[[F, T, F], [T, T, T], [F, T, F]]);
        assert_eq!(count_alive_neighbors(&g, 1, 1), Ok(4));
        assert!(!survives(&g, 1, 1));
    }

    #[test]
    fn test_dead_cell_with_three_is_born() {
        let g = grid(&[[F, T, F], [T, F, T], [F, F, F]]);
        assert_eq!(count_alive_neighbors(&g, 1, 1), Ok(3));
        assert!(survives(&g, 1, 1));
    }

    #[test]
    fn test_corner_sees_opposite_corner() {
        let mut g = Grid::default();
        g.set(5, 5, Cell::Alive).unwrap();
        assert_eq!(count_alive_neighbors(&g, 0, 0), Ok(1));
        assert_eq!(count_alive_neighbors(&g, 0, 1), Ok(0));
    }

    #[test]
    fn test_tiny_grid_counts_each_offset() {
        let g = Grid::from_rows(&[[true]]).unwrap();
        assert_eq!(count_alive_neighbors(&g, 0, 0), Ok(8));
    }

    #[test]
    fn test_rows_variant_validates() {
        let jagged = vec![vec![true, true], vec![true]];
        assert!(matches!(
            next_generation_rows(&jagged),
            Err(GridError::NonRectangularGrid { .. })
        ));
        assert_eq!(
            next_generation_rows(&[[F, F], [F, F]]),
            Ok(vec![vec![false, false], vec![false, false]])
        );
    }

    #[test]
    fn test_generations_iterator() {
        let g = grid(&[[F, F, F], [F, T, F], [F, F, F]]);
        let after: Vec<Grid> = generations(&g).take(2).collect();
        assert_eq!(after[0].population(), 0);
        assert_eq!(after[1].population(), 0);
    }
}
