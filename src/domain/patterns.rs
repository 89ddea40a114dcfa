use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells past an edge wrap around to the opposite side.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            grid.set_wrapped(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Place pattern so it sits in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(self.height) / 2;
        let col = cols.saturating_sub(self.width) / 2;
        self.place_on(grid, row, col);
    }
}

/// Small patterns that fit on the default 6x6 board
pub mod presets {
    use super::*;

    /// Initial board: a lone cell at row 0, column 1
    pub fn default_seed() -> Grid {
        let mut grid = Grid::default();
        seed_cell().place_on(&mut grid, 0, 1);
        grid
    }

    fn seed_cell() -> Pattern {
        Pattern::new("Seed", "Single cell", vec![(0, 0)])
    }

    /// Blinker - period 2 oscillator (horizontal phase)
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Glider - moves diagonally, wraps around the torus
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon()]
    }

    /// Look a preset up by case-insensitive name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::next_generation;

    #[test]
    fn test_default_seed() {
        let seed = presets::default_seed();
        assert_eq!(seed.dimensions(), (6, 6));
        assert_eq!(seed.population(), 1);
        assert!(seed.is_alive(0, 1));
    }

    #[test]
    fn test_default_seed_dies_after_one_step() {
        let next = next_generation(&presets::default_seed());
        assert!(!next.is_alive(0, 1));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_pattern_bounds() {
        let toad = presets::toad();
        assert_eq!((toad.height, toad.width), (2, 4));
        let beacon = presets::beacon();
        assert_eq!((beacon.height, beacon.width), (4, 4));
    }

    #[test]
    fn test_place_on_wraps_edges() {
        let mut grid = Grid::default();
        presets::block().place_on(&mut grid, 5, 5);
        assert_eq!(grid.population(), 4);
        for (r, c) in [(5, 5), (5, 0), (0, 5), (0, 0)] {
            assert!(grid.is_alive(r, c), "({r}, {c})");
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::default();
        presets::block().place_centered(&mut grid);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_beacon_has_period_two() {
        let mut grid = Grid::default();
        presets::beacon().place_centered(&mut grid);
        let once = next_generation(&grid);
        assert_ne!(once, grid);
        assert_eq!(next_generation(&once), grid);
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(presets::find("glider").map(|p| p.name), Some("Glider"));
        assert!(presets::find("gosper").is_none());
    }
}
