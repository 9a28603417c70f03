//! Simulation module - the Game of Life transition rule
//!
//! Rule (B3/S23): a live cell with 2 or 3 live neighbors survives, a dead cell
//! with exactly 3 live neighbors is born, every other cell is dead in the next
//! generation. The neighborhood stops at the grid edge.

use crate::grid::Grid;

/// Next state of one cell given its current state and live-neighbor count.
#[inline(always)]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation from an immutable view of the current one.
pub fn next_generation(grid: &Grid) -> Vec<Vec<bool>> {
    grid.cells()
        .iter()
        .enumerate()
        .map(|(x, col)| {
            col.iter()
                .enumerate()
                .map(|(y, &alive)| next_state(alive, grid.neighbor_count(x as i32, y as i32)))
                .collect()
        })
        .collect()
}

/// Drives generations and owns the turn counter.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    turn: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self { turn: 0 }
    }

    /// Number of generations advanced so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Advance `grid` by one generation, mark it dirty, and bump the turn.
    pub fn advance(&mut self, grid: &mut Grid) {
        let next = next_generation(grid);
        grid.install(next);
        self.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {}", n);
            assert_eq!(next_state(false, n), n == 3, "dead with {}", n);
        }
    }

    #[test]
    fn advance_marks_dirty_and_counts_turns() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.clear_dirty();
        let mut sim = Simulation::new();

        sim.advance(&mut grid);
        assert!(grid.is_dirty());
        assert_eq!(sim.turn(), 1);

        sim.advance(&mut grid);
        assert_eq!(sim.turn(), 2);
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        Simulation::new().advance(&mut grid);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn corner_l_becomes_block() {
        // Three cells in a corner: the fourth is born, no wrap-around births.
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(1, 0, true).unwrap();
        grid.set(0, 1, true).unwrap();
        Simulation::new().advance(&mut grid);
        assert_eq!(grid.alive_cells(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
