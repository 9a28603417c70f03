//! Grid module - owns the cell matrix
//!
//! The grid is a W x H matrix of booleans indexed `[x][y]` (column-major),
//! with x ranging 0..W (left to right) and y ranging 0..H (top to bottom).
//! Dimensions are fixed at construction. A dirty flag records whether the
//! visible representation is stale.

use crate::types::LifeError;

/// Moore-neighborhood offsets (the 8 surrounding cells).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The cell matrix plus its dirty flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// `cells[x][y]`; every column holds exactly `height` entries
    cells: Vec<Vec<bool>>,
    dirty: bool,
}

impl Grid {
    /// Create an all-dead grid. Fails on a zero dimension.
    pub fn new(width: u16, height: u16) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: width as usize,
                height: height as usize,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![false; height as usize]; width as usize],
            dirty: true,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Get the state of cell (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<bool, LifeError> {
        if !self.in_bounds(x, y) {
            return Err(LifeError::OutOfBounds { x, y });
        }
        Ok(self.cells[x as usize][y as usize])
    }

    /// Set the state of cell (x, y) and mark the grid dirty
    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<(), LifeError> {
        if !self.in_bounds(x, y) {
            return Err(LifeError::OutOfBounds { x, y });
        }
        self.cells[x as usize][y as usize] = alive;
        self.dirty = true;
        Ok(())
    }

    /// Alive check that treats anything outside the grid as dead.
    #[inline(always)]
    fn alive_at(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[x as usize][y as usize]
    }

    /// Count live cells among the 8 neighbors of (x, y).
    ///
    /// Positions outside the grid count as dead (no wrap-around).
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.alive_at(x + dx, y + dy))
            .count() as u8
    }

    /// Borrow the backing matrix (`[x][y]`).
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Replace the whole matrix and mark the grid dirty.
    ///
    /// The replacement must have the same shape; on mismatch the grid is left
    /// untouched.
    pub fn replace_all(&mut self, cells: Vec<Vec<bool>>) -> Result<(), LifeError> {
        let columns_match = cells.len() == self.width as usize;
        let rows_match = cells.iter().all(|col| col.len() == self.height as usize);
        if !columns_match || !rows_match {
            return Err(LifeError::InvalidDimensions {
                width: cells.len(),
                height: cells.first().map_or(0, Vec::len),
            });
        }
        self.install(cells);
        Ok(())
    }

    /// Swap in a matrix already known to match the grid's shape.
    pub(crate) fn install(&mut self, cells: Vec<Vec<bool>>) {
        debug_assert_eq!(cells.len(), self.width as usize);
        self.cells = cells;
        self.dirty = true;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for col in &mut self.cells {
            col.fill(false);
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called by the renderer side after a successful draw.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .map(|col| col.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Coordinates of every live cell, sorted by (x, y).
    pub fn alive_cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(self.alive_count());
        for (x, col) in self.cells.iter().enumerate() {
            for (y, &alive) in col.iter().enumerate() {
                if alive {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }
}
