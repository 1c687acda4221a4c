//! Board module - manages the game grid
//!
//! The board is a 15x10 grid where each cell is either empty or filled with a color.
//! Coordinates are `(row, col)` with row 0 at the top and column 0 at the left.
//!
//! The board does no implicit bounds checking: indexing outside the grid is a
//! programming error and panics. Legality checks in [`crate::placement`] test
//! bounds before they ever touch the board.

use crate::types::{Cell, Rgb, COLUMNS, ROWS};

/// One board row
pub type Row = [Cell; COLUMNS];

/// The game board - 15 rows x 10 columns, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Get the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Check if the cell at `(row, col)` is filled
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.rows[row][col].is_empty()
    }

    /// Fill the cell at `(row, col)` with `color`
    ///
    /// The cell must be in bounds and empty.
    pub fn place(&mut self, row: usize, col: usize, color: Rgb) {
        debug_assert!(
            !self.is_occupied(row, col),
            "cell ({}, {}) is already filled",
            row,
            col
        );
        self.rows[row][col] = Cell::Filled(color);
    }

    /// Empty the cell at `(row, col)`
    pub fn clear(&mut self, row: usize, col: usize) {
        self.rows[row][col] = Cell::Empty;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(|cell| !cell.is_empty())
    }

    /// Remove a row by cascading overwrite
    ///
    /// Every row above `row` is copied one row down, starting at `row` and
    /// working upward. Row 0 keeps its own content (the cascade only reads from
    /// it) unless `row` is row 0 itself, in which case it is emptied.
    pub fn collapse_row(&mut self, row: usize) {
        if row == 0 {
            self.rows[0] = [Cell::Empty; COLUMNS];
            return;
        }
        for r in (1..=row).rev() {
            self.rows[r] = self.rows[r - 1];
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// Copy the grid into `out`
    pub fn write_grid(&self, out: &mut [Row; ROWS]) {
        *out = self.rows;
    }

    /// Count filled cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Fill every cell of `row` with `color`
    pub fn fill_row(&mut self, row: usize, color: Rgb) {
        self.rows[row] = [Cell::Filled(color); COLUMNS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
