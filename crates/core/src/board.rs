//! Board module - manages the settled-cell grid
//!
//! The board is a `rows x columns` grid where each cell is empty or holds a
//! color tag. Storage is a flat row-major vector sized once at construction.
//! Coordinates: `(row, column)`, row 0 at the top.

use crate::types::{Cell, Color};

/// The settled-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: u16,
    columns: u16,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
        }
    }

    /// Calculate flat index from (row, column)
    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if self.is_out_of_bounds(row, column) {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Get cell at (row, column); None if out of bounds
    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, column); returns false if out of bounds
    pub fn set(&mut self, row: i32, column: i32, cell: Cell) -> bool {
        match self.index(row, column) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_empty_at(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(None))
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, row: i32, column: i32) -> bool {
        row < 0 || row >= self.rows as i32 || column < 0 || column >= self.columns as i32
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows as usize {
            return None;
        }
        let width = self.columns as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| !cells.is_empty() && cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Write `color` into every given cell that lies inside the grid.
    ///
    /// Returns the number of cells written; cells above or outside the grid are dropped.
    pub fn merge(&mut self, cells: impl IntoIterator<Item = (i32, i32)>, color: Color) -> usize {
        cells
            .into_iter()
            .filter(|&(row, column)| self.set(row, column, Some(color)))
            .count()
    }

    /// Remove every full row and shift the remaining rows down, refilling the
    /// top with empty rows. Returns the number of rows removed.
    ///
    /// Scans bottom to top with a write cursor, so each surviving row is copied once.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.columns as usize;
        let mut write_row = self.rows as usize;
        let mut cleared = 0;

        for read_row in (0..self.rows as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty every cell, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    #[cfg(test)]
    fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows as usize)
            .filter_map(|row| self.row(row).map(<[Cell]>::to_vec))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLUMNS)
    }
}
