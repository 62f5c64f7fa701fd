//! Sheet type

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::{Row, EMPTY_CELL};

/// A sheet (single table in a document)
///
/// Rows that were declared as repeated in the source share their storage;
/// see [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Rows in document order
    rows: Vec<Row>,
    /// Column cap the rows were built with
    max_column_count: usize,
}

impl Sheet {
    /// Create a new sheet
    pub fn new<S: Into<String>>(name: S, rows: Vec<Row>, max_column_count: usize) -> Self {
        Self {
            name: name.into(),
            rows,
            max_column_count,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column cap applied to every row of this sheet
    pub fn max_column_count(&self) -> usize {
        self.max_column_count
    }

    /// All rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index (0-based)
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a row by index, failing when it is out of range
    pub fn try_row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or(Error::RowOutOfBounds(index, self.rows.len()))
    }

    /// Get a cell by (row, column)
    ///
    /// Returns `None` when the row does not exist. A column past the end of
    /// the row yields the empty cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows
            .get(row)
            .map(|r| r.get(col).unwrap_or(&EMPTY_CELL))
    }

    /// Widest row in the sheet
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }
}
