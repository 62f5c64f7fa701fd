//! Row storage
//!
//! Spreadsheet exports routinely declare a single cell repeated thousands of
//! times to fill the unused width of a sheet. A [`Row`] therefore stores its
//! cells as run-length segments (`cell`, `run`) instead of one entry per
//! column. Segments live behind an [`Arc`], so a row repeated many times is
//! stored once and shared.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::cell::Cell;

/// Shared empty cell returned for out-of-range lookups
pub(crate) static EMPTY_CELL: Cell = Cell::empty();

/// A run of identical cells
#[derive(Debug, Clone, PartialEq)]
pub struct CellRun {
    /// The repeated cell
    pub cell: Cell,
    /// Number of columns it covers (always > 0 once stored in a row)
    pub run: usize,
}

impl CellRun {
    /// Create a new run
    pub fn new(cell: Cell, run: usize) -> Self {
        Self { cell, run }
    }
}

/// A row of cells, run-length encoded
///
/// Cloning a row is cheap: the segments are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    segments: Arc<[CellRun]>,
    /// Logical number of columns after the column cap and trailing trim
    len: usize,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from raw segments
    ///
    /// Segments are taken in order, each clipped to the remaining column
    /// budget; segments past `max_columns` are dropped. Zero-length runs are
    /// discarded. With `trim_trailing_empty`, blank segments at the end of the
    /// row are removed (interior gaps are kept).
    pub fn from_segments<I>(raw: I, max_columns: usize, trim_trailing_empty: bool) -> Self
    where
        I: IntoIterator<Item = CellRun>,
    {
        let mut segments: Vec<CellRun> = Vec::new();
        let mut total = 0usize;

        for seg in raw {
            if total >= max_columns {
                break;
            }
            if seg.run == 0 {
                continue;
            }
            let take = seg.run.min(max_columns - total);
            total += take;
            segments.push(CellRun::new(seg.cell, take));
        }

        if trim_trailing_empty {
            while let Some(last) = segments.last() {
                if !last.cell.is_blank() {
                    break;
                }
                total -= last.run;
                segments.pop();
            }
        }

        Self {
            segments: segments.into(),
            len: total,
        }
    }

    /// Build a row with one cell per column
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self::from_segments(
            cells.into_iter().map(|cell| CellRun::new(cell, 1)),
            usize::MAX,
            false,
        )
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a cell by column index (0-based)
    ///
    /// Walks the segments, so the cost grows with the number of distinct
    /// runs rather than the column index.
    pub fn get(&self, col: usize) -> Option<&Cell> {
        if col >= self.len {
            return None;
        }
        let mut remaining = col;
        for seg in self.segments.iter() {
            if remaining < seg.run {
                return Some(&seg.cell);
            }
            remaining -= seg.run;
        }
        None
    }

    /// Get a cell by column index, or the empty cell when out of range
    pub fn cell(&self, col: usize) -> &Cell {
        self.get(col).unwrap_or(&EMPTY_CELL)
    }

    /// Iterate over every cell, expanding runs
    pub fn iter(&self) -> RowIter<'_> {
        RowIter {
            segments: &self.segments,
            segment: 0,
            offset: 0,
            remaining: self.len,
        }
    }

    /// The run-length segments backing this row
    pub fn segments(&self) -> &[CellRun] {
        &self.segments
    }

    /// Check whether every cell is blank (Empty or an empty string)
    pub fn is_effectively_empty(&self) -> bool {
        self.segments.iter().all(|seg| seg.cell.is_blank())
    }

    /// Check whether two rows share the same storage
    pub fn shares_storage_with(&self, other: &Row) -> bool {
        Arc::ptr_eq(&self.segments, &other.segments)
    }
}

impl Default for Row {
    fn default() -> Self {
        Self {
            segments: Arc::from(Vec::new()),
            len: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = RowIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a row's cells
#[derive(Debug, Clone)]
pub struct RowIter<'a> {
    segments: &'a [CellRun],
    segment: usize,
    offset: usize,
    remaining: usize,
}

impl<'a> Iterator for RowIter<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(seg) = self.segments.get(self.segment) {
            if self.offset < seg.run {
                self.offset += 1;
                self.remaining -= 1;
                return Some(&seg.cell);
            }
            self.segment += 1;
            self.offset = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowIter<'_> {}

impl FusedIterator for RowIter<'_> {}
