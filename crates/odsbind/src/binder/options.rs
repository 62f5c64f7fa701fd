//! Bind options

use std::fmt;

use odsbind_core::{collapse_whitespace, Cell};

/// Turns a header cell's text into the name it is matched by
pub type HeaderNormalizerFn = dyn Fn(&str) -> String + Send + Sync;

/// Renders a cell as the text used for headers, string fields and parsing
pub type CellStringFn = dyn Fn(&Cell) -> String + Send + Sync;

/// Options for binding sheet rows onto records
pub struct BindOptions {
    /// Index of the header row (default: 0)
    pub header_row: usize,
    /// First data row (default: 1); never earlier than the row after the header
    pub data_start_row: usize,
    /// Match headers ignoring case (default: true)
    pub case_insensitive: bool,
    /// Header normaliser (default: trim)
    pub header_normalizer: Box<HeaderNormalizerFn>,
    /// Cell stringifier (default: whitespace runs collapsed to one space, trimmed)
    pub cell_string: Box<CellStringFn>,
    /// Stop at the first row whose mapped cells are all empty (default: true);
    /// otherwise such rows are skipped
    pub stop_at_first_empty_row: bool,
    /// Require matched headers to appear in field order (default: true)
    pub enforce_header_order: bool,
}

impl BindOptions {
    /// Replace the header normaliser
    pub fn with_header_normalizer<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header_normalizer = Box::new(f);
        self
    }

    /// Replace the cell stringifier
    pub fn with_cell_string<F>(mut self, f: F) -> Self
    where
        F: Fn(&Cell) -> String + Send + Sync + 'static,
    {
        self.cell_string = Box::new(f);
        self
    }

    /// First row that is scanned for data
    pub fn effective_data_start(&self) -> usize {
        self.data_start_row.max(self.header_row.saturating_add(1))
    }
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            header_row: 0,
            data_start_row: 1,
            case_insensitive: true,
            header_normalizer: Box::new(|s: &str| s.trim().to_string()),
            cell_string: Box::new(|cell: &Cell| collapse_whitespace(&cell.to_string())),
            stop_at_first_empty_row: true,
            enforce_header_order: true,
        }
    }
}

impl fmt::Debug for BindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindOptions")
            .field("header_row", &self.header_row)
            .field("data_start_row", &self.data_start_row)
            .field("case_insensitive", &self.case_insensitive)
            .field("stop_at_first_empty_row", &self.stop_at_first_empty_row)
            .field("enforce_header_order", &self.enforce_header_order)
            .finish_non_exhaustive()
    }
}
