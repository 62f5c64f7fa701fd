//! Reader options and resource limits

use odsbind_core::MAX_COLS;

/// What to do when a row limit is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimitMode {
    /// Fail with [`OdsError::LimitExceeded`](crate::OdsError::LimitExceeded)
    Throw,
    /// Stop collecting rows and keep what was read so far
    #[default]
    Truncate,
}

/// Options for reading ODS documents
///
/// The limits guard against hostile or pathological input, such as a
/// single row declared as repeated a billion times.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReaderOptions {
    /// Fail with [`OdsError::Unsupported`](crate::OdsError::Unsupported) when the
    /// manifest declares encryption (default: true)
    pub throw_on_encrypted: bool,
    /// Maximum number of sheets (default: 256)
    pub max_sheets: usize,
    /// Maximum number of rows per sheet (default: 1,000,000)
    pub max_rows_per_sheet: usize,
    /// Maximum number of columns per row (default: 16,384)
    pub max_columns_per_row: usize,
    /// Cap on `table:number-rows-repeated` (default: 1,000,000)
    pub max_repeated_rows: usize,
    /// Cap on `table:number-columns-repeated` (default: 16,384)
    pub max_repeated_columns: usize,
    /// Cap on the `text:c` space count of `text:s` (default: 100)
    pub max_text_space_run: usize,
    /// Behavior when `max_rows_per_sheet` is reached (default: truncate)
    pub limit_mode: LimitMode,
    /// Skip rows that hold nothing but empty cells or empty strings (default: true)
    pub collapse_empty_repeated_rows: bool,
    /// Drop empty cells and empty strings at the end of each row (default: true)
    pub trim_trailing_empty_cells: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            throw_on_encrypted: true,
            max_sheets: 256,
            max_rows_per_sheet: 1_000_000,
            max_columns_per_row: MAX_COLS,
            max_repeated_rows: 1_000_000,
            max_repeated_columns: MAX_COLS,
            max_text_space_run: 100,
            limit_mode: LimitMode::Truncate,
            collapse_empty_repeated_rows: true,
            trim_trailing_empty_cells: true,
        }
    }
}
