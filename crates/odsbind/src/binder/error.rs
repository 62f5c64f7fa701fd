//! Binder error types

use odsbind_core::CellKind;
use thiserror::Error;

use super::field::FieldKind;
use super::value::FieldError;

/// Result type for bind operations
pub type BindResult<T> = std::result::Result<T, BindError>;

/// Number of row errors listed in an aggregate error's message
const SUMMARY_LIMIT: usize = 5;

/// Errors that abort a bind call
#[derive(Debug, Error)]
pub enum BindError {
    /// The configured header row does not exist
    #[error("header row {row} is out of range (sheet has {row_count} rows)")]
    HeaderRowOutOfRange { row: usize, row_count: usize },

    /// Expected headers are absent from the header row
    #[error("missing headers: {}", .missing.join(", "))]
    HeaderMissing {
        expected: Vec<String>,
        missing: Vec<String>,
        actual: Vec<String>,
    },

    /// The header row has a different number of non-empty cells than there are fields
    #[error("expected {expected_count} headers, found {actual_count}")]
    HeaderCountMismatch {
        expected_count: usize,
        actual_count: usize,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Expected headers appear in a different relative order
    #[error(
        "header order mismatch: expected [{}], found [{}]",
        .expected.join(", "),
        .actual_subsequence.join(", ")
    )]
    HeaderOrderMismatch {
        expected: Vec<String>,
        actual_subsequence: Vec<String>,
        actual: Vec<String>,
    },

    /// One or more cells could not be converted
    #[error(transparent)]
    Conversion(#[from] AggregateConversionError),
}

/// Why a single cell could not be converted
#[derive(Debug, Error)]
pub enum ConversionFailure {
    /// Text that does not parse as the target kind
    #[error("cannot parse {text:?} as {target}")]
    Format { text: String, target: &'static str },

    /// A value outside the target's range
    #[error("{value} is out of range for {target}")]
    Overflow { value: String, target: &'static str },

    /// The record rejected the converted values
    #[error(transparent)]
    Record(#[from] FieldError),
}

/// A conversion failure located in the sheet
#[derive(Debug, Error)]
#[error(
    "row {} [column: {}, field: {field}] expected {target}, got {cell_kind} value {preview:?}: {source}",
    .row + 1,
    .header.as_deref().unwrap_or("(unmapped)")
)]
pub struct RowConversionError {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based), when the failure maps to a column
    pub column: Option<usize>,
    /// Field name
    pub field: String,
    /// Header text of the mapped column
    pub header: Option<String>,
    /// Target kind of the field
    pub target: FieldKind,
    /// Kind of the source cell
    pub cell_kind: CellKind,
    /// Display text of the source cell
    pub preview: String,
    /// Underlying failure
    #[source]
    pub source: ConversionFailure,
}

/// Every conversion failure of a bind call
#[derive(Debug, Error)]
#[error("{}", summarize(.errors))]
pub struct AggregateConversionError {
    errors: Vec<RowConversionError>,
}

impl AggregateConversionError {
    pub(crate) fn new(errors: Vec<RowConversionError>) -> Self {
        Self { errors }
    }

    /// All captured errors, in row order
    pub fn errors(&self) -> &[RowConversionError] {
        &self.errors
    }

    /// Number of captured errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for an error returned by a bind call
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Take the captured errors
    pub fn into_errors(self) -> Vec<RowConversionError> {
        self.errors
    }
}

fn summarize(errors: &[RowConversionError]) -> String {
    let mut out = format!(
        "{} conversion error(s) (showing first {}):",
        errors.len(),
        SUMMARY_LIMIT.min(errors.len())
    );
    for e in errors.iter().take(SUMMARY_LIMIT) {
        out.push_str("\n - ");
        out.push_str(&e.to_string());
    }
    out
}
