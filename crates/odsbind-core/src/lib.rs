//! # odsbind-core
//!
//! Core data structures for the odsbind spreadsheet reader.
//!
//! This crate provides the immutable result types produced by a parse:
//! - [`Cell`] and [`CellValue`] - A cell's typed value and formula text
//! - [`Row`] - A run-length encoded row of cells
//! - [`Sheet`], [`Document`] - The document structure
//!
//! ## Example
//!
//! ```rust
//! use odsbind_core::{Cell, CellRun, CellValue, Document, Row, Sheet, MAX_COLS};
//!
//! let row = Row::from_segments(
//!     [CellRun::new(Cell::new(CellValue::Float(Some(1.0))), 3)],
//!     MAX_COLS,
//!     true,
//! );
//! assert_eq!(row.len(), 3);
//!
//! let doc = Document::new(vec![Sheet::new("Sheet1", vec![row], MAX_COLS)]);
//! assert_eq!(doc.sheet_by_name("Sheet1").unwrap().row_count(), 1);
//! ```

pub mod cell;
pub mod document;
pub mod error;
pub mod row;
pub mod sheet;
pub mod text;

// Re-exports for convenience
pub use cell::{Cell, CellKind, CellValue};
pub use document::Document;
pub use error::{Error, Result};
pub use row::{CellRun, Row, RowIter};
pub use sheet::Sheet;
pub use text::{collapse_whitespace, one_line, TextHandling};

/// Maximum number of columns in a sheet (LibreOffice Calc limit)
pub const MAX_COLS: usize = 16_384;
