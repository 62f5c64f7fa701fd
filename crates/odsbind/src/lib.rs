//! # odsbind
//!
//! Read ODS (OpenDocument Spreadsheet) files and bind sheet rows onto typed
//! records.
//!
//! ## Features
//!
//! - Streaming `content.xml` parser with limits on sheets, rows, columns and repeats
//! - Run-length encoded rows, so repeated cells and rows cost one copy
//! - Typed cell values (string, float, currency, boolean, date, time) plus formula text
//! - Header-checked row binding with every conversion failure reported at once
//!
//! ## Example
//!
//! ```rust,no_run
//! use odsbind::prelude::*;
//!
//! # fn main() -> odsbind::Result<()> {
//! let doc = Document::open("inventory.ods")?;
//! let sheet = doc.sheet_named("Items")?;
//!
//! let fields = [
//!     FieldSpec::new("sku", FieldKind::String).display_name("SKU"),
//!     FieldSpec::new("qty", FieldKind::I32).display_name("Quantity"),
//! ];
//! let rows = sheet.bind_with(&fields, &BindOptions::default(), |row| {
//!     Ok((row.get::<String>("sku")?, row.get::<i32>("qty")?))
//! })?;
//! println!("{} items", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod error;
pub mod prelude;

use std::io::{Read, Seek};
use std::path::Path;

// Re-export core types
pub use odsbind_core::{
    cell, collapse_whitespace, one_line, Cell, CellKind, CellRun, CellValue, Document,
    Error as CoreError, Row, RowIter, Sheet, TextHandling, MAX_COLS,
};

// Re-export reader types
pub use odsbind_ods::{LimitMode, OdsError, OdsReader, ReaderOptions};

// Re-export binder types
pub use binder::{
    AggregateConversionError, BindError, BindOptions, BindResult, FieldError, FieldKind,
    FieldSpec, FieldValue, FromFieldValue, FromRow, RowConversionError, RowValues,
};

pub use error::{Error, Result};

/// Extension trait for Document to add file I/O
pub trait DocumentExt: Sized {
    /// Open a document from a file with default reader options
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Open a document from a file
    fn open_with_options<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> Result<Self>;

    /// Read a document from a seekable reader
    fn from_reader<R: Read + Seek>(reader: R, options: &ReaderOptions) -> Result<Self>;
}

impl DocumentExt for Document {
    fn open<P: AsRef<Path>>(path: P) -> Result<Document> {
        Self::open_with_options(path, &ReaderOptions::default())
    }

    fn open_with_options<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> Result<Document> {
        Ok(OdsReader::read_file(path, options)?)
    }

    fn from_reader<R: Read + Seek>(reader: R, options: &ReaderOptions) -> Result<Document> {
        Ok(OdsReader::read(reader, options)?)
    }
}

/// Extension trait for Sheet to bind rows onto records
pub trait SheetBindExt {
    /// Bind every data row onto `T`
    fn bind<T: FromRow>(&self, options: &BindOptions) -> BindResult<Vec<T>>;

    /// Bind every data row with an explicit field list and builder
    fn bind_with<T, F>(
        &self,
        fields: &[FieldSpec],
        options: &BindOptions,
        build: F,
    ) -> BindResult<Vec<T>>
    where
        F: FnMut(&RowValues<'_>) -> std::result::Result<T, FieldError>;
}

impl SheetBindExt for Sheet {
    fn bind<T: FromRow>(&self, options: &BindOptions) -> BindResult<Vec<T>> {
        binder::bind(self, options)
    }

    fn bind_with<T, F>(
        &self,
        fields: &[FieldSpec],
        options: &BindOptions,
        build: F,
    ) -> BindResult<Vec<T>>
    where
        F: FnMut(&RowValues<'_>) -> std::result::Result<T, FieldError>,
    {
        binder::bind_with(self, fields, options, build)
    }
}
