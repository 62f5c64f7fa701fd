//! Typed row binder
//!
//! Maps a sheet's header row onto a declared list of fields and converts
//! every data row into a record. Header problems abort the bind immediately;
//! cell conversion problems are collected over the whole data range and
//! reported together in one [`AggregateConversionError`].
//!
//! ```rust
//! use odsbind::binder::{bind, BindOptions, FieldError, FieldKind, FieldSpec, FromRow, RowValues};
//! use odsbind::{Cell, CellValue, Row, Sheet};
//!
//! struct Item {
//!     name: String,
//!     qty: i32,
//! }
//!
//! impl FromRow for Item {
//!     fn fields() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::new("name", FieldKind::String).display_name("Name"),
//!             FieldSpec::new("qty", FieldKind::I32).display_name("Qty"),
//!         ]
//!     }
//!
//!     fn from_row(row: &RowValues<'_>) -> Result<Self, FieldError> {
//!         Ok(Item {
//!             name: row.get("name")?,
//!             qty: row.get("qty")?,
//!         })
//!     }
//! }
//!
//! let text = |s: &str| Cell::new(CellValue::string(s));
//! let sheet = Sheet::new(
//!     "Items",
//!     vec![
//!         Row::from_cells([text("Name"), text("Qty")]),
//!         Row::from_cells([text("bolt"), Cell::new(CellValue::Float(Some(12.0)))]),
//!     ],
//!     16_384,
//! );
//!
//! let items: Vec<Item> = bind(&sheet, &BindOptions::default()).unwrap();
//! assert_eq!(items[0].name, "bolt");
//! assert_eq!(items[0].qty, 12);
//! ```

mod convert;
mod error;
mod field;
mod options;
mod value;

use std::collections::HashMap;

use log::debug;
use odsbind_core::{Cell, Row, Sheet};

pub use error::{
    AggregateConversionError, BindError, BindResult, ConversionFailure, RowConversionError,
};
pub use field::{FieldKind, FieldSpec};
pub use options::{BindOptions, CellStringFn, HeaderNormalizerFn};
pub use value::{FieldError, FieldValue, FromFieldValue, RowValues};

use convert::{convert_cell, is_cell_empty};
use field::ordered_fields;

/// A record that can be built from one sheet row
pub trait FromRow: Sized {
    /// The fields to bind, in declaration order
    fn fields() -> Vec<FieldSpec>;

    /// Build the record from the row's converted values
    fn from_row(row: &RowValues<'_>) -> Result<Self, FieldError>;
}

/// Bind every data row of `sheet` onto `T`
pub fn bind<T: FromRow>(sheet: &Sheet, options: &BindOptions) -> BindResult<Vec<T>> {
    let fields = T::fields();
    bind_with(sheet, &fields, options, T::from_row)
}

/// Bind every data row of `sheet` with an explicit field list and builder
pub fn bind_with<T, F>(
    sheet: &Sheet,
    fields: &[FieldSpec],
    options: &BindOptions,
    mut build: F,
) -> BindResult<Vec<T>>
where
    F: FnMut(&RowValues<'_>) -> Result<T, FieldError>,
{
    let header_row = sheet
        .row(options.header_row)
        .ok_or(BindError::HeaderRowOutOfRange {
            row: options.header_row,
            row_count: sheet.row_count(),
        })?;

    let header = Header::extract(header_row, options);
    let fields = ordered_fields(fields);
    let expected: Vec<String> = fields
        .iter()
        .map(|f| (options.header_normalizer)(f.header_name()))
        .collect();

    let columns = header.resolve(&expected, options)?;
    header.check_count(&expected)?;
    if options.enforce_header_order {
        check_header_order(&expected, &header.actual, options)?;
    }

    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (r, row) in sheet
        .rows()
        .iter()
        .enumerate()
        .skip(options.effective_data_start())
    {
        let cells: Vec<&Cell> = columns.iter().map(|&c| row.cell(c)).collect();
        if cells
            .iter()
            .all(|cell| is_cell_empty(cell, &*options.cell_string))
        {
            if options.stop_at_first_empty_row {
                break;
            }
            continue;
        }

        let mut values = Vec::with_capacity(fields.len());
        let errors_before = errors.len();
        for ((spec, &column), cell) in fields.iter().zip(&columns).zip(&cells) {
            match convert_cell(cell, spec.kind(), &*options.cell_string) {
                Ok(value) => values.push(value),
                Err(source) => {
                    errors.push(RowConversionError {
                        row: r,
                        column: Some(column),
                        field: spec.name().to_string(),
                        header: Some(header_row.cell(column).to_string()),
                        target: spec.kind(),
                        cell_kind: cell.kind(),
                        preview: cell.to_string(),
                        source,
                    });
                    values.push(FieldValue::Null);
                }
            }
        }
        if errors.len() > errors_before {
            continue;
        }

        let row_values = RowValues::new(r, &fields, values);
        match build(&row_values) {
            Ok(record) => records.push(record),
            Err(e) => {
                let position = fields.iter().position(|f| f.name() == e.field());
                let column = position.map(|i| columns[i]);
                let cell = match column {
                    Some(c) => row.cell(c).clone(),
                    None => Cell::empty(),
                };
                errors.push(RowConversionError {
                    row: r,
                    column,
                    field: e.field().to_string(),
                    header: column.map(|c| header_row.cell(c).to_string()),
                    target: position.map_or(FieldKind::Other, |i| fields[i].kind()),
                    cell_kind: cell.kind(),
                    preview: cell.to_string(),
                    source: ConversionFailure::Record(e),
                });
            }
        }
    }

    debug!(
        "bound {} records from sheet '{}' ({} conversion errors)",
        records.len(),
        sheet.name(),
        errors.len()
    );

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(AggregateConversionError::new(errors).into())
    }
}

/// The normalised header row
struct Header {
    /// Normalised text of every header cell, blanks included
    actual: Vec<String>,
    /// Match key to first column carrying it
    columns: HashMap<String, usize>,
}

impl Header {
    fn extract(row: &Row, options: &BindOptions) -> Self {
        let mut actual = Vec::with_capacity(row.len());
        let mut columns = HashMap::new();

        for (c, cell) in row.iter().enumerate() {
            let raw = (options.cell_string)(cell);
            let normalized = (options.header_normalizer)(&raw);
            if !normalized.is_empty() {
                columns.entry(fold(&normalized, options)).or_insert(c);
            }
            actual.push(normalized);
        }

        Self { actual, columns }
    }

    /// Column index of every expected header, failing on the first absent ones
    fn resolve(&self, expected: &[String], options: &BindOptions) -> BindResult<Vec<usize>> {
        let mut columns = Vec::with_capacity(expected.len());
        let mut missing = Vec::new();

        for name in expected {
            match self.columns.get(&fold(name, options)) {
                Some(&c) => columns.push(c),
                None => missing.push(name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(BindError::HeaderMissing {
                expected: expected.to_vec(),
                missing,
                actual: self.actual.clone(),
            });
        }
        Ok(columns)
    }

    fn check_count(&self, expected: &[String]) -> BindResult<()> {
        let non_empty: Vec<String> = self
            .actual
            .iter()
            .filter(|h| !h.is_empty())
            .cloned()
            .collect();

        if non_empty.len() != expected.len() {
            return Err(BindError::HeaderCountMismatch {
                expected_count: expected.len(),
                actual_count: non_empty.len(),
                expected: expected.to_vec(),
                actual: non_empty,
            });
        }
        Ok(())
    }
}

/// Check that the expected headers appear in `actual` in the same relative order
///
/// Columns that are not expected may sit anywhere in between.
pub(crate) fn check_header_order(
    expected: &[String],
    actual: &[String],
    options: &BindOptions,
) -> BindResult<()> {
    let expected_keys: Vec<String> = expected.iter().map(|h| fold(h, options)).collect();
    let actual_subsequence: Vec<String> = actual
        .iter()
        .filter(|h| expected_keys.contains(&fold(h, options)))
        .cloned()
        .collect();

    let in_order = actual_subsequence.len() == expected_keys.len()
        && actual_subsequence
            .iter()
            .zip(&expected_keys)
            .all(|(a, e)| fold(a, options) == *e);

    if !in_order {
        return Err(BindError::HeaderOrderMismatch {
            expected: expected.to_vec(),
            actual_subsequence,
            actual: actual.to_vec(),
        });
    }
    Ok(())
}

fn fold(name: &str, options: &BindOptions) -> String {
    if options.case_insensitive {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}
