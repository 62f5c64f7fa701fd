//! Cell to field conversion

use odsbind_core::cell::{parse_clock_duration, parse_date_time, parse_iso_duration};
use odsbind_core::{Cell, CellValue};
use rust_decimal::Decimal;

use super::error::ConversionFailure;
use super::field::FieldKind;
use super::options::CellStringFn;
use super::value::FieldValue;

/// 2^63, the first `f64` past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Type-aware emptiness
///
/// Strings are empty when their normalised text is blank; typed cells are
/// empty when their native value is absent (zero and `false` are values).
pub(crate) fn is_cell_empty(cell: &Cell, cell_string: &CellStringFn) -> bool {
    match &cell.value {
        CellValue::Empty => true,
        CellValue::String(_) => cell_string(cell).trim().is_empty(),
        other => !other.has_native_value(),
    }
}

/// Convert one cell to `kind`; empty cells become [`FieldValue::Null`]
pub(crate) fn convert_cell(
    cell: &Cell,
    kind: FieldKind,
    cell_string: &CellStringFn,
) -> Result<FieldValue, ConversionFailure> {
    if is_cell_empty(cell, cell_string) {
        return Ok(FieldValue::Null);
    }

    let target = kind.name();
    let value = match kind {
        FieldKind::String => FieldValue::String(cell_string(cell)),
        FieldKind::I16 => {
            let n = to_i64(number(cell, cell_string, target)?, target)?;
            FieldValue::I16(i16::try_from(n).map_err(|_| overflow(n, target))?)
        }
        FieldKind::I32 => {
            let n = to_i64(number(cell, cell_string, target)?, target)?;
            FieldValue::I32(i32::try_from(n).map_err(|_| overflow(n, target))?)
        }
        FieldKind::I64 => FieldValue::I64(to_i64(number(cell, cell_string, target)?, target)?),
        FieldKind::F32 => {
            let n = number(cell, cell_string, target)?;
            let narrowed = n as f32;
            if n.is_finite() && !narrowed.is_finite() {
                return Err(overflow(n, target));
            }
            FieldValue::F32(narrowed)
        }
        FieldKind::F64 => FieldValue::F64(number(cell, cell_string, target)?),
        FieldKind::Decimal => {
            let n = number(cell, cell_string, target)?;
            FieldValue::Decimal(Decimal::try_from(n).map_err(|_| overflow(n, target))?)
        }
        FieldKind::Bool => FieldValue::Bool(boolean(cell, cell_string)?),
        FieldKind::DateTime => FieldValue::DateTime(match cell.value.as_date_time() {
            Some(dt) => dt,
            None => {
                let text = cell_string(cell);
                parse_date_time(&text).ok_or_else(|| format_error(text, target))?
            }
        }),
        FieldKind::NaiveDateTime => FieldValue::NaiveDateTime(naive_date_time(cell, cell_string, target)?),
        FieldKind::Date => FieldValue::Date(naive_date_time(cell, cell_string, target)?.date()),
        FieldKind::Duration => FieldValue::Duration(match cell.value.as_duration() {
            Some(d) => d,
            None => {
                let text = cell_string(cell);
                parse_clock_duration(&text)
                    .or_else(|| parse_iso_duration(&text))
                    .ok_or_else(|| format_error(text, target))?
            }
        }),
        FieldKind::Enum(variants) => {
            let text = cell_string(cell);
            let named = variants
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(text.trim()))
                .map(|&(_, value)| value);
            match named.or_else(|| text.trim().parse::<i64>().ok()) {
                Some(value) => FieldValue::Enum(value),
                None => return Err(format_error(text, target)),
            }
        }
        FieldKind::Other => FieldValue::Other(cell.to_string()),
    };
    Ok(value)
}

/// Native number, or the cell text parsed as an invariant real
fn number(cell: &Cell, cell_string: &CellStringFn, target: &'static str) -> Result<f64, ConversionFailure> {
    if let Some(n) = cell.value.as_number() {
        return Ok(n);
    }
    let text = cell_string(cell);
    text.trim()
        .parse::<f64>()
        .map_err(|_| format_error(text, target))
}

/// Round half to even, then range-check
fn to_i64(n: f64, target: &'static str) -> Result<i64, ConversionFailure> {
    let rounded = n.round_ties_even();
    if !rounded.is_finite() || !(-I64_BOUND..I64_BOUND).contains(&rounded) {
        return Err(overflow(n, target));
    }
    Ok(rounded as i64)
}

fn boolean(cell: &Cell, cell_string: &CellStringFn) -> Result<bool, ConversionFailure> {
    if let Some(b) = cell.value.as_bool() {
        return Ok(b);
    }
    let text = cell_string(cell);
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        trimmed
            .parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| format_error(text, FieldKind::Bool.name()))
    }
}

/// Wall-clock fields as written, without converting between zones
fn naive_date_time(
    cell: &Cell,
    cell_string: &CellStringFn,
    target: &'static str,
) -> Result<chrono::NaiveDateTime, ConversionFailure> {
    if let Some(dt) = cell.value.as_date_time() {
        return Ok(dt.naive_local());
    }
    let text = cell_string(cell);
    parse_date_time(&text)
        .map(|dt| dt.naive_local())
        .ok_or_else(|| format_error(text, target))
}

fn format_error(text: String, target: &'static str) -> ConversionFailure {
    ConversionFailure::Format { text, target }
}

fn overflow<V: ToString>(value: V, target: &'static str) -> ConversionFailure {
    ConversionFailure::Overflow {
        value: value.to_string(),
        target,
    }
}
