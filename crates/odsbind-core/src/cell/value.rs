//! Cell value types

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat};

use super::time::format_duration;

/// Represents the value stored in a cell
///
/// Each variant carries only the data that belongs to its value type. Typed
/// variants hold an `Option` because a document may declare a type but omit
/// (or garble) the value attribute; such cells keep their type with an
/// absent value instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value, or an unknown value type)
    #[default]
    Empty,

    /// Text, paragraphs joined with `\n`
    String(String),

    /// Floating point number (`office:value-type="float"`)
    Float(Option<f64>),

    /// Currency amount with its ISO 4217 code (e.g. "USD")
    Currency {
        /// Amount
        value: Option<f64>,
        /// Currency code
        currency: Option<String>,
    },

    /// Boolean value
    Boolean(Option<bool>),

    /// Date or date-time with its UTC offset
    Date(Option<DateTime<FixedOffset>>),

    /// Time span (`office:time-value`)
    Time(Option<Duration>),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Get the value's kind
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Empty => CellKind::Empty,
            CellValue::String(_) => CellKind::String,
            CellValue::Float(_) => CellKind::Float,
            CellValue::Currency { .. } => CellKind::Currency,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Date(_) => CellKind::Date,
            CellValue::Time(_) => CellKind::Time,
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Empty, or a string with no characters at all
    ///
    /// Whitespace is content here: a cell of spaces is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Check whether a typed value is present
    ///
    /// Empty cells and strings report `false`/`true` respectively; for the
    /// other kinds this is whether the native value could be read.
    pub fn has_native_value(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::String(_) => true,
            CellValue::Float(v) => v.is_some(),
            CellValue::Currency { value, .. } => value.is_some(),
            CellValue::Boolean(v) => v.is_some(),
            CellValue::Date(v) => v.is_some(),
            CellValue::Time(v) => v.is_some(),
        }
    }

    /// Try to get the value as a number (float and currency cells)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => *n,
            CellValue::Currency { value, .. } => *value,
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => *b,
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date-time
    pub fn as_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            CellValue::Date(d) => *d,
            _ => None,
        }
    }

    /// Try to get the value as a time span
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            CellValue::Time(t) => *t,
            _ => None,
        }
    }

    /// Get the currency code of a currency cell
    pub fn currency(&self) -> Option<&str> {
        match self {
            CellValue::Currency { currency, .. } => currency.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => f.write_str(s),
            CellValue::Float(Some(n)) | CellValue::Currency { value: Some(n), .. } => {
                write!(f, "{}", n)
            }
            CellValue::Boolean(Some(b)) => write!(f, "{}", b),
            CellValue::Date(Some(d)) => {
                f.write_str(&d.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
            CellValue::Time(Some(t)) => f.write_str(&format_duration(*t)),
            CellValue::Float(None)
            | CellValue::Currency { value: None, .. }
            | CellValue::Boolean(None)
            | CellValue::Date(None)
            | CellValue::Time(None) => Ok(()),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(Some(b))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(Some(n))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<DateTime<FixedOffset>> for CellValue {
    fn from(d: DateTime<FixedOffset>) -> Self {
        CellValue::Date(Some(d))
    }
}

impl From<Duration> for CellValue {
    fn from(t: Duration) -> Self {
        CellValue::Time(Some(t))
    }
}

/// The value type of a cell, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Empty or unknown
    Empty,
    /// Text
    String,
    /// Floating point number
    Float,
    /// Currency amount
    Currency,
    /// Date or date-time
    Date,
    /// Time span
    Time,
    /// Boolean
    Boolean,
}

impl CellKind {
    /// Get the type name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::String => "string",
            CellKind::Float => "float",
            CellKind::Currency => "currency",
            CellKind::Date => "date",
            CellKind::Time => "time",
            CellKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell: its value plus the formula that produced it, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Formula text exactly as stored (e.g. `of:=SUM([.A1:.A3])`)
    pub formula: Option<String>,
}

impl Cell {
    /// Create a new cell without a formula
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            formula: None,
        }
    }

    /// Create a new cell with a formula
    pub fn with_formula(value: CellValue, formula: Option<String>) -> Self {
        Self { value, formula }
    }

    /// Create an empty cell
    pub const fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            formula: None,
        }
    }

    /// Get the value's kind
    pub fn kind(&self) -> CellKind {
        self.value.kind()
    }

    /// Check if this cell is effectively empty (Empty, or an empty string)
    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }

    /// Get the formula text if this is a formula cell
    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Cell::new(value)
    }
}
