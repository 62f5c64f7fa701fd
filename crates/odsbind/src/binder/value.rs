//! Converted field values and typed access to them

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

use super::field::FieldSpec;

/// A cell converted to its field's target kind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The cell was empty
    Null,
    String(String),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Bool(bool),
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
    Date(NaiveDate),
    Duration(Duration),
    /// Underlying value of an enumeration
    Enum(i64),
    /// Display text for [`FieldKind::Other`](super::FieldKind::Other) targets
    Other(String),
}

impl FieldValue {
    /// Get the variant name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::String(_) => "string",
            FieldValue::I16(_) => "i16",
            FieldValue::I32(_) => "i32",
            FieldValue::I64(_) => "i64",
            FieldValue::F32(_) => "f32",
            FieldValue::F64(_) => "f64",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Bool(_) => "bool",
            FieldValue::DateTime(_) => "date-time",
            FieldValue::NaiveDateTime(_) => "naive date-time",
            FieldValue::Date(_) => "date",
            FieldValue::Duration(_) => "duration",
            FieldValue::Enum(_) => "enum",
            FieldValue::Other(_) => "other",
        }
    }

    /// Check if the value is [`FieldValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Error raised while building a record from converted values
#[derive(Debug, Error)]
pub enum FieldError {
    /// No field with this name was declared
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The value cannot be read as the requested Rust type
    #[error("field '{field}' holds a {found} value, cannot read it as {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Text could not be parsed into the requested type
    #[error("field '{field}': {message}")]
    Parse { field: String, message: String },

    /// An enumeration value has no matching variant
    #[error("field '{field}': {value} is not a valid variant")]
    InvalidEnum { field: String, value: i64 },

    /// Record-specific validation failure
    #[error("field '{field}': {message}")]
    Custom { field: String, message: String },
}

impl FieldError {
    /// Create a custom error for `field`
    pub fn custom<F: Into<String>, M: fmt::Display>(field: F, message: M) -> Self {
        FieldError::Custom {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Name of the field the error is about
    pub fn field(&self) -> &str {
        match self {
            FieldError::UnknownField(field)
            | FieldError::TypeMismatch { field, .. }
            | FieldError::Parse { field, .. }
            | FieldError::InvalidEnum { field, .. }
            | FieldError::Custom { field, .. } => field,
        }
    }
}

/// Types that can be read out of a [`FieldValue`]
///
/// Plain types read [`FieldValue::Null`] as their default value; `Option<T>`
/// reads it as `None`.
pub trait FromFieldValue: Sized {
    /// Returns `None` when the value has a different shape
    fn from_field_value(value: &FieldValue) -> Option<Self>;
}

macro_rules! impl_from_field_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromFieldValue for $ty {
                fn from_field_value(value: &FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::$variant(v) => Some(v.clone()),
                        FieldValue::Null => Some(<$ty>::default()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_field_value! {
    i16 => I16,
    i32 => I32,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    bool => Bool,
    DateTime<FixedOffset> => DateTime,
    NaiveDateTime => NaiveDateTime,
    NaiveDate => Date,
    Duration => Duration,
}

impl FromFieldValue for i64 {
    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::I64(v) | FieldValue::Enum(v) => Some(*v),
            FieldValue::Null => Some(0),
            _ => None,
        }
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(s) | FieldValue::Other(s) => Some(s.clone()),
            FieldValue::Null => Some(String::new()),
            _ => None,
        }
    }
}

impl<T: FromFieldValue> FromFieldValue for Option<T> {
    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            other => T::from_field_value(other).map(Some),
        }
    }
}

/// The converted values of one data row, keyed by field name
#[derive(Debug, Clone)]
pub struct RowValues<'a> {
    row: usize,
    fields: &'a [FieldSpec],
    values: Vec<FieldValue>,
}

impl<'a> RowValues<'a> {
    /// `values` must line up with `fields`
    pub(crate) fn new(row: usize, fields: &'a [FieldSpec], values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(fields.len(), values.len());
        Self {
            row,
            fields,
            values,
        }
    }

    /// Index of the sheet row these values came from (0-based)
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Get the raw converted value of a field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .and_then(|i| self.values.get(i))
    }

    /// Read a field as `T`
    pub fn get<T: FromFieldValue>(&self, name: &str) -> Result<T, FieldError> {
        let value = self.require(name)?;
        T::from_field_value(value).ok_or_else(|| FieldError::TypeMismatch {
            field: name.to_string(),
            expected: std::any::type_name::<T>(),
            found: value.kind_name(),
        })
    }

    /// Parse the text of a `String`/`Other` field with [`FromStr`]
    ///
    /// An empty cell parses as the empty string.
    pub fn parse<T>(&self, name: &str) -> Result<T, FieldError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.require(name)?;
        let text = match value {
            FieldValue::String(s) | FieldValue::Other(s) => s.as_str(),
            FieldValue::Null => "",
            other => {
                return Err(FieldError::TypeMismatch {
                    field: name.to_string(),
                    expected: "text",
                    found: other.kind_name(),
                })
            }
        };
        text.parse().map_err(|e: T::Err| FieldError::Parse {
            field: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Read an enumeration field and map its value onto `T`
    pub fn get_enum<T: TryFrom<i64>>(&self, name: &str) -> Result<T, FieldError> {
        let value: i64 = self.get(name)?;
        T::try_from(value).map_err(|_| FieldError::InvalidEnum {
            field: name.to_string(),
            value,
        })
    }

    fn require(&self, name: &str) -> Result<&FieldValue, FieldError> {
        self.value(name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }
}
