//! Field descriptors

use std::fmt;

/// Target kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Normalised cell text
    String,
    /// 16-bit integer
    I16,
    /// 32-bit integer
    I32,
    /// 64-bit integer
    I64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Decimal number ([`rust_decimal::Decimal`])
    Decimal,
    /// Boolean
    Bool,
    /// Date-time with offset
    DateTime,
    /// Date-time without zone; keeps the wall-clock fields as written
    NaiveDateTime,
    /// Calendar date
    Date,
    /// Time span
    Duration,
    /// Enumeration given as `(name, value)` pairs
    ///
    /// Text matching a name (case-insensitively) yields its value; any
    /// integer text is accepted as-is.
    Enum(&'static [(&'static str, i64)]),
    /// Anything else: receives the cell's display text
    Other,
}

impl FieldKind {
    /// Get the kind name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::I16 => "i16",
            FieldKind::I32 => "i32",
            FieldKind::I64 => "i64",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Decimal => "decimal",
            FieldKind::Bool => "bool",
            FieldKind::DateTime => "date-time",
            FieldKind::NaiveDateTime => "naive date-time",
            FieldKind::Date => "date",
            FieldKind::Duration => "duration",
            FieldKind::Enum(_) => "enum",
            FieldKind::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes one record field and the header column it binds to
///
/// ```rust
/// use odsbind::binder::{FieldKind, FieldSpec};
///
/// let spec = FieldSpec::new("unit_price", FieldKind::Decimal)
///     .display_name("Unit Price")
///     .order(2);
/// assert_eq!(spec.header_name(), "Unit Price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    display_name: Option<String>,
    order: Option<i32>,
    kind: FieldKind,
}

impl FieldSpec {
    /// Create a field bound to the header equal to `name`
    pub fn new<S: Into<String>>(name: S, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            order: None,
            kind,
        }
    }

    /// Bind to a header other than the field name
    pub fn display_name<S: Into<String>>(mut self, display_name: S) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set an explicit position; fields without one come after all that have one
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Logical field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header text this field binds to
    pub fn header_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Explicit position, if any
    pub fn explicit_order(&self) -> Option<i32> {
        self.order
    }

    /// Target kind
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// Sort fields into the order their columns are expected in
///
/// Explicit order first (absent last), then declaration position, then name.
pub(crate) fn ordered_fields(fields: &[FieldSpec]) -> Vec<FieldSpec> {
    let mut indexed: Vec<(usize, &FieldSpec)> = fields.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| {
        a.order
            .unwrap_or(i32::MAX)
            .cmp(&b.order.unwrap_or(i32::MAX))
            .then(ia.cmp(ib))
            .then_with(|| a.name.cmp(&b.name))
    });
    indexed.into_iter().map(|(_, spec)| spec.clone()).collect()
}
