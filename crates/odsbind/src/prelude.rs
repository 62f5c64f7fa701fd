//! Prelude module - common imports for odsbind users
//!
//! ```rust
//! use odsbind::prelude::*;
//! ```

pub use crate::{
    // Binding
    BindError,
    BindOptions,
    // Cell types
    Cell,
    CellKind,
    CellValue,
    // Main types
    Document,
    // Extension traits
    DocumentExt,
    // Error types
    Error,
    FieldError,
    FieldKind,
    FieldSpec,
    FromRow,
    LimitMode,
    // I/O types
    OdsReader,
    ReaderOptions,
    Result,
    Row,
    RowValues,
    Sheet,
    SheetBindExt,
    TextHandling,
};
