//! Unified error type

use thiserror::Error;

use crate::binder::BindError;

/// Result type for odsbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any error odsbind can return
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup in a parsed document failed
    #[error(transparent)]
    Core(#[from] odsbind_core::Error),

    /// The ODS file could not be read
    #[error(transparent)]
    Ods(#[from] odsbind_ods::OdsError),

    /// Rows could not be bound
    #[error(transparent)]
    Bind(#[from] BindError),
}
