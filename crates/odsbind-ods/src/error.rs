//! ODS error types

use thiserror::Error;

/// Result type for ODS operations
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur while reading an ODS document
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid document structure (e.g. no spreadsheet body)
    #[error("Invalid ODS format: {0}")]
    InvalidFormat(String),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A resource limit was exceeded under [`LimitMode::Throw`](crate::LimitMode::Throw)
    #[error("{what} exceeds limit {limit}")]
    LimitExceeded { what: String, limit: usize },

    /// Feature not supported (encrypted documents)
    #[error("Not supported: {0}")]
    Unsupported(String),
}
