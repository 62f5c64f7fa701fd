//! # odsbind-ods
//!
//! ODS (OpenDocument Spreadsheet) reader for odsbind.
//!
//! The reader opens the zip container, refuses encrypted documents (unless
//! told otherwise), then streams `content.xml` once into a
//! [`Document`](odsbind_core::Document) while enforcing the limits in
//! [`ReaderOptions`].
//!
//! ```rust,no_run
//! use odsbind_ods::{OdsReader, ReaderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = OdsReader::read_file("data.ods", &ReaderOptions::default())?;
//! for sheet in doc.sheets() {
//!     println!("{}: {} rows", sheet.name(), sheet.row_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod options;
pub mod reader;

pub use error::{OdsError, OdsResult};
pub use options::{LimitMode, ReaderOptions};
pub use reader::OdsReader;
