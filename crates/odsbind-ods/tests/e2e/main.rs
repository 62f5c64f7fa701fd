//! End-to-end tests for odsbind-ods.
//!
//! Each test builds the ODS container it needs in memory with
//! `zip::ZipWriter`, then reads it back with `OdsReader` and asserts on the
//! resulting document.

mod common;
mod reading;

pub use common::*;
