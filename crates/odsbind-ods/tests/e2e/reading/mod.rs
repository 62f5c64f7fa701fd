//! Reading tests - verify that `OdsReader` interprets ODS containers correctly.

mod container;
mod data_types;
mod structure;
