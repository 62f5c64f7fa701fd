//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - A cell's value plus its formula text
//! - [`CellValue`] - The typed value stored in a cell
//! - [`CellKind`] - The value type without its data
//! - Date and time-span literal parsing shared by the reader and the binder

mod time;
mod value;

pub use time::{
    format_duration, parse_clock_duration, parse_date_time, parse_iso_duration,
    parse_naive_date_time,
};
pub use value::{Cell, CellKind, CellValue};
