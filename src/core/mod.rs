//! Core utilities for the roster manager
//!
//! - `source`: reading raw record lines from disk
//! - `records`: splitting delimited lines into typed rows

pub mod records;
pub mod source;

pub use records::{parse_row, split_fields, ParsedRow, PersonRow, Record, RosterRow, DELIMITER};
pub use source::read_lines;
