//! Parsers for the case table.
//!
//! # Parsers
//!
//! - [`csv_parser`]: read per-region case rows from CSV by configured column names
//!
//! # Example
//!
//! ```no_run
//! use trajectory_backend::config::DatasetSettings;
//! use trajectory_backend::parsing::csv_parser::parse_records_csv;
//! use std::path::Path;
//!
//! let rows = parse_records_csv(Path::new("districts.csv"), &DatasetSettings::default())
//!     .expect("Failed to parse case table");
//! ```

pub mod csv_parser;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{parse_records_csv, parse_records_from_reader, parse_records_str};
