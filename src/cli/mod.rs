//! Command-line output formatting

pub mod output;

pub use output::{format_json, format_report_line, format_timestamp, FileReport};
