//! Workshop Header Checker Library
//!
//! Validates the metadata header of a workshop home page against the fixed
//! workshop header schema.
//!
//! This library provides:
//! - Extraction of the `---`-delimited header block, with comment lines skipped
//! - Per-field checks for layout, dates, coordinates, contact email and more
//! - Structural checks for duplicate, missing and unexpected fields
//! - `ERROR:`/`WARN:` diagnostics written as problems are found

pub mod checkers;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod report;
pub mod schema;
pub mod structure;
pub mod validator;

// Re-export commonly used types
pub use config::Config;
pub use error::{CheckError, Result};
pub use models::{HeaderValue, ParsedHeader};
pub use report::Reporter;
pub use validator::{check_file, check_header, check_lines};
