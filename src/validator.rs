//! Header validation pipeline.
//!
//! Extracts the header, runs every schema rule against it, then the
//! structural checks, folding each result into one overall verdict.
//! Diagnostics are written as problems are found; only an unreadable or
//! missing header stops the run early.

use crate::constants::messages::{TEMPLATE_HINT, TEMPLATE_WARNING};
use crate::error::{CheckError, Result};
use crate::header::{extract_header, read_header};
use crate::models::{HeaderValue, ParsedHeader};
use crate::report::Reporter;
use crate::schema::{RULES, SchemaEntry};
use crate::structure::check_structure;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Check the header of the document at `path`
///
/// Returns `Ok(true)` when every check passed, `Ok(false)` when problems
/// were reported, and an error when no header could be extracted at all.
pub fn check_file<W: Write>(path: &Path, reporter: &mut Reporter<W>) -> Result<bool> {
    info!("Checking {}", path.display());
    let header = read_header(path)?;
    check_extracted(header, path, reporter)
}

/// Check a document that is already held in memory as lines
pub fn check_lines<S: AsRef<str>, W: Write>(
    lines: &[S],
    path: &Path,
    reporter: &mut Reporter<W>,
) -> Result<bool> {
    let header = extract_header(lines, path)?;
    check_extracted(header, path, reporter)
}

fn check_extracted<W: Write>(
    header: ParsedHeader,
    path: &Path,
    reporter: &mut Reporter<W>,
) -> Result<bool> {
    if header.template_found {
        reporter.warn(TEMPLATE_WARNING);
        reporter.detail(TEMPLATE_HINT);
    }

    if header.is_empty() {
        return Err(CheckError::HeaderNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(check_header(&header, reporter))
}

/// Run field rules and structural checks over an extracted header
pub fn check_header<W: Write>(header: &ParsedHeader, reporter: &mut Reporter<W>) -> bool {
    let mut is_valid = true;

    for entry in RULES {
        match header.get(entry.name) {
            // Optional fields left blank are treated as not filled in
            Some(value) if entry.required || value.is_truthy() => {
                is_valid &= check_field(entry, value, reporter);
            }
            Some(_) => {
                debug!("Skipping empty optional field '{}'", entry.name);
            }
            None if entry.required => {
                reporter.error(&format!(
                    "index file is missing mandatory key \"{}\".",
                    entry.name
                ));
                is_valid = false;
            }
            None => {}
        }
    }

    is_valid &= check_structure(&header.seen_fields, reporter);

    debug!(
        "Header check finished: valid={}, errors={}",
        is_valid,
        reporter.error_count()
    );
    is_valid
}

/// Apply one rule to a present value, reporting the failure
pub fn check_field<W: Write>(
    entry: &SchemaEntry,
    value: &HeaderValue,
    reporter: &mut Reporter<W>,
) -> bool {
    let valid = entry.check(value);
    if !valid {
        debug!("Field '{}' failed its {:?} check", entry.name, entry.kind);
        reporter.error(entry.message);
        reporter.detail(&format!("Offending entry is: \"{}\"", value));
    }
    valid
}
