//! Run configuration.
//!
//! Resolves which document to check from the command line, falling back
//! to the conventional locations of a workshop page.

use crate::cli::Args;
use crate::constants::DEFAULT_INDEX_PATHS;
use crate::error::{CheckError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for a single checking run
#[derive(Debug, Clone)]
pub struct Config {
    /// Document whose header is checked
    pub index_file: PathBuf,
}

impl Config {
    /// Build the configuration from parsed command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let candidates: Vec<PathBuf> = DEFAULT_INDEX_PATHS.iter().map(PathBuf::from).collect();
        let index_file = resolve_index_file(args.index_file.as_deref(), &candidates)?;

        Ok(Self { index_file })
    }
}

/// Pick the document to check
///
/// An explicit path is used as given, even if it does not exist, so the
/// read failure names it. Otherwise the first existing candidate wins.
pub fn resolve_index_file(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let found = candidates
        .iter()
        .find(|candidate| candidate.exists())
        .cloned()
        .ok_or(CheckError::NoInputFile)?;

    debug!("Discovered index file at {}", found.display());
    Ok(found)
}
