//! Error handling for header checking.
//!
//! Only conditions that stop a run outright live here. Schema violations
//! are reported as diagnostics and folded into the overall result instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Could not read \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No index.html found in the current or parent directory")]
    NoInputFile,

    #[error(
        "Cannot find header in given file \"{path}\". Please check path, is this the bc index.html?"
    )]
    HeaderNotFound { path: PathBuf },

    #[error("Header in \"{path}\" could not be decoded: {source}")]
    HeaderDecode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CheckError {
    /// Create an I/O error for the given input path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
