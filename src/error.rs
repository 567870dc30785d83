//! Error types for the document engine.
//!
//! Validation never fails in the `Result`-as-error sense: a rejected
//! document is reported as a [`Rejection`], which callers can match on to
//! explain *why* a value was refused. [`BrdocsError`] covers the surfaces
//! around the engine (pattern ids, input files, JSON).

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail outside validation.
pub type BrdocsResult<T> = Result<T, BrdocsError>;

/// Reason a CPF or CNPJ was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// Fewer digits than the document requires
    #[error("too short")]
    TooShort,

    /// More digits than the document allows
    #[error("too long")]
    TooLong,

    /// Every digit is the same
    #[error("repeated digits")]
    RepeatedDigits,

    /// Known placeholder value
    #[error("denylisted")]
    Denylisted,

    /// Check digits do not match
    #[error("bad checksum")]
    BadChecksum,
}

/// Errors raised by the engine's non-validation surfaces.
#[derive(Debug, Error)]
pub enum BrdocsError {
    /// Mask pattern id not recognized
    #[error("Unknown mask pattern '{0}'")]
    UnknownMask(String),

    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON payload
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<io::Error> for BrdocsError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}
