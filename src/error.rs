//! Error types
//!
//! The simulation itself is infallible: ignored commands are no-ops and a
//! crash is an ordinary outcome. Only the durable record and the tuning file
//! can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure touching the personal-best record
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read personal best from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write personal best to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("personal best storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
