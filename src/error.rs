use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("invalid boundary pattern '{pattern}': {source}")]
    InvalidBoundaryRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no chapter headings match '{pattern}'")]
    NoBoundariesFound { pattern: String },

    #[error("group size must be at least 1 (got {0})")]
    InvalidGroupSize(usize),

    #[error("unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("cannot read {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    OutputSinkFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
