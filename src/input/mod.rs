mod walker;

pub use walker::InputWalker;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SplitError};

pub const DEFAULT_EXTENSION: &str = "txt";

/// A UTF-8 document loaded fully into memory.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SplitError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read document");
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// File name without its extension, used as the prefix of every output file.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }

    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Directory the document lives in; the default output location.
    pub fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
