use std::collections::HashSet;
use std::path::{self, Path, PathBuf};
use tracing::warn;

use crate::i18n::LabelStyle;

/// Output paths handed out so far in one run, across every document.
#[derive(Debug, Default)]
pub struct ClaimedPaths {
    claimed: HashSet<PathBuf>,
}

impl ClaimedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// `dir/<stem>.<ext>`, or `dir/<stem>_N.<ext>` when that path was already claimed.
    fn claim(&mut self, dir: &Path, stem: &str, extension: &str) -> PathBuf {
        // "out" and "./out" must collide
        let key_dir = path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());

        let mut name = format!("{stem}.{extension}");
        let mut n = 2;
        while self.claimed.contains(&key_dir.join(&name)) {
            name = format!("{stem}_{n}.{extension}");
            n += 1;
        }
        if n > 2 {
            warn!(dir = %dir.display(), %stem, renamed = %name, "duplicate output name");
        }
        self.claimed.insert(key_dir.join(&name));
        dir.join(name)
    }
}

/// Builds `<base>_<prefix><first>-<last><suffix>.<ext>` paths for one document.
#[derive(Debug)]
pub struct OutputNamer<'c> {
    base: String,
    extension: String,
    style: LabelStyle,
    claimed: &'c mut ClaimedPaths,
}

impl<'c> OutputNamer<'c> {
    pub fn new(
        base: impl Into<String>,
        extension: impl Into<String>,
        style: LabelStyle,
        claimed: &'c mut ClaimedPaths,
    ) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
            style,
            claimed,
        }
    }

    pub fn batch_path(&mut self, dir: &Path, first_label: &str, last_label: &str) -> PathBuf {
        let stem = format!("{}_{}", self.base, self.style.decorate(first_label, last_label));
        self.claimed.claim(dir, &stem, &self.extension)
    }

    pub fn preface_path(&mut self, dir: &Path) -> PathBuf {
        let stem = format!("{}_preface", self.base);
        self.claimed.claim(dir, &stem, &self.extension)
    }
}
