use glob::glob;
use ignore::WalkBuilder;
use mime_guess::from_path;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expands input arguments (files, glob patterns, directories) into document paths.
pub struct InputWalker;

impl InputWalker {
    pub fn expand(args: &[String]) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for arg in args {
            let path = Path::new(arg);
            if path.is_dir() {
                paths.extend(Self::walk_dir(path));
            } else if path.exists() || !is_glob(arg) {
                // explicit file: always attempted, missing ones surface as unreadable later
                paths.push(path.to_path_buf());
            } else {
                paths.extend(Self::expand_glob(arg));
            }
        }

        // "a.txt" and "./a.txt" are the same document
        let mut seen = HashSet::new();
        paths.retain(|p| seen.insert(fs::canonicalize(p).unwrap_or_else(|_| p.clone())));
        paths
    }

    fn expand_glob(pattern: &str) -> Vec<PathBuf> {
        let entries = match glob(pattern) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(pattern, error = %err, "invalid glob pattern");
                return Vec::new();
            }
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(err) => {
                    warn!(error = %err, "glob entry unreadable");
                    None
                }
            })
            .filter(|p| p.is_file() && looks_like_text(p))
            .collect();
        found.sort();
        debug!(pattern, matched = found.len(), "expanded glob");
        found
    }

    fn walk_dir(dir: &Path) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .git_ignore(true)
            .build();

        let mut found = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) && looks_like_text(entry.path()) {
                        found.push(entry.into_path());
                    }
                }
                Err(err) => warn!(error = %err, "walk error"),
            }
        }
        found.sort();
        debug!(dir = %dir.display(), matched = found.len(), "walked directory");
        found
    }
}

fn is_glob(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

fn looks_like_text(path: &Path) -> bool {
    let mime = from_path(path).first_or_text_plain();
    let is_text = mime.type_() == mime_guess::mime::TEXT;
    if !is_text {
        warn!(path = %path.display(), mime = %mime, "skipping non-text file");
    }
    is_text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "Chapter 1\n").unwrap();
        path
    }

    #[test]
    fn test_directory_yields_sorted_text_files() {
        let dir = TempDir::new().unwrap();
        let b = touch(dir.path(), "b.txt");
        let a = touch(dir.path(), "a.txt");
        touch(dir.path(), "cover.png");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "c.txt");

        let found = InputWalker::expand(&[dir.path().to_string_lossy().to_string()]);
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn test_glob_pattern() {
        let dir = TempDir::new().unwrap();
        let one = touch(dir.path(), "novel1.txt");
        let two = touch(dir.path(), "novel2.txt");
        touch(dir.path(), "notes.md");

        let pattern = dir.path().join("novel*.txt").to_string_lossy().to_string();
        assert_eq!(InputWalker::expand(&[pattern]), vec![one, two]);
    }

    #[test]
    fn test_explicit_paths_are_kept_even_if_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt").to_string_lossy().to_string();
        let found = InputWalker::expand(&[missing.clone(), missing.clone()]);
        assert_eq!(found, vec![PathBuf::from(missing)]);
    }

    #[test]
    fn test_same_file_spelled_twice_is_read_once() {
        let dir = TempDir::new().unwrap();
        let novel = touch(dir.path(), "novel.txt");
        let dotted = dir.path().join(".").join("novel.txt");

        let found = InputWalker::expand(&[
            novel.to_string_lossy().to_string(),
            dotted.to_string_lossy().to_string(),
        ]);
        assert_eq!(found, vec![novel]);
    }
}
