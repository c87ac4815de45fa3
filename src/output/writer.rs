use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::naming::OutputNamer;
use super::report::{DocumentReport, DocumentStatus, FailedWrite};
use crate::error::SplitError;
use crate::splitter::Batch;

/// Writes batches (and optionally the preface) into an output directory.
pub struct Materializer {
    out_dir: PathBuf,
    dry_run: bool,
}

impl Materializer {
    pub fn new(out_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Every batch is written independently; a failed write is recorded and
    /// the remaining batches are still attempted.
    pub fn write_batches(
        &self,
        batches: &[Batch<'_, '_>],
        namer: &mut OutputNamer<'_>,
        report: &mut DocumentReport,
    ) {
        self.prepare_dir();

        for batch in batches {
            let path = namer.batch_path(&self.out_dir, batch.first_label(), batch.last_label());
            debug!(path = %path.display(), chapters = batch.len(), "materializing batch");
            match self.write_one(&path, &batch.render()) {
                Ok(()) if self.dry_run => report.planned.push(path),
                Ok(()) => report.written.push(path),
                Err(err) => {
                    warn!(error = %err, "batch not written");
                    report.failed.push(FailedWrite {
                        path,
                        error: err.to_string(),
                    });
                }
            }
        }

        if !report.failed.is_empty() {
            report.status = DocumentStatus::PartialWrite;
        }
    }

    pub fn write_preface(&self, preface: &str, namer: &mut OutputNamer<'_>, report: &mut DocumentReport) {
        self.prepare_dir();
        let path = namer.preface_path(&self.out_dir);
        match self.write_one(&path, preface) {
            Ok(()) => report.preface = Some(path),
            Err(err) => {
                warn!(error = %err, "preface not written");
                report.failed.push(FailedWrite {
                    path,
                    error: err.to_string(),
                });
                report.status = DocumentStatus::PartialWrite;
            }
        }
    }

    fn prepare_dir(&self) {
        if self.dry_run {
            return;
        }
        // a failure here shows up again on every individual write
        if let Err(err) = fs::create_dir_all(&self.out_dir) {
            warn!(dir = %self.out_dir.display(), error = %err, "cannot create output directory");
        }
    }

    fn write_one(&self, path: &Path, content: &str) -> Result<(), SplitError> {
        if self.dry_run {
            debug!(path = %path.display(), bytes = content.len(), "dry run, not writing");
            return Ok(());
        }
        if path.exists() {
            debug!(path = %path.display(), "overwriting existing file");
        }
        fs::write(path, content).map_err(|source| SplitError::OutputSinkFailure {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote batch");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LabelStyle;
    use crate::output::ClaimedPaths;
    use crate::splitter::{RegexRule, batch, segment};
    use tempfile::TempDir;

    const TEXT: &str = "Chapter 1\nfoo\nChapter 2\nbar\nChapter 3\nbaz";

    fn run(out_dir: &Path, dry_run: bool) -> DocumentReport {
        let rule = RegexRule::new(r"[Cc]hapter\s*\d+").unwrap();
        let segments = segment(TEXT, &rule).unwrap();
        let batches = batch(&segments, 2).unwrap();

        let mut claimed = ClaimedPaths::new();
        let mut namer = OutputNamer::new("novel", "txt", LabelStyle::for_locale("en"), &mut claimed);
        let mut report = DocumentReport::new(PathBuf::from("novel.txt"), rule.as_str(), out_dir.to_path_buf());
        Materializer::new(out_dir, dry_run).write_batches(&batches, &mut namer, &mut report);
        report
    }

    #[test]
    fn test_writes_one_file_per_batch() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("parts");
        let report = run(&out, false);

        assert!(report.is_success());
        assert_eq!(report.written, vec![out.join("novel_ch1-2.txt"), out.join("novel_ch3-3.txt")]);
        assert_eq!(fs::read_to_string(out.join("novel_ch1-2.txt")).unwrap(), "Chapter 1\nfoo\n\nChapter 2\nbar\n");
        assert_eq!(fs::read_to_string(out.join("novel_ch3-3.txt")).unwrap(), "Chapter 3\nbaz");
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("parts");
        let report = run(&out, true);

        assert_eq!(report.planned, vec![out.join("novel_ch1-2.txt"), out.join("novel_ch3-3.txt")]);
        assert!(report.written.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn test_failed_write_does_not_stop_other_batches() {
        let dir = TempDir::new().unwrap();
        // a directory squatting on the first output name makes that write fail
        fs::create_dir(dir.path().join("novel_ch1-2.txt")).unwrap();

        let report = run(dir.path(), false);
        assert_eq!(report.status, DocumentStatus::PartialWrite);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, dir.path().join("novel_ch1-2.txt"));
        assert_eq!(report.written, vec![dir.path().join("novel_ch3-3.txt")]);
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("novel_ch3-3.txt"), "stale").unwrap();
        run(dir.path(), false);
        assert_eq!(fs::read_to_string(dir.path().join("novel_ch3-3.txt")).unwrap(), "Chapter 3\nbaz");
    }

    #[test]
    fn test_preface_file() {
        let dir = TempDir::new().unwrap();
        let mut claimed = ClaimedPaths::new();
        let mut namer = OutputNamer::new("novel", "txt", LabelStyle::for_locale("ko"), &mut claimed);
        let mut report = DocumentReport::new(PathBuf::from("novel.txt"), "x", dir.path().to_path_buf());

        Materializer::new(dir.path(), false).write_preface("Preface\n", &mut namer, &mut report);
        let path = dir.path().join("novel_preface.txt");
        assert_eq!(report.preface.as_deref(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(path).unwrap(), "Preface\n");
    }
}
