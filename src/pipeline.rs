use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

use crate::error::{Result, SplitError};
use crate::i18n::LabelStyle;
use crate::input::Document;
use crate::output::{ClaimedPaths, DocumentReport, DocumentStatus, Materializer, OutputNamer, RunReport};
use crate::splitter::{RegexRule, batch, preface, segment};

/// Everything needed to split documents, resolved from CLI flags, settings or the wizard.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub rule: RegexRule,
    pub group_size: usize,
    pub output_dir: Option<PathBuf>,
    pub style: LabelStyle,
    pub keep_preface: bool,
    pub dry_run: bool,
}

impl SplitRequest {
    pub fn new(pattern: &str, group_size: usize, style: LabelStyle) -> Result<Self> {
        if group_size == 0 {
            return Err(SplitError::InvalidGroupSize(group_size));
        }
        Ok(Self {
            rule: RegexRule::new(pattern)?,
            group_size,
            output_dir: None,
            style,
            keep_preface: false,
            dry_run: false,
        })
    }
}

/// Output names are unique across the whole run, so documents that share a
/// base name and a destination do not overwrite each other.
pub fn run(inputs: &[PathBuf], request: &SplitRequest) -> Result<RunReport> {
    let mut report = RunReport {
        dry_run: request.dry_run,
        documents: Vec::with_capacity(inputs.len()),
    };
    let mut claimed = ClaimedPaths::new();
    for path in inputs {
        report.documents.push(split_file(path, request, &mut claimed)?);
    }
    Ok(report)
}

/// Split one file. Recoverable problems end up in the report; only errors that
/// would affect every document are returned.
pub fn split_file(path: &Path, request: &SplitRequest, claimed: &mut ClaimedPaths) -> Result<DocumentReport> {
    let _span = info_span!("document", path = %path.display()).entered();

    let doc = match Document::read(path) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(error = %err, "input unavailable");
            let destination = request.output_dir.clone().unwrap_or_else(|| parent_or_cwd(path));
            let mut report = DocumentReport::new(path.to_path_buf(), request.rule.as_str(), destination);
            report.status = DocumentStatus::InputUnavailable;
            report.error = Some(err.to_string());
            return Ok(report);
        }
    };

    split_document(&doc, request, claimed)
}

pub fn split_document(
    doc: &Document,
    request: &SplitRequest,
    claimed: &mut ClaimedPaths,
) -> Result<DocumentReport> {
    let destination = request.output_dir.clone().unwrap_or_else(|| doc.parent_dir());
    let mut report = DocumentReport::new(doc.path.clone(), request.rule.as_str(), destination.clone());

    let segments = match segment(&doc.text, &request.rule) {
        Ok(segments) => segments,
        Err(err @ SplitError::NoBoundariesFound { .. }) => {
            warn!(error = %err, "nothing to split");
            report.status = DocumentStatus::NoBoundaries;
            report.error = Some(err.to_string());
            return Ok(report);
        }
        Err(err) => return Err(err),
    };
    let batches = batch(&segments, request.group_size)?;
    report.segments = segments.len();
    report.batches = batches.len();
    info!(segments = segments.len(), batches = batches.len(), "grouped chapters");

    let materializer = Materializer::new(destination, request.dry_run);
    let mut namer = OutputNamer::new(doc.base_name(), doc.extension(), request.style.clone(), claimed);

    if request.keep_preface {
        if let Some(text) = preface(&doc.text, &request.rule) {
            materializer.write_preface(text, &mut namer, &mut report);
        }
    }
    materializer.write_batches(&batches, &mut namer, &mut report);

    info!(
        written = report.written.len(),
        planned = report.planned.len(),
        failed = report.failed.len(),
        dir = %materializer.out_dir().display(),
        "document done"
    );
    Ok(report)
}

fn parent_or_cwd(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
