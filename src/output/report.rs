use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Ok,
    NoBoundaries,
    InputUnavailable,
    PartialWrite,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub error: String,
}

/// What happened to one input document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub input: PathBuf,
    pub pattern: String,
    pub status: DocumentStatus,
    pub segments: usize,
    pub batches: usize,
    pub written: Vec<PathBuf>,
    /// Paths a dry run would have written.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub planned: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedWrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preface: Option<PathBuf>,
    pub destination: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn new(input: PathBuf, pattern: &str, destination: PathBuf) -> Self {
        Self {
            input,
            pattern: pattern.to_string(),
            status: DocumentStatus::Ok,
            segments: 0,
            batches: 0,
            written: Vec::new(),
            planned: Vec::new(),
            failed: Vec::new(),
            preface: None,
            destination,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DocumentStatus::Ok
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        !self.documents.is_empty() && self.documents.iter().all(DocumentReport::is_success)
    }

    pub fn files_written(&self) -> usize {
        self.documents.iter().map(|d| d.written.len()).sum()
    }

    pub fn files_planned(&self) -> usize {
        self.documents.iter().map(|d| d.planned.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "ok": self.success(),
            "files_written": self.files_written(),
            "files_planned": self.files_planned(),
            "report": self,
        }))
    }

    /// Markdown table, one row per document.
    pub fn to_markdown(&self, headers: [&str; 5]) -> String {
        let mut md = format!("|{}|\n", headers.join("|"));
        md.push_str(&format!("|{}\n", ":-|".repeat(headers.len())));
        for doc in &self.documents {
            let name = doc
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| doc.input.display().to_string());
            md.push_str(&format!(
                "|{}|{}|{}|{}|{}|\n",
                escape_cell(&name),
                doc.segments,
                doc.batches,
                if self.dry_run { doc.planned.len() } else { doc.written.len() },
                escape_cell(&doc.destination.display().to_string()),
            ));
        }
        md
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
