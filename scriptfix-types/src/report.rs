use crate::defect::DefectCounts;
use serde::{Deserialize, Serialize};

/// Run-level report for one repair pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairReport {
    pub schema: String,
    pub tool: ReportToolInfo,
    pub run: ReportRunInfo,
    pub scan: ScanInfo,
    pub summary: RunSummary,

    #[serde(default)]
    pub files: Vec<FileResult>,
}

impl RepairReport {
    pub fn new(tool: ReportToolInfo, run: ReportRunInfo, scan: ScanInfo) -> Self {
        Self {
            schema: crate::schema::SCRIPTFIX_REPORT_V1.to_string(),
            tool,
            run,
            scan,
            summary: RunSummary::default(),
            files: vec![],
        }
    }

    /// Record a per-file outcome and fold it into the summary.
    pub fn push(&mut self, result: FileResult) {
        self.summary.files_scanned += 1;
        match result.status {
            FileStatus::Fixed => {
                self.summary.files_fixed += 1;
                self.summary.defects.merge(&result.defects);
            }
            FileStatus::Planned => {
                self.summary.files_planned += 1;
                self.summary.defects.merge(&result.defects);
            }
            FileStatus::Unchanged => self.summary.files_unchanged += 1,
            FileStatus::Failed => self.summary.files_failed += 1,
        }
        self.files.push(result);
    }

    pub fn has_failures(&self) -> bool {
        self.summary.files_failed > 0
    }

    pub fn files_with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileResult> {
        self.files.iter().filter(move |f| f.status == status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRunInfo {
    pub started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// What the pass looked at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanInfo {
    pub directory: String,
    pub extension: String,

    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub files_scanned: u64,
    pub files_fixed: u64,

    #[serde(default)]
    pub files_planned: u64,

    pub files_unchanged: u64,
    pub files_failed: u64,

    /// Totals over fixed (or, in dry-run, planned) files only.
    pub defects: DefectCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Fixed,
    Unchanged,
    Planned,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileErrorKind {
    ReadError,
    WriteError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub kind: FileErrorKind,
    pub message: String,
}

/// Outcome for a single scanned file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub path: String,
    pub status: FileStatus,

    #[serde(default)]
    pub defects: DefectCounts,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FileError>,
}

impl FileResult {
    pub fn failed(path: impl Into<String>, kind: FileErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Failed,
            defects: DefectCounts::default(),
            sha256_before: None,
            sha256_after: None,
            error: Some(FileError {
                kind,
                message: message.into(),
            }),
        }
    }
}
