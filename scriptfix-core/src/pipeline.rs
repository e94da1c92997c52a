//! The repair pass, extracted from the CLI.
//!
//! This entry point is I/O-agnostic: all filesystem operations are performed
//! through the port traits.

use crate::ports::{FileSource, WritePort};
use crate::settings::RepairSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::{SecondsFormat, Utc};
use scriptfix_edit::{DefectRule, RepairError, builtin_rules, render_patch, repair_content, sha256_hex};
use scriptfix_types::report::{
    FileResult, FileStatus, RepairReport, ReportRunInfo, ReportToolInfo, ScanInfo,
};
use tracing::{debug, info, warn};

/// Error type for fatal pipeline failures. Per-file failures are not errors;
/// they are recorded in the report.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> u8 {
        2
    }
}

/// Outcome of `run_repair`.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub report: RepairReport,
    /// Unified diff of every fixed or planned file.
    pub patch: String,
}

impl RepairOutcome {
    /// 0 when every file was read (and, if needed, written); 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.report.has_failures() { 1 } else { 0 }
    }
}

/// Run one repair pass with the built-in rule table.
pub fn run_repair(
    settings: &RepairSettings,
    source: &dyn FileSource,
    writer: &dyn WritePort,
    tool: ReportToolInfo,
) -> Result<RepairOutcome, ToolError> {
    run_repair_with_rules(settings, source, writer, tool, &builtin_rules())
}

/// Run one repair pass with a caller-supplied rule table.
///
/// Files are handled strictly one at a time: read, repair, compare, and
/// (unless dry-run) replace when the content changed. A file that fails to
/// read or write is recorded and the pass moves on.
pub fn run_repair_with_rules(
    settings: &RepairSettings,
    source: &dyn FileSource,
    writer: &dyn WritePort,
    tool: ReportToolInfo,
    rules: &[Box<dyn DefectRule>],
) -> Result<RepairOutcome, ToolError> {
    let started = Utc::now();

    let candidates = source
        .candidates(settings)
        .with_context(|| format!("list files in {}", settings.directory))?;
    debug!(count = candidates.len(), "candidate files");

    let mut report = RepairReport::new(
        tool,
        ReportRunInfo {
            started_at: started.to_rfc3339_opts(SecondsFormat::Secs, true),
            ended_at: None,
            duration_ms: None,
        },
        ScanInfo {
            directory: settings.directory.to_string(),
            extension: settings.file_pattern(),
            dry_run: settings.dry_run,
        },
    );
    let mut patch = String::new();

    for path in &candidates {
        let result = match repair_file(settings, source, writer, rules, path, &mut patch) {
            Ok(result) => result,
            Err(err) => {
                warn!(path = %path, kind = ?err.kind(), "{}", err.message());
                FileResult::failed(path.as_str(), err.kind(), err.message())
            }
        };
        report.push(result);
    }

    let ended = Utc::now();
    report.run.ended_at = Some(ended.to_rfc3339_opts(SecondsFormat::Secs, true));
    report.run.duration_ms = u64::try_from((ended - started).num_milliseconds()).ok();

    Ok(RepairOutcome { report, patch })
}

fn repair_file(
    settings: &RepairSettings,
    source: &dyn FileSource,
    writer: &dyn WritePort,
    rules: &[Box<dyn DefectRule>],
    path: &Utf8Path,
    patch: &mut String,
) -> Result<FileResult, RepairError> {
    let before = source
        .read_text(path)
        .map_err(|e| RepairError::read(path, format!("{e:#}")))?;

    let repaired = repair_content(&before, rules);
    if !repaired.changed() {
        debug!(path = %path, "no defects");
        return Ok(FileResult {
            path: path.to_string(),
            status: FileStatus::Unchanged,
            defects: repaired.defects,
            sha256_before: None,
            sha256_after: None,
            error: None,
        });
    }

    let status = if settings.dry_run {
        FileStatus::Planned
    } else {
        writer
            .replace_file(path, repaired.content.as_bytes())
            .map_err(|e| RepairError::write(path, format!("{e:#}")))?;
        info!(
            path = %path,
            url_fixes = repaired.defects.malformed_url,
            fence_lines = repaired.defects.stray_fence,
            "fixed"
        );
        FileStatus::Fixed
    };

    patch.push_str(&render_patch(path, &before, &repaired.content));

    Ok(FileResult {
        path: path.to_string(),
        status,
        defects: repaired.defects,
        sha256_before: Some(sha256_hex(before.as_bytes())),
        sha256_after: Some(sha256_hex(repaired.content.as_bytes())),
        error: None,
    })
}

/// Write `report.json`, `report.md` and `patch.diff` into `out_dir`.
#[cfg(feature = "reporting")]
pub fn write_report_artifacts(
    outcome: &RepairOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), json.as_bytes())?;
    writer.write_file(
        &out_dir.join("report.md"),
        scriptfix_render::render_report_md(&outcome.report).as_bytes(),
    )?;
    writer.write_file(&out_dir.join("patch.diff"), outcome.patch.as_bytes())?;

    debug!(out_dir = %out_dir, "wrote report artifacts");
    Ok(())
}
