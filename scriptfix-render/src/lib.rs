//! Rendering helpers (console text, markdown) for human-readable output.

use scriptfix_types::report::{FileErrorKind, FileResult, FileStatus, RepairReport};

/// Console summary: one line per touched file, then the run totals.
pub fn render_summary_text(report: &RepairReport) -> String {
    let mut out = String::new();

    for f in &report.files {
        match f.status {
            FileStatus::Fixed => out.push_str(&format!("Fixed {}\n", file_name(&f.path))),
            FileStatus::Planned => out.push_str(&format!("Would fix {}\n", file_name(&f.path))),
            FileStatus::Failed => out.push_str(&format!(
                "Failed {} ({})\n",
                file_name(&f.path),
                error_label(f)
            )),
            FileStatus::Unchanged => {}
        }
    }

    let s = &report.summary;
    if report.scan.dry_run {
        out.push_str("Dry run: no files were written.\n");
    }
    out.push_str(&format!("Total URL fixes: {}\n", s.defects.malformed_url));
    out.push_str(&format!(
        "Total Markdown lines removed: {}\n",
        s.defects.stray_fence
    ));
    if report.scan.dry_run {
        out.push_str(&format!(
            "Files to fix: {} of {} scanned\n",
            s.files_planned, s.files_scanned
        ));
    } else {
        out.push_str(&format!(
            "Files fixed: {} of {} scanned\n",
            s.files_fixed, s.files_scanned
        ));
    }

    if s.files_failed > 0 {
        out.push_str(&format!("Files failed: {}\n", s.files_failed));
        for f in report.files_with_status(FileStatus::Failed) {
            let msg = f.error.as_ref().map(|e| e.message.as_str()).unwrap_or("-");
            out.push_str(&format!("  - {} [{}] {}\n", f.path, error_label(f), msg));
        }
    }

    out
}

pub fn render_report_md(report: &RepairReport) -> String {
    let mut out = String::new();
    out.push_str("# scriptfix report\n\n");
    out.push_str(&format!(
        "- Directory: `{}`\n- Extension: `{}`\n- Dry run: `{}`\n\n",
        report.scan.directory, report.scan.extension, report.scan.dry_run
    ));

    let s = &report.summary;
    out.push_str(&format!(
        "- Scanned: {}\n- Fixed: {}\n- Planned: {}\n- Unchanged: {}\n- Failed: {}\n- URL fixes: {}\n- Fence lines removed: {}\n\n",
        s.files_scanned,
        s.files_fixed,
        s.files_planned,
        s.files_unchanged,
        s.files_failed,
        s.defects.malformed_url,
        s.defects.stray_fence
    ));

    out.push_str("## Files\n\n");
    let touched: Vec<&FileResult> = report
        .files
        .iter()
        .filter(|f| f.status != FileStatus::Unchanged)
        .collect();
    if touched.is_empty() {
        out.push_str("_No files needed repair._\n");
        return out;
    }

    for (i, f) in touched.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, f.path));
        out.push_str(&format!("- Status: `{}`\n", status_label(f.status)));
        if !f.defects.is_empty() {
            out.push_str(&format!(
                "- URL fixes: {}\n- Fence lines removed: {}\n",
                f.defects.malformed_url, f.defects.stray_fence
            ));
        }
        if let (Some(before), Some(after)) = (&f.sha256_before, &f.sha256_after) {
            out.push_str(&format!("- sha256: {} → {}\n", before, after));
        }
        if let Some(err) = &f.error {
            out.push_str(&format!("- Error ({}): {}\n", error_label(f), err.message));
        }
        out.push('\n');
    }

    out
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn error_label(f: &FileResult) -> &'static str {
    match f.error.as_ref().map(|e| e.kind) {
        Some(FileErrorKind::ReadError) => "read error",
        Some(FileErrorKind::WriteError) => "write error",
        None => "error",
    }
}

fn status_label(s: FileStatus) -> &'static str {
    match s {
        FileStatus::Fixed => "fixed",
        FileStatus::Unchanged => "unchanged",
        FileStatus::Planned => "planned",
        FileStatus::Failed => "failed",
    }
}
