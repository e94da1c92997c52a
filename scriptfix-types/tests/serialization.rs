use pretty_assertions::assert_eq;
use scriptfix_types::defect::{DefectCounts, DefectKind};
use scriptfix_types::report::{
    FileErrorKind, FileResult, FileStatus, RepairReport, ReportRunInfo, ReportToolInfo, ScanInfo,
};

fn empty_report() -> RepairReport {
    RepairReport::new(
        ReportToolInfo {
            name: "scriptfix".to_string(),
            version: "0.1.0".to_string(),
        },
        ReportRunInfo {
            started_at: "2026-01-01T00:00:00Z".to_string(),
            ended_at: None,
            duration_ms: None,
        },
        ScanInfo {
            directory: "testsprite_tests".to_string(),
            extension: "*.py".to_string(),
            dry_run: false,
        },
    )
}

fn fixed(path: &str, urls: u64, fences: u64) -> FileResult {
    let mut defects = DefectCounts::default();
    defects.add(DefectKind::MalformedUrl, urls);
    defects.add(DefectKind::StrayFence, fences);
    FileResult {
        path: path.to_string(),
        status: FileStatus::Fixed,
        defects,
        sha256_before: Some("aa".to_string()),
        sha256_after: Some("bb".to_string()),
        error: None,
    }
}

#[test]
fn file_status_serializes_snake_case() {
    let values: Vec<_> = [
        FileStatus::Fixed,
        FileStatus::Unchanged,
        FileStatus::Planned,
        FileStatus::Failed,
    ]
    .into_iter()
    .map(|s| serde_json::to_value(s).expect("serialize"))
    .collect();

    assert_eq!(
        values,
        vec![
            serde_json::json!("fixed"),
            serde_json::json!("unchanged"),
            serde_json::json!("planned"),
            serde_json::json!("failed"),
        ]
    );
}

#[test]
fn error_kinds_serialize_snake_case() {
    assert_eq!(
        serde_json::to_value(FileErrorKind::ReadError).unwrap(),
        serde_json::json!("read_error")
    );
    assert_eq!(
        serde_json::to_value(FileErrorKind::WriteError).unwrap(),
        serde_json::json!("write_error")
    );
    assert_eq!(
        serde_json::to_value(DefectKind::StrayFence).unwrap(),
        serde_json::json!("stray_fence")
    );
}

#[test]
fn new_report_sets_schema() {
    let report = empty_report();
    assert_eq!(report.schema, scriptfix_types::schema::SCRIPTFIX_REPORT_V1);
    assert!(report.files.is_empty());
    assert!(!report.has_failures());
}

#[test]
fn unchanged_file_omits_optional_fields() {
    let result = FileResult {
        path: "clean.py".to_string(),
        status: FileStatus::Unchanged,
        defects: DefectCounts::default(),
        sha256_before: None,
        sha256_after: None,
        error: None,
    };

    let value = serde_json::to_value(&result).expect("serialize");
    assert!(value.get("sha256_before").is_none());
    assert!(value.get("sha256_after").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn push_folds_only_fixed_counts_into_totals() {
    let mut report = empty_report();
    report.push(fixed("a.py", 1, 2));
    report.push(fixed("b.py", 3, 0));
    report.push(FileResult::failed(
        "c.py",
        FileErrorKind::ReadError,
        "stream did not contain valid UTF-8",
    ));
    report.push(FileResult {
        path: "d.py".to_string(),
        status: FileStatus::Unchanged,
        defects: DefectCounts::default(),
        sha256_before: None,
        sha256_after: None,
        error: None,
    });

    assert_eq!(report.summary.files_scanned, 4);
    assert_eq!(report.summary.files_fixed, 2);
    assert_eq!(report.summary.files_failed, 1);
    assert_eq!(report.summary.files_unchanged, 1);
    assert_eq!(report.summary.defects.malformed_url, 4);
    assert_eq!(report.summary.defects.stray_fence, 2);
    assert!(report.has_failures());

    let failed: Vec<_> = report
        .files_with_status(FileStatus::Failed)
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(failed, vec!["c.py"]);
}

#[test]
fn report_deserializes_without_optional_sections() {
    let json = serde_json::json!({
        "schema": "scriptfix.report.v1",
        "tool": { "name": "scriptfix", "version": "0.1.0" },
        "run": { "started_at": "2026-01-01T00:00:00Z" },
        "scan": { "directory": "d", "extension": "*" },
        "summary": {
            "files_scanned": 0,
            "files_fixed": 0,
            "files_unchanged": 0,
            "files_failed": 0,
            "defects": { "malformed_url": 0, "stray_fence": 0 }
        }
    });

    let report: RepairReport = serde_json::from_value(json).expect("deserialize");
    assert!(report.files.is_empty());
    assert!(!report.scan.dry_run);
    assert_eq!(report.summary.files_planned, 0);
}
