//! Tests for the artifact upload path behind the object store port

use volaudit::core::ports::ObjectStore;
use volaudit::core::services::report::ReportBuilder;
use volaudit::output;
use volaudit::report_io;

use crate::common::fixtures;
use crate::common::mocks::MemoryObjectStore;

#[test]
fn uploads_both_artifacts_through_the_port() {
    let report = ReportBuilder::new(fixtures::eval_instant(), 7).build();
    let base = report_io::artifact_basename(report.generated_at);
    let store = MemoryObjectStore::new();
    let port: &dyn ObjectStore = &store;

    let json = output::render_json(&report).unwrap();
    port.put(&format!("{base}.json"), json.as_bytes(), "application/json").unwrap();
    let markdown = output::render_markdown(&report);
    port.put(&format!("{base}.md"), markdown.as_bytes(), "text/markdown").unwrap();

    assert_eq!(
        store.object_names(),
        vec![
            "volume_backup_posture_20260315T120000Z.json".to_string(),
            "volume_backup_posture_20260315T120000Z.md".to_string(),
        ]
    );
}

#[test]
fn put_reports_the_stored_object_uri() {
    let store = MemoryObjectStore::new();
    let uploaded = store.put("posture/report.json", b"{}", "application/json").unwrap();
    assert_eq!(uploaded.object_name, "posture/report.json");
    assert_eq!(uploaded.uri, "mem://mock-bucket/posture/report.json");
}
