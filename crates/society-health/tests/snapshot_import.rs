use society_health::workflows::health::{score_portfolio, HealthEngine, HealthStatus};
use society_health::workflows::snapshots::SnapshotImporter;

#[test]
fn importer_reads_optional_columns() {
    let data = include_bytes!("data/societies.csv");

    let snapshots = SnapshotImporter::from_reader(&data[..]).expect("export imports");

    assert_eq!(snapshots.len(), 4);
    let maple = &snapshots[0];
    assert_eq!(maple.society_id, "maple-court");
    assert_eq!(maple.previous_overall, Some(84.0));
    assert!(maple.metrics.maintenance_response_time.is_none());

    let lakeview = &snapshots[2];
    assert_eq!(lakeview.critical_override, Some(45.0));
    assert_eq!(lakeview.metrics.notifications_read, Some(70));

    assert!(snapshots[3].metrics.payment_compliance_rate.is_none());
}

#[test]
fn imported_portfolio_scores_and_rejects_independently() {
    let data = include_bytes!("data/societies.csv");
    let snapshots = SnapshotImporter::from_reader(&data[..]).expect("export imports");

    let report = score_portfolio(&HealthEngine::default(), &snapshots);

    assert_eq!(report.scorecards.len(), 3);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].society_id, "cedar-heights");
    assert_eq!(report.rejected[0].field, "payment_compliance_rate");

    let first = &report.scorecards[0];
    assert_eq!(first.society_id, "riverside-towers");
    assert_eq!(first.result.status, HealthStatus::Critical);

    let last = report.scorecards.last().expect("scorecard present");
    assert_eq!(last.society_id, "maple-court");
    assert_eq!(last.result.status, HealthStatus::Healthy);

    let total: usize = report.status_counts.iter().map(|entry| entry.count).sum();
    assert_eq!(total, 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SnapshotImporter::from_path("does/not/exist.csv").expect_err("missing file");

    assert!(err.to_string().contains("failed to read snapshot export"));
}
