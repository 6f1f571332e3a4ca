use jping_domain::{
    CheckMode, CheckReport, ComparisonRow, DomainError, HostOutcome, PingRecord, PreCheckSummary,
};

fn row(ip: &str, first: bool, second: bool) -> ComparisonRow {
    ComparisonRow::from_record(PingRecord::new("edge1", "ge-0/0/0", ip, first), second)
}

#[test]
fn test_pre_check_summary_counts() {
    let mut summary = PreCheckSummary::new("edge1");
    summary.record(true);
    summary.record(false);
    summary.record(true);

    assert_eq!(summary.entries, 3);
    assert_eq!(summary.reachable, 2);
    assert_eq!(summary.unreachable(), 1);
}

#[test]
fn test_report_collects_failures_and_rows() {
    let mut report = CheckReport::new(CheckMode::Post);
    report.push(
        "edge1",
        HostOutcome::PostCheck(vec![row("10.0.0.1", true, false), row("10.0.0.2", true, true)]),
    );
    report.push(
        "edge2",
        HostOutcome::Failed(DomainError::ConnectTimeout {
            host: "edge2".to_string(),
            timeout_secs: 30,
        }),
    );

    assert!(report.has_failures());
    assert_eq!(report.failures().count(), 1);
    assert_eq!(report.failures().next().unwrap().0, "edge2");
    assert_eq!(report.rows().count(), 2);
    assert_eq!(report.regressions().count(), 1);
    assert_eq!(report.summaries().count(), 0);
}

#[test]
fn test_empty_report_has_no_failures() {
    let report = CheckReport::new(CheckMode::Pre);
    assert!(!report.has_failures());
    assert_eq!(report.rows().count(), 0);
}

#[test]
fn test_connection_errors_are_classified() {
    let timeout = DomainError::ConnectTimeout {
        host: "edge1".to_string(),
        timeout_secs: 5,
    };
    let parse = DomainError::parse_failure("edge1", "short ping output");

    assert!(timeout.is_connection_error());
    assert!(!timeout.is_parse_failure());
    assert!(parse.is_parse_failure());
    assert!(!parse.is_connection_error());
}
