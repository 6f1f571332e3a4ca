use jping_application::use_cases::{RunChecksUseCase, RunPostCheckUseCase, RunPreCheckUseCase};
use jping_domain::{CheckMode, DomainError, HostOutcome, PingRecord};
use std::sync::Arc;

mod helpers;
use helpers::{cisco, juniper, settings, MockConnector, MockDevice, MockPingRecordRepository};

fn build(connector: Arc<MockConnector>, repo: Arc<MockPingRecordRepository>) -> RunChecksUseCase {
    let pre = Arc::new(RunPreCheckUseCase::new(
        connector.clone(),
        repo.clone(),
        settings(),
    ));
    let post = Arc::new(RunPostCheckUseCase::new(connector, repo, settings()));
    RunChecksUseCase::new(pre, post)
}

#[tokio::test]
async fn test_hosts_processed_in_configuration_order() {
    let connector = Arc::new(
        MockConnector::new()
            .with_device("edge1", MockDevice::new().with_neighbor("10.0.0.1", "ge-0/0/0", true))
            .with_device("core2", MockDevice::new().with_neighbor("10.1.0.1", "Gi0/1", true)),
    );
    let repo = Arc::new(MockPingRecordRepository::new());
    let use_case = build(connector.clone(), repo);

    let report = use_case
        .execute(CheckMode::Pre, &[cisco("core2"), juniper("edge1")])
        .await;

    assert_eq!(report.mode, CheckMode::Pre);
    let order: Vec<_> = report.hosts.iter().map(|h| h.hostname.as_str()).collect();
    assert_eq!(order, vec!["core2", "edge1"]);
    assert_eq!(connector.events()[0], "connect:core2");
}

#[tokio::test]
async fn test_connection_failure_does_not_stop_other_hosts() {
    let connector = Arc::new(
        MockConnector::new()
            .with_device(
                "edge1",
                MockDevice::new().unreachable(DomainError::ConnectTimeout {
                    host: "edge1".to_string(),
                    timeout_secs: 5,
                }),
            )
            .with_device("edge2", MockDevice::new().with_neighbor("10.0.0.9", "ae0", true)),
    );
    let repo = Arc::new(MockPingRecordRepository::new());
    let use_case = build(connector, repo.clone());

    let report = use_case
        .execute(CheckMode::Pre, &[juniper("edge1"), juniper("edge2")])
        .await;

    assert!(report.has_failures());
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "edge1");
    assert!(failures[0].1.is_connection_error());

    match &report.hosts[1].outcome {
        HostOutcome::PreCheck(summary) => assert_eq!(summary.entries, 1),
        other => panic!("expected pre-check summary, got {:?}", other),
    }
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_post_mode_collects_comparison_rows() {
    let repo = Arc::new(
        MockPingRecordRepository::with_records(vec![
            PingRecord::new("edge1", "ge-0/0/0", "10.0.0.1", true),
            PingRecord::new("edge2", "ae0", "10.0.0.9", true),
        ])
        .await,
    );
    let connector = Arc::new(
        MockConnector::new()
            .with_device("edge1", MockDevice::new().with_ping("10.0.0.1", Ok(false)))
            .with_device("edge2", MockDevice::new().with_ping("10.0.0.9", Ok(true)))
            .with_device("edge3", MockDevice::new()),
    );
    let use_case = build(connector, repo);

    let report = use_case
        .execute(
            CheckMode::Post,
            &[juniper("edge1"), juniper("edge2"), juniper("edge3")],
        )
        .await;

    assert!(!report.has_failures());
    assert_eq!(report.rows().count(), 2);
    let regressions: Vec<_> = report.regressions().collect();
    assert_eq!(regressions.len(), 1);
    assert_eq!(regressions[0].ip_address, "10.0.0.1");

    match &report.hosts[2].outcome {
        HostOutcome::PostCheck(rows) => assert!(rows.is_empty()),
        other => panic!("expected empty post-check, got {:?}", other),
    }
}

#[tokio::test]
async fn test_every_connected_host_is_disconnected() {
    let connector = Arc::new(
        MockConnector::new()
            .with_device("edge1", MockDevice::new().with_neighbor("10.0.0.1", "ge-0/0/0", true))
            .with_device(
                "edge2",
                MockDevice::new().with_arp_error(DomainError::parse_failure(
                    "edge2",
                    "unexpected reply",
                )),
            ),
    );
    let repo = Arc::new(MockPingRecordRepository::new());
    let use_case = build(connector.clone(), repo);

    let report = use_case
        .execute(CheckMode::Pre, &[juniper("edge1"), juniper("edge2")])
        .await;

    assert_eq!(report.failures().count(), 1);
    assert_eq!(connector.count("connect:"), 2);
    assert_eq!(connector.count("disconnect:"), 2);
}
