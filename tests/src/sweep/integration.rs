#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use probr_common::config::ScanConfig;
use probr_core::network::tcp::TcpProber;
use probr_core::scanner;

use crate::util::{
    CollectingReporter, CountingProber, StaticProber, closed_loopback_port, loopback_listener,
};

fn config(ports: &[&str], show_failures: bool) -> ScanConfig {
    ScanConfig {
        ports: ports.iter().map(|p| p.to_string()).collect(),
        show_failures,
        ..ScanConfig::default()
    }
}

/// With failure reporting enabled, every (host, port) pair produces exactly
/// one result line, duplicates included.
#[tokio::test]
async fn every_pair_is_attempted() {
    let hosts = vec![
        "a.example".to_string(),
        "b.example".to_string(),
        "a.example".to_string(),
    ];
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        hosts,
        config(&["1", "2"], true),
        Arc::new(StaticProber(false)),
        reporter.clone(),
    )
    .await;

    let events = reporter.events();
    assert_eq!(events.len(), 3 * 2 + 1);
    assert_eq!(
        events
            .iter()
            .filter(|line| *line == "Failed on a.example:1")
            .count(),
        2
    );
}

#[tokio::test]
async fn finished_is_emitted_once_and_last() {
    let hosts = vec!["a.example".to_string(), "b.example".to_string()];
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        hosts,
        config(&["1", "2"], false),
        Arc::new(StaticProber(true)),
        reporter.clone(),
    )
    .await;

    let events = reporter.events();
    assert_eq!(
        events.iter().filter(|line| *line == "Finished").count(),
        1
    );
    assert_eq!(events.last().unwrap(), "Finished");
    assert!(
        events[..events.len() - 1]
            .iter()
            .all(|line| line.starts_with("Succeeded on "))
    );
}

/// No more workers than `max_in_flight` are ever probing at once, even when
/// the host list is far larger than the capacity.
#[tokio::test(flavor = "multi_thread")]
async fn admission_cap_bounds_concurrency() {
    let hosts: Vec<String> = (0..20).map(|i| format!("host-{i}.example")).collect();
    let prober = Arc::new(CountingProber::new(Duration::from_millis(25)));
    let reporter = Arc::new(CollectingReporter::default());

    let cfg = ScanConfig {
        max_in_flight: 4,
        ..config(&["1"], true)
    };
    scanner::perform_sweep(hosts, cfg, prober.clone(), reporter.clone()).await;

    assert!(prober.peak() <= 4, "peak concurrency was {}", prober.peak());

    // All 20 workers still cycled through the 4 slots.
    let events = reporter.events();
    assert_eq!(events.len(), 20 + 1);
    assert_eq!(events.last().unwrap(), "Finished");
}

#[tokio::test]
async fn port_order_is_preserved_within_a_host() {
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        vec!["h.example".to_string()],
        config(&["9", "10", "11"], true),
        Arc::new(StaticProber(false)),
        reporter.clone(),
    )
    .await;

    assert_eq!(
        reporter.events(),
        vec![
            "Failed on h.example:9",
            "Failed on h.example:10",
            "Failed on h.example:11",
            "Finished",
        ]
    );
}

/// Running the same sweep against the same unreachable target twice yields
/// the same failure line both times.
#[tokio::test]
async fn repeated_sweep_reports_identical_failures() -> anyhow::Result<()> {
    let port = closed_loopback_port().await?;
    let cfg = config(&[&port.to_string()], true);
    let expected = vec![format!("Failed on 127.0.0.1:{port}"), "Finished".to_string()];

    for _ in 0..2 {
        let reporter = Arc::new(CollectingReporter::default());
        scanner::perform_sweep(
            vec!["127.0.0.1".to_string()],
            cfg.clone(),
            Arc::new(TcpProber::new(cfg.connect_timeout)),
            reporter.clone(),
        )
        .await;
        assert_eq!(reporter.events(), expected);
    }

    Ok(())
}

/// One listening and one closed port on the same host: the open one is
/// reported as succeeded, the closed one as failed, in port-list order.
#[tokio::test]
async fn open_and_closed_ports_mix() -> anyhow::Result<()> {
    let (_listener, open_port) = loopback_listener().await?;
    let closed_port = closed_loopback_port().await?;

    let cfg = config(&[&open_port.to_string(), &closed_port.to_string()], true);
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        vec!["127.0.0.1".to_string()],
        cfg.clone(),
        Arc::new(TcpProber::new(cfg.connect_timeout)),
        reporter.clone(),
    )
    .await;

    assert_eq!(
        reporter.events(),
        vec![
            format!("Succeeded on 127.0.0.1:{open_port}"),
            format!("Failed on 127.0.0.1:{closed_port}"),
            "Finished".to_string(),
        ]
    );

    Ok(())
}

/// With failure reporting off, failed attempts leave no trace.
#[tokio::test]
async fn failures_are_suppressed_by_default() -> anyhow::Result<()> {
    let (_listener, open_port) = loopback_listener().await?;
    let closed_port = closed_loopback_port().await?;

    let cfg = config(&[&open_port.to_string(), &closed_port.to_string()], false);
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        vec!["127.0.0.1".to_string()],
        cfg.clone(),
        Arc::new(TcpProber::new(cfg.connect_timeout)),
        reporter.clone(),
    )
    .await;

    assert_eq!(
        reporter.events(),
        vec![
            format!("Succeeded on 127.0.0.1:{open_port}"),
            "Finished".to_string(),
        ]
    );

    Ok(())
}

/// A host list far beyond the admission capacity drains completely: no
/// deadlock, no output besides the completion marker.
#[tokio::test(flavor = "multi_thread")]
async fn large_unreachable_sweep_completes() {
    let hosts: Vec<String> = (0..500).map(|i| format!("host-{i}.example")).collect();
    let reporter = Arc::new(CollectingReporter::default());

    scanner::perform_sweep(
        hosts,
        config(&["443"], false),
        Arc::new(StaticProber(false)),
        reporter.clone(),
    )
    .await;

    assert_eq!(reporter.events(), vec!["Finished"]);
}
