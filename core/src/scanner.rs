//! The central **abstraction** for reachability sweeps.
//!
//! This module defines the seams a sweep is assembled from: the [`Prober`]
//! that performs a single connection attempt and the [`ProbeReporter`] that
//! consumes attempt outcomes. It also hosts the coordinator,
//! [`perform_sweep`], which fans one worker out per host and joins them all
//! before the completion marker is reported.
//!
//! **Architectural Note:**
//! Callers should depend on these traits rather than on the concrete
//! implementations, allowing a sweep to be driven against fakes in tests and
//! against the real network in the binary.

use std::sync::Arc;

use async_trait::async_trait;
use probr_common::config::ScanConfig;
use probr_common::network::endpoint::Endpoint;
use tokio::sync::Semaphore;
use tracing::{debug, error};

mod worker;

/// Performs one connection attempt against a single endpoint.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `true` when the endpoint accepted a connection within the
    /// configured timeout.
    async fn probe(&self, endpoint: &Endpoint) -> bool;
}

/// Consumes attempt outcomes and the end-of-sweep marker.
pub trait ProbeReporter: Send + Sync {
    fn succeeded(&self, endpoint: &Endpoint);
    fn failed(&self, endpoint: &Endpoint);
    fn finished(&self);
}

/// Executes a full reachability sweep against the given hosts.
///
/// One worker is spawned per host. Admission is bounded by
/// `config.max_in_flight` permits, so at most that many workers are inside
/// their port loop at any instant; the rest block until a slot frees up.
/// Returns once every worker has finished, after reporting `finished`
/// exactly once.
pub async fn perform_sweep(
    hosts: Vec<String>,
    config: ScanConfig,
    prober: Arc<dyn Prober>,
    reporter: Arc<dyn ProbeReporter>,
) {
    let config = Arc::new(config);
    let admission = Arc::new(Semaphore::new(config.max_in_flight));

    debug!(
        hosts = hosts.len(),
        ports = config.ports.len(),
        max_in_flight = config.max_in_flight,
        "starting sweep"
    );

    let mut handles = Vec::with_capacity(hosts.len());
    for host in hosts {
        handles.push(tokio::spawn(worker::scan_host(
            host,
            config.clone(),
            admission.clone(),
            prober.clone(),
            reporter.clone(),
        )));
    }

    for handle in handles {
        if let Err(e) = handle.await {
            error!("worker failed to complete: {}", e);
        }
    }

    debug!("sweep complete");
    reporter.finished();
}
