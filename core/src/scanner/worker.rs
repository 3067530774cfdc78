use std::sync::Arc;

use probr_common::config::ScanConfig;
use probr_common::network::endpoint::Endpoint;
use tokio::sync::Semaphore;
use tracing::trace;

use super::{ProbeReporter, Prober};

/// Probes every configured port of a single host.
///
/// Holds exactly one admission permit for the whole port loop; the permit
/// guard releases it on every exit path. Ports are tried in list order, one
/// at a time, and a failed attempt never cuts the loop short.
pub(super) async fn scan_host(
    host: String,
    config: Arc<ScanConfig>,
    admission: Arc<Semaphore>,
    prober: Arc<dyn Prober>,
    reporter: Arc<dyn ProbeReporter>,
) {
    // Acquisition only fails once the semaphore is closed, which nothing
    // does; bail out rather than probe unadmitted.
    let Ok(_permit) = admission.acquire_owned().await else {
        return;
    };

    for port in &config.ports {
        let endpoint = Endpoint::new(host.as_str(), port.as_str());
        if prober.probe(&endpoint).await {
            trace!(%endpoint, "attempt succeeded");
            reporter.succeeded(&endpoint);
        } else {
            trace!(%endpoint, "attempt failed");
            if config.show_failures {
                reporter.failed(&endpoint);
            }
        }
    }
}
