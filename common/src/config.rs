use std::time::Duration;

pub const DEFAULT_PORTS: &str = "443";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
pub const MAX_IN_FLIGHT: usize = 200;

/// Settings for one reachability sweep.
///
/// Built once by the caller and shared read-only by every worker.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Port tokens to try for every host, in order.
    pub ports: Vec<String>,
    /// Print a line for failed attempts as well.
    pub show_failures: bool,
    /// How long a single connection attempt may take.
    pub connect_timeout: Duration,
    /// Upper bound on hosts being probed at the same time.
    ///
    /// Fixed once the sweep starts.
    pub max_in_flight: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ports: vec![DEFAULT_PORTS.to_string()],
            show_failures: false,
            connect_timeout: CONNECT_TIMEOUT,
            max_in_flight: MAX_IN_FLIGHT,
        }
    }
}
