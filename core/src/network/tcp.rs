use std::time::Duration;

use async_trait::async_trait;
use probr_common::network::endpoint::Endpoint;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::scanner::Prober;

/// Connects over plain TCP with a per-attempt timeout.
pub struct TcpProber {
    connect_timeout: Duration,
}

impl TcpProber {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, endpoint: &Endpoint) -> bool {
        // Name resolution happens inside connect, so a host that does not
        // resolve counts as a failed attempt like any refused port.
        let addr = endpoint.to_string();

        match timeout(self.connect_timeout, TcpStream::connect(addr.as_str())).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(_)) | Err(_) => false,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
