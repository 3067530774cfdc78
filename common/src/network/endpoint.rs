use std::fmt;

/// One (host, port) pair to be probed.
///
/// The port is kept as the raw token taken from the configuration. It is
/// never validated numerically; a token that does not name a real port
/// simply fails to connect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: String,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }
}

impl fmt::Display for Endpoint {
    /// Renders `host:port`, bracketing hosts that themselves contain a
    /// colon so IPv6 literals stay usable as a connection address.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
