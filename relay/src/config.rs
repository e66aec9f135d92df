//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the HTTP host.
///
/// # Example
///
/// ```
/// use relay::ServerConfig;
///
/// let config = ServerConfig::default()
///     .with_port(8887)
///     .with_debug(true);
/// assert_eq!(config.addr().port(), 8887);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    ///
    /// Default: 127.0.0.1
    pub host: IpAddr,

    /// Port to listen on. Zero picks a free port.
    ///
    /// Default: 8050
    pub port: u16,

    /// Verbose errors: failure details are sent to the browser.
    ///
    /// Default: off
    pub debug: bool,

    /// Sessions kept before the least recently used one is dropped.
    ///
    /// Default: 1024
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8050,
            debug: false,
            max_sessions: 1024,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the session limit. Values below one are raised to one.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
