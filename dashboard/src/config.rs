//! Command-line configuration.

use std::net::IpAddr;

use clap::Parser;
use log::LevelFilter;
use relay::ServerConfig;

use crate::apps::AppKind;

/// Arguments of the `dashboard` binary.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Serve a Bootstrap dashboard over HTTP")]
pub struct Cli {
    /// Dashboard to serve
    #[arg(long, value_enum, default_value_t = AppKind::Sidebar)]
    pub app: AppKind,

    /// Address to listen on
    #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (sidebar: 8887, datatarget: 8050)
    #[arg(short, long, env = "DASHBOARD_PORT")]
    pub port: Option<u16>,

    /// Send error details to the browser (default: on for sidebar)
    #[arg(long)]
    pub debug: Option<bool>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Browser sessions kept in memory
    #[arg(long, default_value_t = 1024)]
    pub max_sessions: usize,
}

impl Cli {
    /// Host configuration, falling back to the chosen app's port and debug defaults.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new()
            .with_host(self.host)
            .with_port(self.port.unwrap_or_else(|| self.app.default_port()))
            .with_debug(self.debug.unwrap_or_else(|| self.app.default_debug()))
            .with_max_sessions(self.max_sessions)
    }
}
