use std::fmt;

use serde::Deserialize;

/// Which edge service this process mounts.
///
/// The two services are deployed separately; mounting both on one listener
/// would let `/daily-message` shadow an object of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    /// `GET /daily-message`.
    #[default]
    DailyMessage,
    /// `GET /<objectName>`.
    Objects,
}

impl ServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyMessage => "daily-message",
            Self::Objects => "objects",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Service to mount.
    #[serde(default)]
    pub service: ServiceKind,
    /// Graceful shutdown timeout in seconds.
    ///
    /// Maximum time to wait for in-flight requests after a shutdown signal.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service: ServiceKind::default(),
            shutdown_timeout_seconds: default_shutdown_timeout(),
        }
    }
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8080
}
