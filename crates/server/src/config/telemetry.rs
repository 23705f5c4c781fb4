use std::fmt;

use serde::Deserialize;

use super::ServiceKind;

/// OTLP transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtlpProtocol {
    #[default]
    Grpc,
    Http,
}

impl fmt::Display for OtlpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grpc => "grpc",
            Self::Http => "http",
        })
    }
}

/// Span export settings. Logs go to stdout whether or not this is enabled.
///
/// ```toml
/// [telemetry]
/// enabled = true
/// endpoint = "http://collector:4317"
/// protocol = "grpc"
/// sample_ratio = 0.25
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub protocol: OtlpProtocol,
    /// Fraction of root requests traced; clamped to `0.0..=1.0`.
    pub sample_ratio: f64,
}

impl TelemetryConfig {
    /// `service.name` reported for spans of `service`.
    pub fn service_name(service: ServiceKind) -> String {
        format!("biotope-{service}")
    }

    pub fn clamped_sample_ratio(&self) -> f64 {
        if self.sample_ratio.is_nan() {
            return 1.0;
        }
        self.sample_ratio.clamp(0.0, 1.0)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:4317".to_owned(),
            protocol: OtlpProtocol::Grpc,
            sample_ratio: 1.0,
        }
    }
}
