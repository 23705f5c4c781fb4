//! Log and span output.
//!
//! Logs always go to stdout, filtered by `RUST_LOG` (default `info`). With
//! `[telemetry] enabled = true` request spans are also exported over OTLP.

use std::error::Error;

use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{OtlpProtocol, ServiceKind, TelemetryConfig};

type BoxError = Box<dyn Error + Send + Sync>;

/// Keeps the span exporter alive; call [`TelemetryGuard::shutdown`] to flush.
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn shutdown(mut self) {
        let Some(provider) = self.provider.take() else {
            return;
        };
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "span exporter shutdown failed");
        }
    }
}

/// Install the global subscriber for `service`.
///
/// An exporter that cannot be built is reported and skipped; the server still
/// starts with stdout logging.
pub fn init(config: &TelemetryConfig, service: ServiceKind) -> TelemetryGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let built = config
        .enabled
        .then(|| build_tracer_provider(config, service));
    let (provider, export_error) = match built {
        Some(Ok(provider)) => (Some(provider), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let otel_layer = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer("biotope-server"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(otel_layer)
        .init();

    if let Some(e) = export_error {
        tracing::error!(error = %e, endpoint = %config.endpoint, "span export disabled");
    } else if provider.is_some() {
        tracing::info!(
            endpoint = %config.endpoint,
            protocol = %config.protocol,
            sample_ratio = config.clamped_sample_ratio(),
            "exporting spans"
        );
    }

    TelemetryGuard { provider }
}

fn build_tracer_provider(
    config: &TelemetryConfig,
    service: ServiceKind,
) -> Result<SdkTracerProvider, BoxError> {
    let exporter = match config.protocol {
        OtlpProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&config.endpoint)
            .build()?,
        OtlpProtocol::Http => SpanExporter::builder()
            .with_http()
            .with_endpoint(&config.endpoint)
            .build()?,
    };

    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", TelemetryConfig::service_name(service)),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ])
        .build();

    let sampler = Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
        config.clamped_sample_ratio(),
    )));

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(sampler)
        .with_resource(resource)
        .build())
}
