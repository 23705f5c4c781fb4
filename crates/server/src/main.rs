use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Notify;
use tracing::{info, warn};

use biotope_server::config::{API_KEY_ENV, EdgeConfig, ServiceKind};

/// Biotope edge HTTP server.
#[derive(Parser, Debug)]
#[command(
    name = "biotope-server",
    about = "Daily message service and object cache proxy"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "biotope.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,

    /// Override which service to mount.
    #[arg(long, value_enum)]
    service: Option<ServiceKind>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, found) = EdgeConfig::load(Path::new(&cli.config))?;
    let service = cli.service.unwrap_or(config.server.service);

    let telemetry_guard = biotope_server::telemetry::init(&config.telemetry, service);

    if !found {
        info!(path = %cli.config, "config file not found, using defaults");
    }

    let api_key = config
        .generator
        .resolve_api_key(std::env::var(API_KEY_ENV).ok());
    let app = biotope_server::api::build_router(&config, service, api_key)?;

    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, service = %service, "biotope-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM; in-flight requests get
    // at most `shutdown_timeout_seconds` to finish.
    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = Arc::clone(&shutdown);
        async move {
            shutdown_signal().await;
            shutdown.notify_one();
        }
    });
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_seconds);
    let drain_deadline = async {
        shutdown.notified().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        () = drain_deadline => {
            warn!(
                timeout_secs = config.server.shutdown_timeout_seconds,
                "shutdown timeout exceeded, dropping in-flight requests"
            );
        }
    }

    telemetry_guard.shutdown();

    info!("biotope-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
