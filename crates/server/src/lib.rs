//! HTTP surface of the biotope edge services.
//!
//! One process mounts one service, chosen by `[server] service` or
//! `--service`: the daily message service (`GET /daily-message`) or the
//! object cache proxy (`GET /<objectName>`).

pub mod api;
pub mod blob_factory;
pub mod config;
pub mod error;
pub mod generator_factory;
pub mod state_factory;
pub mod telemetry;
