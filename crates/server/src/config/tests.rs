use super::*;

#[test]
fn empty_document_uses_defaults() {
    let config = EdgeConfig::from_toml("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.service, ServiceKind::DailyMessage);
    assert_eq!(config.server.shutdown_timeout_seconds, 30);
    assert_eq!(config.state.backend, "memory");
    assert!(config.state.url.is_none());
    assert_eq!(config.daily_message.timezone, "Asia/Tokyo");
    assert_eq!(config.blob.backend, "memory");
    assert_eq!(config.object_cache.namespace_host, "object-cache.internal");
    assert_eq!(config.object_cache.max_capacity_bytes, 256 * 1024 * 1024);
}

#[test]
fn generator_defaults() {
    let config: GeneratorServerConfig = toml::from_str("").unwrap();
    assert_eq!(
        config.endpoint,
        "https://generativelanguage.googleapis.com/v1beta/models"
    );
    assert_eq!(config.model, "gemini-2.0-flash");
    assert!(config.api_key.is_empty());
    assert_eq!(config.timeout_seconds, 30);
    assert!((config.temperature - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.max_output_tokens, 512);
}

#[test]
fn full_document() {
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        service = "objects"

        [state]
        backend = "redis"
        url = "redis://cache:6379"
        prefix = "aquarium"

        [generator]
        model = "gemini-1.5-flash"
        timeout_seconds = 10

        [daily_message]
        timezone = "UTC"

        [blob]
        backend = "fs"
        root = "/srv/objects"

        [object_cache]
        namespace_host = "assets.example"
        max_capacity_bytes = 1048576
    "#;

    let config = EdgeConfig::from_toml(toml).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.service, ServiceKind::Objects);
    assert_eq!(config.state.backend, "redis");
    assert_eq!(config.state.url.as_deref(), Some("redis://cache:6379"));
    assert_eq!(config.state.prefix.as_deref(), Some("aquarium"));
    assert_eq!(config.generator.model, "gemini-1.5-flash");
    assert_eq!(config.generator.timeout_seconds, 10);
    assert_eq!(config.daily_message.timezone, "UTC");
    assert_eq!(config.blob.backend, "fs");
    assert_eq!(config.blob.root.as_deref(), Some("/srv/objects"));
    assert_eq!(config.object_cache.namespace_host, "assets.example");
    assert_eq!(config.object_cache.max_capacity_bytes, 1_048_576);
}

#[test]
fn unknown_service_is_rejected() {
    let err = EdgeConfig::from_toml("[server]\nservice = \"both\"").unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn api_key_resolution() {
    let mut config = GeneratorServerConfig::default();
    assert_eq!(config.resolve_api_key(None), None);
    assert_eq!(config.resolve_api_key(Some(String::new())), None);
    assert_eq!(
        config.resolve_api_key(Some("from-env".into())).as_deref(),
        Some("from-env")
    );

    config.api_key = "from-file".into();
    assert_eq!(config.resolve_api_key(None).as_deref(), Some("from-file"));
    assert_eq!(
        config.resolve_api_key(Some("  ".into())).as_deref(),
        Some("from-file")
    );
    assert_eq!(
        config.resolve_api_key(Some("from-env".into())).as_deref(),
        Some("from-env")
    );
}

#[test]
fn missing_file_yields_defaults() {
    let (config, found) = EdgeConfig::load(Path::new("/nonexistent/biotope.toml")).unwrap();
    assert!(!found);
    assert_eq!(config.server.port, 8080);
}

#[test]
fn service_kind_names() {
    assert_eq!(ServiceKind::DailyMessage.to_string(), "daily-message");
    assert_eq!(ServiceKind::Objects.as_str(), "objects");
}

#[test]
fn telemetry_defaults() {
    let config: TelemetryConfig = toml::from_str("").unwrap();
    assert!(!config.enabled);
    assert_eq!(config.endpoint, "http://localhost:4317");
    assert_eq!(config.protocol, OtlpProtocol::Grpc);
    assert!((config.clamped_sample_ratio() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn telemetry_section() {
    let toml = r#"
        [telemetry]
        enabled = true
        endpoint = "http://collector:4318"
        protocol = "http"
        sample_ratio = 0.5
    "#;

    let config = EdgeConfig::from_toml(toml).unwrap();
    assert!(config.telemetry.enabled);
    assert_eq!(config.telemetry.endpoint, "http://collector:4318");
    assert_eq!(config.telemetry.protocol, OtlpProtocol::Http);
    assert!((config.telemetry.clamped_sample_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn telemetry_rejects_unknown_protocol() {
    let err = EdgeConfig::from_toml("[telemetry]\nprotocol = \"udp\"").unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn sample_ratio_is_clamped() {
    let mut config = TelemetryConfig {
        sample_ratio: 4.0,
        ..TelemetryConfig::default()
    };
    assert!((config.clamped_sample_ratio() - 1.0).abs() < f64::EPSILON);
    config.sample_ratio = -1.0;
    assert!(config.clamped_sample_ratio().abs() < f64::EPSILON);
}

#[test]
fn service_name_follows_mounted_service() {
    assert_eq!(
        TelemetryConfig::service_name(ServiceKind::DailyMessage),
        "biotope-daily-message"
    );
    assert_eq!(TelemetryConfig::service_name(ServiceKind::Objects), "biotope-objects");
}
