pub mod daily_message;
pub mod objects;

use std::sync::Arc;

use axum::Router;
use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use biotope_core::{Clock, SystemClock, parse_timezone};
use biotope_daily::DailyMessageService;
use biotope_objects::{MemoryResponseCache, ObjectCacheProxy};

use crate::blob_factory::create_blob_store;
use crate::config::{EdgeConfig, ServiceKind};
use crate::error::ServerError;
use crate::generator_factory::create_generator;
use crate::state_factory::create_state;

/// Value of `Access-Control-Allow-Methods` on every response.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Preflight cache lifetime in seconds.
pub const CORS_MAX_AGE_SECONDS: u64 = 86_400;

/// State shared by the daily message handlers.
#[derive(Clone)]
pub struct DailyState {
    pub service: Arc<DailyMessageService>,
    pub clock: Arc<dyn Clock>,
}

/// State shared by the object proxy handlers.
#[derive(Clone)]
pub struct ObjectState {
    pub proxy: Arc<ObjectCacheProxy>,
    pub clock: Arc<dyn Clock>,
}

/// Router for the daily message service.
pub fn daily_router(state: DailyState) -> Router {
    let router = Router::new()
        .route("/daily-message", get(daily_message::get_daily_message))
        .with_state(state);
    with_edge_layers(router)
}

/// Router for the object cache proxy.
pub fn object_router(state: ObjectState) -> Router {
    let router = Router::new()
        .route("/", get(objects::welcome))
        .route("/{*object_name}", get(objects::get_object))
        .with_state(state);
    with_edge_layers(router)
}

/// Build the router for `service` with backends taken from `config`.
pub fn build_router(
    config: &EdgeConfig,
    service: ServiceKind,
    api_key: Option<String>,
) -> Result<Router, ServerError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match service {
        ServiceKind::DailyMessage => {
            let timezone = parse_timezone(&config.daily_message.timezone)
                .map_err(|e| ServerError::Config(e.to_string()))?;
            let store = create_state(&config.state)?;
            let generator = create_generator(&config.generator, api_key)?;
            let service = DailyMessageService::new(store, generator, timezone);
            Ok(daily_router(DailyState {
                service: Arc::new(service),
                clock,
            }))
        }
        ServiceKind::Objects => {
            let blobs = create_blob_store(&config.blob)?;
            let cache = Arc::new(MemoryResponseCache::new(
                config.object_cache.max_capacity_bytes,
            ));
            let proxy =
                ObjectCacheProxy::new(blobs, cache, config.object_cache.namespace_host.clone());
            Ok(object_router(ObjectState {
                proxy: Arc::new(proxy),
                clock,
            }))
        }
    }
}

/// CORS and request tracing shared by both services.
///
/// `CorsLayer` answers every `OPTIONS` request itself (200, empty body) and
/// only sends the allowed methods on those; the header layer adds them to
/// every other response too.
fn with_edge_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECONDS));

    router
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
}
