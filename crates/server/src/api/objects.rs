use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use biotope_objects::{CachedResponse, ObjectLookup, WELCOME_MESSAGE};

use crate::error::ServerError;

use super::ObjectState;

pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// `GET /`
pub async fn welcome() -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, TEXT_PLAIN)], WELCOME_MESSAGE).into_response()
}

/// `GET /{*object_name}`
///
/// The extracted name is already percent-decoded and has no leading slash.
#[tracing::instrument(name = "object", skip(state), fields(cache))]
pub async fn get_object(
    State(state): State<ObjectState>,
    Path(object_name): Path<String>,
) -> Result<Response, ServerError> {
    let lookup = state.proxy.fetch(&object_name, state.clock.now()).await?;

    Ok(match lookup {
        ObjectLookup::Welcome => welcome().await,
        ObjectLookup::Cached(response) => object_response(response, "HIT"),
        ObjectLookup::Fresh(response) => object_response(response, "MISS"),
        ObjectLookup::NotFound(name) => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, TEXT_PLAIN)],
            format!("Object Not Found: {name}"),
        )
            .into_response(),
    })
}

fn object_response(response: CachedResponse, cache: &'static str) -> Response {
    tracing::Span::current().record("cache", cache);
    let headers = [
        (CONTENT_TYPE, response.content_type),
        (CACHE_CONTROL, response.cache_control),
        (X_CACHE, cache.to_owned()),
    ];
    (StatusCode::OK, headers, response.body).into_response()
}
