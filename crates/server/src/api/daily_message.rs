use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;

use super::DailyState;

pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");
pub const X_MESSAGE_SOURCE: HeaderName = HeaderName::from_static("x-message-source");

/// `GET /daily-message`
#[tracing::instrument(name = "daily_message", skip_all, fields(cache, source))]
pub async fn get_daily_message(State(state): State<DailyState>) -> Result<Response, ServerError> {
    let message = state.service.today(state.clock.now()).await?;
    let span = tracing::Span::current();
    span.record("cache", message.cache.as_header());
    span.record("source", message.record.source.as_str());

    let headers = [
        (CONTENT_TYPE, "application/json".to_owned()),
        (CACHE_CONTROL, message.record.cache_control()),
        (X_CACHE, message.cache.as_header().to_owned()),
        (X_MESSAGE_SOURCE, message.record.source.as_str().to_owned()),
    ];
    Ok((StatusCode::OK, headers, message.body).into_response())
}
