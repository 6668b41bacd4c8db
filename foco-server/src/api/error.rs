//! Adapts `FocoError` to axum responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use foco_types::FocoError;

/// Every failure leaves the gateway as `{"detail": ...}` with the mapped status.
#[derive(Debug)]
pub struct ApiError(pub FocoError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<FocoError> for ApiError {
    fn from(err: FocoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::BAD_GATEWAY);

        if self.0.is_upstream_status() {
            tracing::warn!("FOCO answered {}: {}", status, self.0);
        } else if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self.0);
        } else {
            tracing::warn!("Request failed ({}): {}", status, self.0);
        }

        (status, Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}
