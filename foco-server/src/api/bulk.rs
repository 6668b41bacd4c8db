//! Bulk API 2.0 ingest handlers

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use serde_json::Value;

use foco_types::{BulkCloseRequest, BulkJobRequest, BulkResultKind, FocoError};

use super::{ApiJson, ApiResult};
use crate::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub async fn create_job(
    State(state): State<AppState>,
    ApiJson(job): ApiJson<BulkJobRequest>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().bulk_create_job(&job).await?))
}

pub async fn upload_batch(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let csv = extract_csv(&headers, body)?;
    Ok(Json(state.client().bulk_upload_batch(&job_id, csv).await?))
}

/// Raw CSV passes through untouched; anything else must be `{"csv": "<text>"}`.
pub(crate) fn extract_csv(headers: &HeaderMap, body: Bytes) -> Result<Bytes, FocoError> {
    let is_csv = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/csv"));
    if is_csv {
        return Ok(body);
    }

    let parsed: Value = serde_json::from_slice(&body)
        .map_err(|e| FocoError::client_request(format!("Invalid JSON body: {}", e)))?;
    let Value::Object(mut fields) = parsed else {
        return Err(FocoError::client_request("Expected a JSON object with a 'csv' field"));
    };

    match fields.remove("csv") {
        None => Ok(Bytes::new()),
        Some(Value::String(csv)) => Ok(Bytes::from(csv)),
        Some(_) => Err(FocoError::client_request("'csv' must be a string")),
    }
}

pub async fn close_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request = parse_close_request(&headers, &body)?;
    Ok(Json(state.client().bulk_close_job(&job_id, request.target_state()).await?))
}

/// An empty body means "no state given". Anything else must be a JSON
/// `{"state": ...}` object; it is never replaced by the default.
pub(crate) fn parse_close_request(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<BulkCloseRequest, FocoError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BulkCloseRequest::default());
    }

    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
        if !content_type.contains("json") {
            return Err(FocoError::client_request(format!(
                "Expected an application/json body, got '{}'",
                content_type
            )));
        }
    }

    serde_json::from_slice(body)
        .map_err(|e| FocoError::client_request(format!("Invalid bulk job state body: {}", e)))
}

pub async fn job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().bulk_job_status(&job_id).await?))
}

pub async fn successful_results(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    results(&state, &job_id, BulkResultKind::Successful).await
}

pub async fn failed_results(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    results(&state, &job_id, BulkResultKind::Failed).await
}

pub async fn unprocessed_records(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    results(&state, &job_id, BulkResultKind::Unprocessed).await
}

async fn results(
    state: &AppState,
    job_id: &str,
    kind: BulkResultKind,
) -> ApiResult<impl IntoResponse> {
    let csv = state.client().bulk_results(job_id, kind).await?;
    Ok(([(CONTENT_TYPE, CSV_CONTENT_TYPE)], csv))
}
