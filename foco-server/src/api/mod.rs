//! API Routes
//!
//! REST endpoints mapping 1:1 onto `FocoClient` operations.

mod auth;
mod bulk;
mod composite;
mod config;
mod error;
mod extract;
mod sobjects;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;

use error::{ApiError, ApiResult};
use extract::{ApiJson, ApiQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        // Service
        .route("/health", get(health))
        .route("/info", get(config::get_info))
        // Auth
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/whoami", get(auth::whoami))
        // Metadata & query
        .route("/sobjects", get(sobjects::list_sobjects))
        .route("/describe/:object_name", get(sobjects::describe))
        .route("/query", get(sobjects::query))
        // Records
        .route("/sobjects/:object_name", post(sobjects::create))
        .route("/sobjects/:object_name/:record_id", patch(sobjects::update))
        .route("/upsert/:object_name/:field/:value", patch(sobjects::upsert))
        // Composite
        .route("/composite/sobjects", post(composite::composite_sobjects))
        .route("/composite", post(composite::composite))
        // Bulk API 2.0 ingest
        .route("/bulk/job", post(bulk::create_job))
        .route("/bulk/job/:job_id", patch(bulk::close_job).get(bulk::job_status))
        .route("/bulk/job/:job_id/batches", put(bulk::upload_batch))
        .route("/bulk/job/:job_id/successfulResults", get(bulk::successful_results))
        .route("/bulk/job/:job_id/failedResults", get(bulk::failed_results))
        .route("/bulk/job/:job_id/unprocessedrecords", get(bulk::unprocessed_records))
        // Config
        .route("/config", get(config::get_config))
        .route("/config", post(config::set_config))
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
