//! Composite pass-through handlers

use axum::{extract::State, response::Json};
use serde_json::{Map, Value};

use super::{ApiJson, ApiResult};
use crate::state::AppState;

pub async fn composite_sobjects(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().composite_sobjects(&Value::Object(payload)).await?))
}

pub async fn composite(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().composite(&Value::Object(payload)).await?))
}
