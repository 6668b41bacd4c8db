//! Metadata, query and single-record handlers

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use foco_types::{UpdateOutcome, UpsertOutcome};

use super::{ApiJson, ApiQuery, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SoqlParams {
    pub q: String,
}

pub async fn list_sobjects(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().list_sobjects().await?))
}

pub async fn describe(
    State(state): State<AppState>,
    Path(object_name): Path<String>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().describe(&object_name).await?))
}

pub async fn query(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SoqlParams>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().query(&params.q).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(object_name): Path<String>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Json<Value>> {
    let created = state.client().create(&object_name, &Value::Object(payload)).await?;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path((object_name, record_id)): Path<(String, String)>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Json<UpdateOutcome>> {
    let outcome = state.client().update(&object_name, &record_id, &Value::Object(payload)).await?;
    Ok(Json(outcome))
}

pub async fn upsert(
    State(state): State<AppState>,
    Path((object_name, field, value)): Path<(String, String, String)>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Json<UpsertOutcome>> {
    let outcome = state
        .client()
        .upsert(&object_name, &field, &value, &Value::Object(payload))
        .await?;
    Ok(Json(outcome))
}
