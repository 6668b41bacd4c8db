//! Configuration handlers

use axum::{extract::State, response::Json};
use serde::Serialize;
use serde_json::{json, Value};

use foco_types::{ConfigPatch, MaskedConfig};

use super::ApiJson;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InfoResponse {
    pub version: String,
    pub api_version: String,
    pub base_url: String,
    pub docs_url: String,
}

pub async fn get_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = state.client().config().await;
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_version: config.api_version,
        base_url: config.base_url,
        docs_url: state.docs_url().to_string(),
    })
}

pub async fn get_config(State(state): State<AppState>) -> Json<MaskedConfig> {
    Json(state.client().masked_config().await)
}

pub async fn set_config(
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<ConfigPatch>,
) -> Json<Value> {
    state.client().apply_patch(patch).await;
    Json(json!({ "status": "ok" }))
}
