//! Session handlers

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use super::ApiResult;
use crate::state::AppState;

pub async fn login(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let access_token = state.client().login().await?;
    Ok(Json(json!({ "access_token": access_token })))
}

pub async fn logout(State(state): State<AppState>) -> Json<Value> {
    state.client().logout().await;
    Json(json!({ "status": "logged_out" }))
}

pub async fn whoami(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.client().userinfo().await?))
}
