//! Test helpers for foco-server unit tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use foco_core::http::build_http_client;
use foco_core::FocoClient;
use foco_types::{ConnectionConfig, GrantType};

use crate::router::build_router;
use crate::state::AppState;

pub const TOKEN_PATH: &str = "/services/oauth2/token";
pub const DATA_PREFIX: &str = "/services/data/v62.0";
pub const TEST_DOCS_URL: &str = "https://docs.example/foco";

/// Create an `AppState` whose client points at `upstream` for both login and data.
pub fn test_app_state(upstream: &MockServer) -> AppState {
    let config = ConnectionConfig {
        base_url: upstream.uri(),
        login_url: format!("{}{}", upstream.uri(), TOKEN_PATH),
        api_version: "62.0".to_string(),
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        grant_type: GrantType::ClientCredentials,
        ..ConnectionConfig::default()
    };
    let http = build_http_client(None, 5).expect("failed to build http client");
    AppState::new(Arc::new(FocoClient::new(http, config)), TEST_DOCS_URL.to_string())
}

/// Full router wrapped in an in-process test server.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).expect("failed to start test server")
}

/// Token endpoint accepting the form-body login, with `instance_url` set to the mock itself.
pub async fn mount_login(upstream: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-abc",
            "instance_url": upstream.uri(),
            "token_type": "Bearer"
        })))
        .mount(upstream)
        .await;
}
