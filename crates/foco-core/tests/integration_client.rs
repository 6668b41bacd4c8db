#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

use bytes::Bytes;
use foco_core::http::build_http_client;
use foco_core::FocoClient;
use foco_types::{BulkJobRequest, BulkResultKind, ConnectionConfig, FocoError, GrantType};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{
    body_bytes, body_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/services/oauth2/token";

fn config_for(server: &MockServer) -> ConnectionConfig {
    ConnectionConfig {
        base_url: server.uri(),
        login_url: format!("{}{}", server.uri(), TOKEN_PATH),
        api_version: "62.0".to_string(),
        client_id: "cid".to_string(),
        client_secret: "csecret".to_string(),
        grant_type: GrantType::ClientCredentials,
        ..Default::default()
    }
}

fn client_with(config: ConnectionConfig) -> FocoClient {
    FocoClient::new(build_http_client(None, 5).expect("http client"), config)
}

fn token_body(instance_url: Option<&str>) -> serde_json::Value {
    match instance_url {
        Some(url) => json!({"access_token": "tok-123", "instance_url": url, "token_type": "Bearer"}),
        None => json!({"access_token": "tok-123", "token_type": "Bearer"}),
    }
}

async fn mount_form_login(server: &MockServer, instance_url: Option<&str>) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(instance_url)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_falls_back_through_every_strategy() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(415).set_body_string("form bodies not accepted"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(405))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .and(query_param("grant_type", "client_credentials"))
        .and(query_param("client_id", "cid"))
        .and(query_param("client_secret", "csecret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body(Some(" `https://instance.example/` "))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let token = client.login().await.expect("third strategy should succeed");

    assert_eq!(token, "tok-123");
    let session = client.session().await;
    assert_eq!(session.access_token.as_deref(), Some("tok-123"));
    assert_eq!(session.instance_url.as_deref(), Some("https://instance.example"));
}

#[tokio::test]
async fn test_login_short_circuits_on_first_success() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    client.login().await.expect("form login should succeed");

    assert_eq!(client.session().await.instance_url.as_deref(), Some(server.uri().as_str()));
}

#[tokio::test]
async fn test_login_reports_final_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("unsupported"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let err = client.login().await.expect_err("every strategy rejected");

    assert_eq!(
        err,
        FocoError::UpstreamAuth { status: 401, body: r#"{"error":"invalid_client"}"#.to_string() }
    );
    assert!(!client.session().await.is_authenticated());
}

#[tokio::test]
async fn test_login_recovers_from_stalled_earlier_stages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body(None))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server)).with_login_timeout(Duration::from_millis(300));
    let token = client.login().await.expect("GET stage should succeed after two timeouts");

    assert_eq!(token, "tok-123");
    assert_eq!(client.session().await.instance_url.as_deref(), Some(server.uri().as_str()));
}

#[tokio::test]
async fn test_login_stalled_form_stage_falls_through_to_post_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body(None))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server)).with_login_timeout(Duration::from_millis(300));
    client.login().await.expect("POST query stage should succeed");
    assert!(client.session().await.is_authenticated());
}

#[tokio::test]
async fn test_login_final_transport_failure_propagates() {
    let client = client_with(ConnectionConfig {
        login_url: "http://127.0.0.1:9/services/oauth2/token".to_string(),
        ..Default::default()
    });

    let err = client.login().await.expect_err("nothing listens on port 9");
    assert!(matches!(err, FocoError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_password_grant_sends_concatenated_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=user%40foco"))
        .and(body_string_contains("password=s3cretTOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(ConnectionConfig {
        grant_type: GrantType::Password,
        username: "user@foco".to_string(),
        password: "s3cret".to_string(),
        security_token: "TOKEN".to_string(),
        ..config_for(&server)
    });

    assert_eq!(client.login().await.expect("login"), "tok-123");
}

#[tokio::test]
async fn test_missing_access_token_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issued_at": "1"})))
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    assert_eq!(client.login().await.expect("login"), "");
    assert!(!client.session().await.is_authenticated());
}

#[tokio::test]
async fn test_describe_logs_in_once_then_calls_describe() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Account/describe"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Account"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let first = client.describe("Account").await.expect("describe");
    let second = client.describe("Account").await.expect("describe with cached token");

    assert_eq!(first, json!({"name": "Account"}));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_reads_use_base_url_and_writes_use_instance_url() {
    let base = MockServer::start().await;
    let instance = MockServer::start().await;
    mount_form_login(&base, Some(&instance.uri())).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", "SELECT Id FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalSize": 0, "records": []})))
        .expect(1)
        .mount(&base)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/sobjects/Account"))
        .and(body_json(json!({"Name": "Acme"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "001xx", "success": true, "errors": []})),
        )
        .expect(1)
        .mount(&instance)
        .await;

    let client = client_with(config_for(&base));
    let result = client.query("SELECT Id FROM Account").await.expect("query");
    assert_eq!(result["totalSize"], 0);

    let created = client.create("Account", &json!({"Name": "Acme"})).await.expect("create");
    assert_eq!(created["id"], "001xx");
}

#[tokio::test]
async fn test_write_errors_keep_json_structure() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    let sf_error = json!([{"message": "Required fields are missing: [Name]", "errorCode": "REQUIRED_FIELD_MISSING"}]);
    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/sobjects/Account"))
        .respond_with(ResponseTemplate::new(400).set_body_json(sf_error.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/composite"))
        .respond_with(ResponseTemplate::new(502).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));

    let err = client.create("Account", &json!({})).await.expect_err("400");
    assert_eq!(err, FocoError::UpstreamApi { status: 400, body: sf_error });

    let err = client.composite(&json!({"compositeRequest": []})).await.expect_err("502");
    assert_eq!(err, FocoError::upstream_text(502, "gateway exploded"));
}

#[tokio::test]
async fn test_read_errors_are_raw_text() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Nope/describe"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"[{"errorCode":"NOT_FOUND"}]"#),
        )
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let err = client.describe("Nope").await.expect_err("404");

    assert_eq!(err, FocoError::upstream_text(404, r#"[{"errorCode":"NOT_FOUND"}]"#));
}

#[tokio::test]
async fn test_expired_token_is_not_refreshed() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(method("GET"))
        .and(path("/services/oauth2/userinfo"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Session expired or invalid"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    for _ in 0..2 {
        let err = client.userinfo().await.expect_err("401 surfaces");
        assert_eq!(err.http_status_code(), 401);
    }
}

#[tokio::test]
async fn test_update_and_upsert_outcomes() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/sobjects/Account/001xx"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/sobjects/Account/Ext__c/NEW-1"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "001yy", "created": true})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/sobjects/Account/Ext__c/OLD-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let payload = json!({"Name": "Acme"});

    let updated = client.update("Account", "001xx", &payload).await.expect("update");
    assert!(updated.success);
    assert_eq!(updated.status, 204);

    let created = client.upsert("Account", "Ext__c", "NEW-1", &payload).await.expect("upsert");
    assert!(created.created);
    assert_eq!(created.body, Some(json!({"id": "001yy", "created": true})));

    let existing = client.upsert("Account", "Ext__c", "OLD-1", &payload).await.expect("upsert");
    assert!(!existing.created);
    assert_eq!(existing.status, 204);
    assert_eq!(existing.body, None);
}

#[tokio::test]
async fn test_bulk_ingest_lifecycle() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    let csv = "Name,Ext__c\nAcme,1\nGlobex,2\n";

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/jobs/ingest"))
        .and(body_json(json!({
            "object": "Account",
            "operation": "insert",
            "contentType": "CSV",
            "lineEnding": "LF"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "750xx", "state": "Open"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/services/data/v62.0/jobs/ingest/750xx/batches"))
        .and(header("content-type", "text/csv"))
        .and(body_bytes(csv.as_bytes().to_vec()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/services/data/v62.0/jobs/ingest/750xx"))
        .and(body_json(json!({"state": "UploadComplete"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "750xx", "state": "UploadComplete"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/jobs/ingest/750xx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "750xx", "state": "JobComplete"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/jobs/ingest/750xx/failedResults"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("\"sf__Id\",\"sf__Error\",Name\n\"\",\"REQUIRED\",\n"),
        )
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let job: BulkJobRequest =
        serde_json::from_value(json!({"object": "Account", "operation": "insert"})).expect("job");

    let created = client.bulk_create_job(&job).await.expect("create job");
    assert_eq!(created["id"], "750xx");

    let uploaded =
        client.bulk_upload_batch("750xx", Bytes::from_static(csv.as_bytes())).await.expect("upload");
    assert_eq!(uploaded, json!({"status": 201}));

    let closed = client.bulk_close_job("750xx", "UploadComplete").await.expect("close");
    assert_eq!(closed["state"], "UploadComplete");

    let status = client.bulk_job_status("750xx").await.expect("status");
    assert_eq!(status["state"], "JobComplete");

    let failed = client.bulk_results("750xx", BulkResultKind::Failed).await.expect("results");
    assert_eq!(failed, "\"sf__Id\",\"sf__Error\",Name\n\"\",\"REQUIRED\",\n");
}

#[tokio::test]
async fn test_bulk_errors_are_raw_text() {
    let server = MockServer::start().await;
    mount_form_login(&server, None).await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/jobs/ingest/bad"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"[{"errorCode":"NOT_FOUND","message":"job not found"}]"#),
        )
        .mount(&server)
        .await;

    let client = client_with(config_for(&server));
    let err = client.bulk_job_status("bad").await.expect_err("404");

    assert_eq!(
        err,
        FocoError::upstream_text(404, r#"[{"errorCode":"NOT_FOUND","message":"job not found"}]"#)
    );
}
