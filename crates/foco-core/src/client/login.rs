//! Token acquisition with delivery fallback.
//!
//! Some FOCO gateways reject form-encoded token requests, so the same
//! fields are offered in up to three shapes, in order, until one is accepted.

use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use foco_types::models::config::normalize_url;
use foco_types::{ConnectionConfig, FocoError, GrantType, Result};

use super::response::{json_body, transport};
use super::FocoClient;

/// One way of delivering the token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStrategy {
    /// POST with an `application/x-www-form-urlencoded` body
    FormBody,
    /// POST with the fields as query parameters
    PostQuery,
    /// GET with the fields as query parameters
    GetQuery,
}

/// Strategies in the order they are tried. The first accepted one wins.
pub const LOGIN_STRATEGIES: [LoginStrategy; 3] =
    [LoginStrategy::FormBody, LoginStrategy::PostQuery, LoginStrategy::GetQuery];

/// Outcome of a single delivery attempt.
#[derive(Debug)]
pub enum LoginAttempt {
    /// HTTP status below 400
    Accepted(Response),
    /// HTTP status 400 or above
    Rejected { status: u16, body: String },
    /// No HTTP response at all
    Transport(reqwest::Error),
}

impl LoginStrategy {
    pub async fn attempt(
        self,
        http: &Client,
        url: &str,
        form: &[(&str, String)],
        timeout: Duration,
    ) -> LoginAttempt {
        let request = match self {
            Self::FormBody => http.post(url).form(form),
            Self::PostQuery => http.post(url).query(form),
            Self::GetQuery => http.get(url).query(form),
        };

        match request.timeout(timeout).send().await {
            Err(e) => LoginAttempt::Transport(e),
            Ok(resp) if resp.status().as_u16() >= 400 => {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                LoginAttempt::Rejected { status, body }
            },
            Ok(resp) => LoginAttempt::Accepted(resp),
        }
    }
}

/// Token request fields for the configured grant.
pub fn login_form(config: &ConnectionConfig) -> Vec<(&'static str, String)> {
    match config.grant_type {
        GrantType::ClientCredentials => vec![
            ("grant_type", "client_credentials".to_string()),
            ("client_id", config.client_id.clone()),
            ("client_secret", config.client_secret.clone()),
        ],
        GrantType::Password => vec![
            ("grant_type", "password".to_string()),
            ("client_id", config.client_id.clone()),
            ("client_secret", config.client_secret.clone()),
            ("username", config.username.clone()),
            ("password", format!("{}{}", config.password, config.security_token)),
        ],
    }
}

impl FocoClient {
    /// Request a fresh token and cache it.
    ///
    /// Returns the access token, or an empty string when the token response
    /// carried none.
    pub async fn login(&self) -> Result<String> {
        let config = self.config().await;
        let form = login_form(&config);
        let last_stage = LOGIN_STRATEGIES.len() - 1;
        let mut rejection = None;

        for (stage, strategy) in LOGIN_STRATEGIES.into_iter().enumerate() {
            match strategy.attempt(&self.http, &config.login_url, &form, self.login_timeout).await {
                LoginAttempt::Accepted(resp) => {
                    tracing::info!(?strategy, grant_type = %config.grant_type, "FOCO login accepted");
                    return self.store_token(resp, &config).await;
                },
                LoginAttempt::Rejected { status, body } => {
                    tracing::warn!(?strategy, status, "FOCO login rejected");
                    rejection = Some(FocoError::UpstreamAuth { status, body });
                },
                LoginAttempt::Transport(e) if stage == last_stage => {
                    tracing::error!(?strategy, error = %e, "FOCO login transport failure");
                    return Err(transport(e));
                },
                LoginAttempt::Transport(e) => {
                    tracing::warn!(?strategy, error = %e, "FOCO login transport failure, trying next strategy");
                },
            }
        }

        Err(rejection.unwrap_or_else(|| FocoError::Transport {
            message: "No login strategy produced a response".to_string(),
        }))
    }

    async fn store_token(&self, resp: Response, config: &ConnectionConfig) -> Result<String> {
        let body = json_body(resp).await?;
        let token = body.get("access_token").and_then(Value::as_str).map(str::to_string);
        let instance = body
            .get("instance_url")
            .and_then(Value::as_str)
            .map(normalize_url)
            .filter(|url| !url.is_empty());

        let mut state = self.state.write().await;
        state.session.access_token = token.clone().filter(|t| !t.is_empty());
        if let Some(url) = instance {
            state.session.instance_url = Some(url);
        }
        if state.session.instance_url.is_none() {
            state.session.instance_url = Some(config.base_url.clone());
        }
        tracing::debug!(instance_url = ?state.session.instance_url, "FOCO session established");

        Ok(token.unwrap_or_default())
    }
}
