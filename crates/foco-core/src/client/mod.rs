//! The FOCO proxy client.
//!
//! One `FocoClient` is built at startup and shared (behind `Arc`) by every
//! request handler. It owns the live [`ConnectionConfig`] and the cached
//! [`SessionState`]; both sit behind a single `RwLock` that is never held
//! across an outbound call.
//!
//! Token expiry is not tracked: a token stays cached until logout or a
//! config update, and a downstream 401 is surfaced to the caller as-is.

mod bulk;
mod login;
mod metadata;
mod response;
mod session;
mod sobjects;


use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tokio::sync::RwLock;
use url::Url;

use foco_types::{ConfigPatch, ConnectionConfig, FocoError, MaskedConfig, Result};

pub use login::{login_form, LoginAttempt, LoginStrategy, LOGIN_STRATEGIES};
pub use session::SessionState;

use crate::DEFAULT_REQUEST_TIMEOUT;
use response::transport;

struct ClientState {
    config: ConnectionConfig,
    session: SessionState,
}

/// Which root an operation is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    /// Always the configured base URL (userinfo, sobjects, describe, query)
    Base,
    /// Instance URL returned by login when known, else the base URL
    /// (writes, composite, bulk)
    Instance,
}

/// Bearer header plus the root URL resolved for one call.
struct Authorized {
    header: String,
    root: String,
    api_version: String,
}

impl Authorized {
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.root).map_err(|e| FocoError::Transport {
            message: format!("Invalid FOCO root URL '{}': {}", self.root, e),
        })?;
        url.path_segments_mut()
            .map_err(|()| FocoError::Transport {
                message: format!("FOCO root URL '{}' cannot carry a path", self.root),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `{root}/services/data/v{version}/{segments...}`
    fn data_url(&self, segments: &[&str]) -> Result<Url> {
        let version = format!("v{}", self.api_version);
        let mut full = vec!["services", "data", version.as_str()];
        full.extend_from_slice(segments);
        self.url(&full)
    }
}

pub struct FocoClient {
    http: Client,
    login_timeout: Duration,
    state: RwLock<ClientState>,
}

impl FocoClient {
    /// Create a client. URL fields of `config` are normalized; no network
    /// traffic happens until the first call.
    pub fn new(http: Client, config: ConnectionConfig) -> Self {
        Self {
            http,
            login_timeout: DEFAULT_REQUEST_TIMEOUT,
            state: RwLock::new(ClientState {
                config: config.normalized(),
                session: SessionState::default(),
            }),
        }
    }

    /// Per-stage timeout for token requests (30s unless overridden).
    pub fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    /// Snapshot of the live configuration.
    pub async fn config(&self) -> ConnectionConfig {
        self.state.read().await.config.clone()
    }

    pub async fn masked_config(&self) -> MaskedConfig {
        MaskedConfig::from(&self.state.read().await.config)
    }

    /// Snapshot of the cached session.
    pub async fn session(&self) -> SessionState {
        self.state.read().await.session.clone()
    }

    /// Apply a partial configuration update and drop the cached session so the
    /// next call re-authenticates under the new settings.
    pub async fn apply_patch(&self, patch: ConfigPatch) {
        let fields = patch.field_names();
        if patch.is_empty() {
            tracing::debug!("Empty configuration patch, only the session is reset");
        }
        let mut state = self.state.write().await;
        state.config.apply(patch);
        state.session.clear();
        tracing::info!(
            fields = ?fields,
            grant_type = %state.config.grant_type,
            "FOCO configuration updated, session cleared"
        );
    }

    /// Forget the cached token and instance URL.
    pub async fn logout(&self) {
        self.state.write().await.session.clear();
        tracing::info!("FOCO session cleared");
    }

    /// `Bearer <token>`, logging in first when no token is cached.
    pub async fn ensure_auth_header(&self) -> Result<String> {
        let cached = self.state.read().await.session.token().map(str::to_string);
        let token = match cached {
            Some(token) => token,
            None => self.login().await?,
        };
        Ok(format!("Bearer {}", token))
    }

    async fn authorize(&self, root: Root) -> Result<Authorized> {
        let header = self.ensure_auth_header().await?;
        let state = self.state.read().await;
        let root = match root {
            Root::Base => state.config.base_url.clone(),
            Root::Instance => state
                .session
                .instance_url
                .clone()
                .unwrap_or_else(|| state.config.base_url.clone()),
        };
        Ok(Authorized {
            header,
            root: root.trim_end_matches('/').to_string(),
            api_version: state.config.api_version.clone(),
        })
    }

    async fn send(
        &self,
        auth: &Authorized,
        request: RequestBuilder,
        timeout: Duration,
    ) -> Result<Response> {
        request
            .header(AUTHORIZATION, &auth.header)
            .timeout(timeout)
            .send()
            .await
            .map_err(transport)
    }
}
