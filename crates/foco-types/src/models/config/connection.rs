//! FOCO connection settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enums::GrantType;
use super::mask::mask_secret;
use super::patch::ConfigPatch;

pub const DEFAULT_BASE_URL: &str = "https://hlg-gateway.sebrae.com.br/foco-stg";
pub const DEFAULT_LOGIN_URL: &str =
    "https://hlg-gateway.sebrae.com.br/foco-stg/services/oauth2/token";
pub const DEFAULT_API_VERSION: &str = "62.0";

/// Trim whitespace, strip surrounding backticks/double quotes and trailing slashes.
///
/// Values pasted from docs or `.env` files often arrive as `` `https://...` ``
/// or `"https://.../"`.
pub fn normalize_url(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '`' || c == '"')
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Live connection configuration held by the FOCO client.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Static API root used for reads (userinfo, sobjects, describe, query)
    pub base_url: String,
    /// OAuth2 token endpoint
    pub login_url: String,
    /// REST API version, without the leading `v`
    pub api_version: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    /// Appended verbatim to `password` in the password flow
    pub security_token: String,
    pub grant_type: GrantType,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
            security_token: String::new(),
            grant_type: GrantType::default(),
        }
    }
}

// Manual impl so secrets never reach logs through `{:?}`.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("base_url", &self.base_url)
            .field("login_url", &self.login_url)
            .field("api_version", &self.api_version)
            .field("client_id", &mask_secret(&self.client_id))
            .field("client_secret", &"***")
            .field("username", &mask_secret(&self.username))
            .field("password", &"***")
            .field("security_token", &"***")
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

impl ConnectionConfig {
    /// Normalize URL fields in place.
    pub fn normalized(mut self) -> Self {
        self.base_url = normalize_url(&self.base_url);
        self.login_url = normalize_url(&self.login_url);
        self
    }

    /// Overwrite every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.base_url {
            self.base_url = normalize_url(&v);
        }
        if let Some(v) = patch.login_url {
            self.login_url = normalize_url(&v);
        }
        if let Some(v) = patch.api_version {
            self.api_version = v;
        }
        if let Some(v) = patch.client_id {
            self.client_id = v;
        }
        if let Some(v) = patch.client_secret {
            self.client_secret = v;
        }
        if let Some(v) = patch.username {
            self.username = v;
        }
        if let Some(v) = patch.password {
            self.password = v;
        }
        if let Some(v) = patch.security_token {
            self.security_token = v;
        }
        if let Some(v) = patch.grant_type {
            self.grant_type = GrantType::from_string(&v);
        }
    }
}
