//! Secret masking for configuration snapshots.

use serde::{Deserialize, Serialize};

use super::connection::ConnectionConfig;
use super::enums::GrantType;

const MASK: &str = "***";

/// Mask a secret for display.
///
/// Empty stays empty, up to 6 characters collapses to `***`, longer values keep
/// their first and last 3 characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 6 => MASK.to_string(),
        n => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[n - 3..].iter().collect();
            format!("{head}{MASK}{tail}")
        },
    }
}

/// Snapshot returned by `GET /api/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaskedConfig {
    pub base_url: String,
    pub login_url: String,
    pub api_version: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub security_token: String,
    pub grant_type: GrantType,
}

impl From<&ConnectionConfig> for MaskedConfig {
    fn from(config: &ConnectionConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            login_url: config.login_url.clone(),
            api_version: config.api_version.clone(),
            client_id: mask_secret(&config.client_id),
            client_secret: mask_secret(&config.client_secret),
            username: mask_secret(&config.username),
            // Always fully hidden, regardless of length.
            password: MASK.to_string(),
            security_token: MASK.to_string(),
            grant_type: config.grant_type,
        }
    }
}
