//! Partial configuration update.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/config`. Omitted (or null) fields leave the live value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of the fields carried by this patch, for audit logging.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("base_url", self.base_url.is_some()),
            ("login_url", self.login_url.is_some()),
            ("api_version", self.api_version.is_some()),
            ("client_id", self.client_id.is_some()),
            ("client_secret", self.client_secret.is_some()),
            ("username", self.username.is_some()),
            ("password", self.password.is_some()),
            ("security_token", self.security_token.is_some()),
            ("grant_type", self.grant_type.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}
