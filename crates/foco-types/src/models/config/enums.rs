//! Configuration enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth2 grant used when requesting a token from FOCO.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Server-to-server flow: `client_id` + `client_secret`
    #[default]
    ClientCredentials,
    /// Resource owner flow: adds `username` and `password + security_token`
    Password,
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ClientCredentials => write!(f, "client_credentials"),
            Self::Password => write!(f, "password"),
        }
    }
}

impl GrantType {
    /// Parse from string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Anything
    /// other than `client_credentials` selects the password flow.
    pub fn from_string(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "client_credentials" => Self::ClientCredentials,
            _ => Self::Password,
        }
    }
}
