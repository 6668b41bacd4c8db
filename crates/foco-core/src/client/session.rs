use std::fmt;

/// Cached authentication state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub instance_url: Option<String>,
}

impl SessionState {
    /// The cached token, if one is present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn clear(&mut self) {
        self.access_token = None;
        self.instance_url = None;
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("instance_url", &self.instance_url)
            .finish()
    }
}
