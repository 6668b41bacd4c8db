//! Application State
//!
//! Holds the shared FOCO client and static service metadata.

use std::sync::Arc;

use foco_core::FocoClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub client: Arc<FocoClient>,
    pub docs_url: String,
}

impl AppState {
    pub fn new(client: Arc<FocoClient>, docs_url: String) -> Self {
        Self { inner: Arc::new(AppStateInner { client, docs_url }) }
    }

    pub fn client(&self) -> &FocoClient {
        &self.inner.client
    }

    pub fn docs_url(&self) -> &str {
        &self.inner.docs_url
    }
}
