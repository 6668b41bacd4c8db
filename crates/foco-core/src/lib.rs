//! # FOCO Core
//!
//! The proxy client that brokers credentials for a Salesforce-compatible
//! FOCO deployment and forwards REST, composite and Bulk API 2.0 ingest calls.
//!
//! ```text
//! foco-core/src/
//! ├── client/       # FocoClient: session, login fallback, every remote operation
//! ├── http.rs       # Shared reqwest::Client construction
//! └── logger.rs     # tracing-subscriber bootstrap
//! ```
//!
//! ```no_run
//! use foco_core::{http::build_http_client, FocoClient};
//! use foco_types::ConnectionConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let http = build_http_client(None, 10)?;
//! let client = FocoClient::new(http, ConnectionConfig::default());
//! let accounts = client.query("SELECT Id, Name FROM Account LIMIT 5").await?;
//! println!("{accounts}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

pub mod client;
pub mod http;
pub mod logger;

pub use client::{FocoClient, LoginAttempt, LoginStrategy, SessionState, LOGIN_STRATEGIES};
pub use foco_types::{FocoError, Result};

/// Timeout for the token request and every metadata / single-record call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for query, composite, batch upload and result download calls.
pub const LONG_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
