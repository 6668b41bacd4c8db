//! FOCO Gateway - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Brokers OAuth credentials for a FOCO (Salesforce-compatible) deployment
//! - Proxies REST, composite and Bulk API 2.0 ingest calls on /api/*
//! - Offers a small CLI for inspecting configuration and testing credentials
//!
//! Access via: http://localhost:8000/api/

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod cli;
mod commands;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use foco_core::http::build_http_client;
use foco_core::FocoClient;
use state::AppState;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    foco_core::logger::init_logger(&cli.log_level).map_err(|e| anyhow::anyhow!(e))?;

    let client = build_client(&cli)?;

    match cli.command.take() {
        None | Some(Commands::Serve) => run_server(cli, client).await,
        Some(Commands::Config(cmd)) => commands::handle_config_command(cmd, &client).await,
        Some(Commands::Login) => commands::handle_login(&client).await,
    }
}

fn build_client(cli: &Cli) -> Result<Arc<FocoClient>> {
    let http = build_http_client(cli.connection.upstream_proxy.as_deref(), CONNECT_TIMEOUT_SECS)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
    let login_timeout = Duration::from_secs(cli.connection.login_timeout_secs.max(1));
    Ok(Arc::new(
        FocoClient::new(http, cli.connection.to_config()).with_login_timeout(login_timeout),
    ))
}

async fn run_server(cli: Cli, client: Arc<FocoClient>) -> Result<()> {
    info!("🚀 FOCO Gateway v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = client.config().await;
    info!("🔗 Upstream: {} (API v{})", config.base_url, config.api_version);
    info!("🔑 Grant type: {}", config.grant_type);

    let state = AppState::new(client, cli.connection.docs_url.clone());
    let app = router::build_router(state);

    let listener = server_utils::create_listener(&cli.bind, cli.port).await?;
    let addr = listener.local_addr()?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔌 API available at http://{}/api/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(server_utils::shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}
