use clap::{Args, Parser, Subcommand};

use foco_types::models::config::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_LOGIN_URL};
use foco_types::{ConnectionConfig, GrantType};

pub const DEFAULT_DOCS_URL: &str = "https://anypoint.mulesoft.com/exchange/portals/sebrae-2/a7bc5ec0-9afc-42bf-bc65-96a43cd68385/mapeamento-sas-x-foco/minor/1.0/console/summary/";

#[derive(Parser)]
#[command(
    name = "foco-gateway",
    about = "FOCO Gateway - credential broker and REST proxy for the FOCO API",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "FOCO_PORT", default_value = "8000")]
    pub port: u16,

    #[arg(long, env = "FOCO_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the gateway (default if no command specified)")]
    Serve,

    #[command(subcommand, about = "Inspect the FOCO connection configuration")]
    Config(ConfigCommands),

    #[command(about = "Request a token with the configured credentials")]
    Login,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the effective configuration with secrets masked")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

/// FOCO connection settings, read from flags or `FOCO_*` environment variables.
#[derive(Args, Clone)]
pub struct ConnectionArgs {
    #[arg(long, env = "FOCO_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[arg(long, env = "FOCO_LOGIN_URL", default_value = DEFAULT_LOGIN_URL, global = true)]
    pub login_url: String,

    #[arg(long, env = "FOCO_API_VERSION", default_value = DEFAULT_API_VERSION, global = true)]
    pub api_version: String,

    #[arg(long, env = "FOCO_CLIENT_ID", default_value = "", hide_env_values = true, global = true)]
    pub client_id: String,

    #[arg(
        long,
        env = "FOCO_CLIENT_SECRET",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    pub client_secret: String,

    #[arg(long, env = "FOCO_USERNAME", default_value = "", hide_env_values = true, global = true)]
    pub username: String,

    #[arg(long, env = "FOCO_PASSWORD", default_value = "", hide_env_values = true, global = true)]
    pub password: String,

    #[arg(
        long,
        env = "FOCO_SECURITY_TOKEN",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    pub security_token: String,

    #[arg(long, env = "FOCO_GRANT_TYPE", default_value = "client_credentials", global = true)]
    pub grant_type: String,

    #[arg(long, env = "FOCO_DOCS_URL", default_value = DEFAULT_DOCS_URL, global = true)]
    pub docs_url: String,

    #[arg(
        long,
        env = "FOCO_LOGIN_TIMEOUT_SECS",
        default_value = "30",
        global = true,
        help = "Timeout for each token request stage, in seconds"
    )]
    pub login_timeout_secs: u64,

    #[arg(long, env = "FOCO_UPSTREAM_PROXY", global = true, help = "HTTP(S) proxy for outbound FOCO calls")]
    pub upstream_proxy: Option<String>,
}

impl ConnectionArgs {
    pub fn to_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            base_url: self.base_url.clone(),
            login_url: self.login_url.clone(),
            api_version: self.api_version.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            security_token: self.security_token.clone(),
            grant_type: GrantType::from_string(&self.grant_type),
        }
        .normalized()
    }
}
