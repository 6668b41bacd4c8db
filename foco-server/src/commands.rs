use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use foco_core::FocoClient;
use foco_types::MaskedConfig;

use crate::cli::ConfigCommands;

pub async fn handle_config_command(cmd: ConfigCommands, client: &FocoClient) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => show_config(&client.masked_config().await, json),
    }
}

pub fn show_config(config: &MaskedConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", "FOCO Connection:".cyan().bold());
    println!("{}", config_table(config));
    Ok(())
}

fn config_table(config: &MaskedConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Setting", "Value"]);

    let grant_type = config.grant_type.to_string();
    let rows = [
        ("base_url", config.base_url.as_str()),
        ("login_url", config.login_url.as_str()),
        ("api_version", config.api_version.as_str()),
        ("grant_type", grant_type.as_str()),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("username", config.username.as_str()),
        ("password", config.password.as_str()),
        ("security_token", config.security_token.as_str()),
    ];

    for (name, value) in rows {
        let value_cell = if value.is_empty() {
            Cell::new("-").fg(Color::DarkGrey)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(name).fg(Color::Cyan), value_cell]);
    }
    table
}

pub async fn handle_login(client: &FocoClient) -> Result<()> {
    match client.login().await {
        Ok(_) => {
            let session = client.session().await;
            println!("{} Login succeeded", "✓".green());
            println!("  Instance: {}", session.instance_url.as_deref().unwrap_or("-"));
            Ok(())
        },
        Err(e) => {
            println!("{} Login failed", "✗".red());
            Err(anyhow::anyhow!(e))
        },
    }
}
