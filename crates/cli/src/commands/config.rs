//! Configuration inspection commands.

use anyhow::Result;
use clap::Subcommand;
use rc3_config::constants::CONFIG_PATH_ENV_VAR;
use rc3_config::{CliConfig, ConfigLoader, Field, cli_env_vars};
use secrecy::ExposeSecret;
use serde::Serialize;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show {
        /// Print the token instead of masking it
        #[arg(long)]
        show_secrets: bool,
    },

    /// Print the config file that would be loaded
    Path,

    /// List the environment variables the CLI reads
    EnvVars,
}

pub fn run(command: ConfigCommand, loader: &ConfigLoader) -> Result<()> {
    match command {
        ConfigCommand::Show { show_secrets } => {
            let config = loader.load()?;
            println!("{}", render_config(&config, show_secrets)?);
        }
        ConfigCommand::Path => match loader.resolve_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("(none)"),
        },
        ConfigCommand::EnvVars => {
            for var in cli_env_vars() {
                println!("{}", var);
            }
            println!("{}", CONFIG_PATH_ENV_VAR);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ConfigDisplay<'a> {
    detail: bool,
    format: &'a str,
    host: &'a str,
    no_color: bool,
    token: String,
}

fn display_token(config: &CliConfig, show_secrets: bool) -> String {
    let token = config.token.expose_secret();
    if show_secrets || token.is_empty() {
        token.to_string()
    } else {
        "****".to_string()
    }
}

/// Render the configuration in the style it asks for itself: JSON when
/// `format = "json"`, `key = value` lines otherwise.
fn render_config(config: &CliConfig, show_secrets: bool) -> Result<String> {
    if config.format == "json" {
        let display = ConfigDisplay {
            detail: config.detail,
            format: &config.format,
            host: &config.host,
            no_color: config.no_color,
            token: display_token(config, show_secrets),
        };
        return Ok(serde_json::to_string_pretty(&display)?);
    }

    let lines: Vec<String> = Field::ALL
        .iter()
        .map(|field| {
            let value = match field {
                Field::Detail => config.detail.to_string(),
                Field::Format => config.format.clone(),
                Field::Host => config.host.clone(),
                Field::NoColor => config.no_color.to_string(),
                Field::Token => display_token(config, show_secrets),
            };
            format!("{} = {}", field.name(), value)
        })
        .collect();
    Ok(lines.join("\n"))
}
