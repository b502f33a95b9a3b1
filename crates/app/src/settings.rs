//! Settings for the application. Configuration is read from
//! `settings.toml` and from `TALLY_*` environment variables, with the
//! environment taking precedence.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
    pub allowed_users: Option<Vec<u64>>,
}

#[derive(Debug, Deserialize)]
pub struct Sheets {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Display {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            accounts: Vec::new(),
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub telegram: Telegram,
    pub sheets: Sheets,
    #[serde(default)]
    pub display: Display,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("TALLY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}
