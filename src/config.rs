use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::picker::AddonFlags;

pub const API_URL_ENV: &str = "PAYMENT_PICKER_API_URL";
pub const API_TOKEN_ENV: &str = "PAYMENT_PICKER_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Payment addons enabled for the merchant account
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AddonsConfig {
    #[serde(default)]
    pub stripe: bool,
    #[serde(default)]
    pub square: bool,
}

impl AddonsConfig {
    pub fn flags(&self) -> AddonFlags {
        AddonFlags {
            stripe: self.stripe,
            square: self.square,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub addons: AddonsConfig,
    #[serde(default)]
    pub translations: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_translation(key: &str) -> Option<&'static str> {
    match key {
        "common:method" => Some("Method"),
        "customers:memo" => Some("Memo"),
        "customers:check_number" => Some("Check number"),
        _ => None,
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("payment-picker")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".payment-picker")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file and apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!(
            "Loaded config (stripe: {}, square: {}, {} translations)",
            config.addons.stripe,
            config.addons.square,
            config.translations.len()
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Environment variables (and `.env`) win over the file
    pub fn apply_env_overrides(&mut self) {
        dotenvy::dotenv().ok();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            debug!("Using API URL from {}", API_URL_ENV);
            self.api.base_url = url;
        }
        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            debug!("Using API token from {}", API_TOKEN_ENV);
            self.api.access_token = Some(token);
        }
    }

    /// Translate a key, falling back to built-in text and then the key itself
    pub fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .map(String::clone)
            .or_else(|| default_translation(key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("payment-picker.log"))
    }
}
