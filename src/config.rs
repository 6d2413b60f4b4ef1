//! Runtime configuration, loaded once at startup from `~/.stockroom/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::ClientConfig;
use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_BASE_URL, DEFAULT_QUANTITY_STEP, DEFAULT_TIMEOUT_SECS,
    ENV_BASE_URL, ENV_CONFIG_PATH, ENV_TOKEN,
};
use crate::models::Item;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Added to the quantity of the selected item on Edit
    pub quantity_step: i64,
    /// Record posted by the Add command. A `sample_item` section in the file
    /// replaces the whole record; fields it leaves out are zero or empty.
    pub sample_item: Item,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            quantity_step: DEFAULT_QUANTITY_STEP,
            sample_item: default_sample_item(),
        }
    }
}

/// Fixed example record used by the Add command
fn default_sample_item() -> Item {
    Item {
        name: String::from("USB Mouse"),
        category_id: 2,
        quantity: 10,
        min_quantity: 1,
        cost: 5.0,
        price: 7.5,
        location: String::from("Test Shelf"),
        vendor: String::from("Test Vendor"),
        ..Default::default()
    }
}

impl Config {
    /// Load from `$STOCKROOM_CONFIG` or the default path, then apply env overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        let mut config = Self::load_from(&path)?;
        config.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_TOKEN).ok(),
        );
        Ok(config)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(path = %path.display(), base_url = %config.base_url, "Loaded config");
        Ok(config)
    }

    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(token) = token {
            self.token = Some(token);
        }
    }

    /// Token to send, if any. An empty token counts as none.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            token: self.bearer_token().map(str::to_string),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}
