//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vardan_commerce::config::StoreConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings shared with the browser build.
    #[serde(default)]
    pub store: StoreConfig,

    /// Price catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Offline cart storage.
    #[serde(default)]
    pub cart: CartConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Where prices come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog TOML file; the embedded catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Force the sale switch on or off regardless of the catalog file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<bool>,
}

/// Offline cart storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// JSON file holding a `localStorage`-shaped key/value export.
    #[serde(default = "default_cart_file")]
    pub file: PathBuf,
}

fn default_cart_file() -> PathBuf {
    PathBuf::from(".vardan/cart.json")
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            file: default_cart_file(),
        }
    }
}

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["vardan.toml", ".vardan.toml", "vardan.json"];

/// Generate a default vardan.toml config file.
pub fn generate_default_config() -> String {
    let store = StoreConfig::default();
    format!(
        r#"# Vardan storefront configuration

[store]
storage_key = "{storage_key}"
whatsapp_number = "{whatsapp_number}"
messaging_base_url = "{messaging_base_url}"
placeholder_image = "{placeholder_image}"
company_name = "{company_name}"
empty_cart_link = "{empty_cart_link}"
clear_prompt_delay_ms = {clear_prompt_delay_ms}
autoplay_interval_ms = {autoplay_interval_ms}

[catalog]
# path = "data/catalog.toml"
# sale = true

[cart]
file = ".vardan/cart.json"
"#,
        storage_key = store.storage_key,
        whatsapp_number = store.whatsapp_number,
        messaging_base_url = store.messaging_base_url,
        placeholder_image = store.placeholder_image,
        company_name = store.company_name,
        empty_cart_link = store.empty_cart_link,
        clear_prompt_delay_ms = store.clear_prompt_delay_ms,
        autoplay_interval_ms = store.autoplay_interval_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[store]
company_name = "Test Shop"

[catalog]
sale = true
"#,
        )
        .unwrap();
        assert_eq!(config.store.company_name, "Test Shop");
        assert_eq!(config.store.storage_key, "vardanCart");
        assert_eq!(config.catalog.sale, Some(true));
        assert_eq!(config.cart.file, PathBuf::from(".vardan/cart.json"));
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vardan.json");
        let mut config = CliConfig::default();
        config.store.whatsapp_number = "911234567890".to_string();
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vardan.toml");
        std::fs::write(&path, "[store\n").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
