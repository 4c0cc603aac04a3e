//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use serde_json::Value;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("[store]");
    ctx.output.kv("storage_key", &store.storage_key);
    ctx.output.kv("whatsapp_number", &store.whatsapp_number);
    ctx.output.kv("messaging_base_url", &store.messaging_base_url);
    ctx.output.kv("placeholder_image", &store.placeholder_image);
    ctx.output.kv("company_name", &store.company_name);
    ctx.output.kv("empty_cart_link", &store.empty_cart_link);
    ctx.output
        .kv("clear_prompt_delay_ms", &store.clear_prompt_delay_ms.to_string());
    ctx.output
        .kv("autoplay_interval_ms", &store.autoplay_interval_ms.to_string());

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(embedded)"),
    }
    if let Some(sale) = ctx.config.catalog.sale {
        ctx.output.kv("sale", &sale.to_string());
    }

    ctx.output.info("[cart]");
    ctx.output.kv("file", &ctx.cart_file().display().to_string());
    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        match value {
            Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let store = &ctx.config.store;

    if store.whatsapp_number.is_empty() || !store.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
        errors.push("store.whatsapp_number must be digits only, with country code".to_string());
    } else if store.whatsapp_number.len() < 10 {
        warnings.push("store.whatsapp_number looks too short".to_string());
    }

    if !store.messaging_base_url.starts_with("https://") && !store.messaging_base_url.starts_with("http://") {
        errors.push("store.messaging_base_url must be an http(s) URL".to_string());
    }

    if store.storage_key.trim().is_empty() {
        errors.push("store.storage_key is required".to_string());
    }

    if store.company_name.trim().is_empty() {
        warnings.push("store.company_name is empty; order messages will read oddly".to_string());
    }

    if store.autoplay_interval_ms < 1000 {
        warnings.push("store.autoplay_interval_ms under one second".to_string());
    }

    if let Err(e) = ctx.catalog() {
        errors.push(format!("catalog: {:#}", e));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<Value> {
    let mut value = serde_json::to_value(config)?;
    for part in key.split('.') {
        value = match value {
            Value::Object(mut map) => match map.remove(part) {
                Some(v) => v,
                None => bail!("Unknown config key: {}", key),
            },
            _ => bail!("Unknown config key: {}", key),
        };
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = CliConfig::default();
        assert_eq!(
            get_config_value(&config, "store.company_name").unwrap(),
            Value::String("Vardan Naturals".to_string())
        );
        assert_eq!(
            get_config_value(&config, "store.clear_prompt_delay_ms").unwrap(),
            Value::from(1500)
        );
        assert!(get_config_value(&config, "store.nope").is_err());
        assert!(get_config_value(&config, "store.company_name.more").is_err());
    }
}
