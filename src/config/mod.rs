mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./pandoc-bridge.toml",
        "~/.config/pandoc-bridge/config.toml",
        "/etc/pandoc-bridge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if let Some(path) = &config.pandoc.binary_path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("pandoc.binary_path cannot be empty");
        }
        if !path.exists() {
            tracing::warn!("Configured pandoc binary does not exist: {:?}", path);
        }
    }

    if config.defaults.input_format.trim().is_empty() {
        anyhow::bail!("defaults.input_format cannot be empty");
    }

    Ok(())
}
