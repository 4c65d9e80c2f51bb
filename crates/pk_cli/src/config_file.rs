//! Config file loading (JSON or YAML by extension)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use pk_core::ShootoutConfig;

/// Config from file when given, otherwise the named preset.
pub fn resolve(preset: &str, path: Option<&Path>) -> Result<ShootoutConfig> {
    match path {
        Some(path) => load(path),
        None => ShootoutConfig::preset(preset).with_context(|| format!("Unknown preset: {preset}")),
    }
}

pub fn load(path: &Path) -> Result<ShootoutConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        ShootoutConfig::from_yaml(&text)
    } else {
        ShootoutConfig::from_json(&text)
    };
    config.with_context(|| format!("Invalid config file: {}", path.display()))
}
