use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional TOML config: the data path plus default selections. Explicit
/// command-line flags override every entry.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub data: Option<String>,
    pub contact: Option<String>,
    pub analysis: Option<String>,
    pub verify: Option<String>,
}

pub fn load_config(path: &str) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file: {}", path))
}
