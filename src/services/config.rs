use serde::Deserialize;
use std::path::PathBuf;

/// Optional endpoint overrides from `~/.config/sitescope/config.toml`.
/// CLI flags win over the file; the file wins over built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/sitescope/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
