use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexis_config::Config;

/// `~/.config/lexis/config.json` or the platform equivalent
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexis").join("config.json"))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    let mut config: Config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    config.apply_env();
    Ok(config)
}

/// Explicit file first, then the user config file, then defaults.
///
/// `LEXIS_*` environment variables override whichever was read.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from {}", path.display());
        return read_config(path);
    }

    if let Some(path) = user_config_file().filter(|p| p.exists()) {
        tracing::info!("Loading user config from {}", path.display());
        return read_config(&path);
    }

    tracing::debug!("No config file, using defaults");
    Ok(Config::new())
}
