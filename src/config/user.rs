use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "PLUGIN_SCAFFOLD_CONFIG";

/// User-level configuration loaded from `~/.config/plugin-scaffold/config.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub author: AuthorConfig,
}

/// Author identity written into generated manifests and the LICENSE.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("plugin-scaffold").join("config.toml"))
}

/// Load user configuration from the default location.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

pub fn load_user_config_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| ScaffoldError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Some(config))
}
