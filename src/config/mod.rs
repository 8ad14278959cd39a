mod schema;

pub use schema::{Config, PagesConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/pagegen/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("pagegen")
}

/// Get the default config file path (~/.config/pagegen/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// With no explicit path, a missing default file is not an error: the
/// built-in defaults apply. An explicitly passed path must exist.
///
/// # Errors
///
/// Returns an error if an explicit config file does not exist, cannot be
/// read, or the YAML cannot be parsed.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(explicit) => read_config(&explicit),
        None => {
            let default_path = get_config_path();
            if default_path.exists() {
                read_config(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Config file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}
