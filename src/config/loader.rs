use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, PostlistError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 2] = ["postlist.yml", "postlist.yaml"];

/// Load configuration from a file, falling back to defaults
pub fn load_config(config_file: Option<&Path>) -> BoxResult<Config> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(),
    };

    let path = match path {
        Some(path) => path,
        None => {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
    };

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| {
        PostlistError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = serde_yaml::from_str(&content).map_err(|e| {
        PostlistError::Config(format!(
            "Failed to parse configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find a default configuration file in the working directory
fn find_default_config_file() -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}
