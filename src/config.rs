use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::algorithm::HashAlgorithm;

const DIRECTORY_NAME: &str = ".otp";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to find home directory")]
    HomeDirNotFound,
    #[error("Unable to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Generation parameters read from a TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub secret: Option<String>,
    pub digits: Option<u32>,
    pub algorithm: Option<HashAlgorithm>,
    pub step: Option<u64>,
    pub counter: Option<u64>,
}

impl Settings {
    /// Load settings from `path`, or from `~/.otp/config.toml` when no path is given.
    ///
    /// A missing default file yields empty settings; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = default_path()?;
                if !path.exists() {
                    debug!("no settings file at {}", path.display());
                    return Ok(Settings::default());
                }
                path
            }
        };

        debug!("loading settings from {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Settings::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Settings, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

pub fn default_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(DIRECTORY_NAME).join(FILE_NAME))
}
