///
/// init.rs  Oct 16th, 2026
///
/// Instantiates ClientConfig for a named profile from a YAML file
///
/// File layout:
///   local:
///     api:
///       base_url: http://127.0.0.1:5000/api
///     log:
///       log_level: debug
///
/// FOOTBALL_API_BASE_URL, when set, replaces the profile's base address.
///

use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;
use url::Url;

use crate::core::config::ClientConfig;

pub const BASE_URL_ENV: &str = "FOOTBALL_API_BASE_URL";

/************ Configuration Load Errors *******************/

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("url parse: {0}")]
    Url(#[from] url::ParseError),
    #[error("missing profile '{0}' in config")]
    MissingProfile(String),
}

type ConfigFile = HashMap<String, ClientConfig>;

/************ load_config_from_yaml() *********************/
/* Loads ClientConfig from YAML
 *
 * Caller Provides:
 *   path to config.yaml
 *   name of profile to pull from config
 */
pub fn load_config_from_yaml(path: impl AsRef<Path>, profile: &str)
    -> Result<ClientConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path)?;
    let env = std::env::var(BASE_URL_ENV).ok();
    parse_config(&raw, profile, env.as_deref())
}

fn parse_config(raw: &str, profile: &str, base_override: Option<&str>)
    -> Result<ClientConfig, ConfigLoadError> {
    let mut file: ConfigFile = serde_yaml::from_str(raw)?;
    let mut config = file.remove(profile)
        .ok_or_else(|| ConfigLoadError::MissingProfile(profile.to_string()))?;

    if let Some(base) = base_override.filter(|s| !s.trim().is_empty()) {
        config.api.base_url = Url::parse(base.trim())?;
    }

    Ok(config)
}
