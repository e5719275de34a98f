///
/// config.rs  Oct 16th, 2026
///
/// Details configuration structures for the statistics API client
///
/// The data-access layer recognizes exactly one option, the base address.
/// Everything else here configures the process around it.
///

use serde::{Deserialize, Serialize};
use url::Url;

/************ ClientConfig ********************************/
/* Parent Configuration fully detailing a single client profile
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LoggingConfig,
}

/************ ApiConfig ***********************************/
/* Immutable address of the remote statistics service. Passed into
 * StatsClient at construction, never read from global state.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self { base_url: Url::parse(base_url)? })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

/************ Logging Supporting **************************/

/************ LogLevel ************************************/
/* Logger State Enum */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/************ LoggingConfig *******************************/
/* Configuration for supporting logger
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_level: default_log_level(), json: false }
    }
}

/************ Defaults ************************************/
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute url")
}
fn default_log_level() -> LogLevel { LogLevel::Info }
