///
/// error.rs  Oct 16th, 2026
///
/// Error taxonomy shared by every stage of the request pipeline.
///
/// FetchError is what a single stage reports, ApiError is what an
/// operation hands back to the caller: the same failure plus the
/// action that was being performed.
///

use std::time::Duration;

use thiserror::Error;
use url::Url;

/************ TransportError ******************************/
/* Failure beneath the HTTP status layer. Kept independent of the
 * concrete transport so test doubles can report failures too.
 */
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("reqwest error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Other(String),
}

/************ FetchError **********************************/
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error for {url}: {source}")]
    Network {
        url: Url,
        #[source]
        source: TransportError,
    },
    #[error("http status {status} from {url}")]
    Http { status: u16, url: Url, body: String },
    #[error("malformed body from {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("unusable chart payload from {url}: {reason}")]
    Conversion { url: Url, reason: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/************ ApiError ************************************/
/* Returned by every StatsClient operation. `action` names what was
 * being done, e.g. "fetching players".
 */
#[derive(Debug, Error)]
#[error("{action}: {source}")]
pub struct ApiError {
    pub action: &'static str,
    #[source]
    pub source: FetchError,
}

impl ApiError {
    pub fn new(action: &'static str, source: FetchError) -> Self {
        Self { action, source }
    }

    pub fn kind(&self) -> &FetchError {
        &self.source
    }

    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.source, FetchError::Cancelled)
    }
}
