///
/// http.rs  Oct 16th, 2026
///
/// Request Executor: a single read-only GET per call over a swappable
/// Transport, with uniform reporting of transport and status failures.
///
/// No retries and no backoff. One attempt, the caller owns any policy.
/// Cancellation and timeout come from the caller's CallContext.
///

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client,
    ClientBuilder,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::core::error::{FetchError, TransportError};
use crate::core::pagination::QueryMapping;

/************ ResponseMode ********************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Structured,
    Binary,
}

impl ResponseMode {
    pub fn accept(self) -> &'static str {
        match self {
            ResponseMode::Structured => "application/json",
            ResponseMode::Binary     => "image/*",
        }
    }
}

/************ RawResponse *********************************/
/* Whatever came back, before normalization or conversion */
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: Url,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/************ CallContext *********************************/
/* Per-call controls threaded from every operation into the executor.
 * Default is no cancellation and no timeout.
 */
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub cancel: Option<CancellationToken>,
    pub timeout: Option<Duration>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

/************ Transport ***********************************/
/* The seam between the executor and the wire. Implementations return
 * any response they receive, success or not; status handling is the
 * executor's job.
 */
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url, query: &QueryMapping, mode: ResponseMode)
        -> Result<RawResponse, TransportError>;
}

/************ ReqwestTransport ****************************/
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

pub const DEFAULT_USER_AGENT: &str = concat!("football-stats-client/", env!("CARGO_PKG_VERSION"));

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        // No client-wide timeout, see CallContext
        let client = ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, query: &QueryMapping, mode: ResponseMode)
        -> Result<RawResponse, TransportError> {
        let resp = self.client
            .get(url.clone())
            .query(query)
            .header(ACCEPT, mode.accept())
            .send()
            .await?;

        let url = resp.url().clone();
        let status = resp.status().as_u16();
        let content_type = resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().await?;

        Ok(RawResponse { url, status, content_type, body })
    }
}

/************ Executor ************************************/
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /******** Executor::execute ***************************/
    /* Performs exactly one GET.
     *
     * We return:
     *   RawResponse with a 2xx status
     *   Http on any other status, Network on transport failure or
     *   timeout, Cancelled if the context's token fires first
     */
    pub async fn execute(&self, url: &Url, query: &QueryMapping, mode: ResponseMode, ctx: &CallContext)
        -> Result<RawResponse, FetchError> {
        if ctx.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        debug!(%url, ?mode, params = query.len(), "issuing request");

        let call = self.send(url, query, mode, ctx.timeout);
        let outcome = match &ctx.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(%url, "request cancelled");
                    return Err(FetchError::Cancelled);
                }
                outcome = call => outcome,
            },
            None => call.await,
        };

        let resp = outcome.map_err(|source| {
            warn!(%url, error = %source, "transport failure");
            FetchError::Network { url: url.clone(), source }
        })?;

        if !resp.is_success() {
            warn!(url = %resp.url, status = resp.status, "non-success status");
            return Err(FetchError::Http {
                status: resp.status,
                url: resp.url,
                body: String::from_utf8_lossy(&resp.body).into_owned(),
            });
        }

        Ok(resp)
    }

    async fn send(&self, url: &Url, query: &QueryMapping, mode: ResponseMode, timeout: Option<Duration>)
        -> Result<RawResponse, TransportError> {
        let call = self.transport.get(url, query, mode);
        match timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => call.await,
        }
    }
}
