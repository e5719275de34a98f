///
/// lib.rs  Oct 16th, 2026
///
/// Data-access layer of the football statistics dashboard. Every view
/// goes through StatsClient; nothing here renders or caches.
///

pub mod clients;
pub mod core;
pub mod init;
pub mod models;

pub use crate::clients::StatsClient;
pub use crate::core::{
    config::{ApiConfig, ClientConfig, LogLevel, LoggingConfig},
    endpoint::{EndpointRegistry, Resource},
    error::{ApiError, FetchError, TransportError},
    http::{CallContext, RawResponse, ReqwestTransport, ResponseMode, Transport},
    pagination::{compose, Pagination, QueryMapping},
    resource::{ChartResource, ScopedChart},
};
pub use crate::models::*;
pub use tokio_util::sync::CancellationToken;
