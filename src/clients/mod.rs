///
/// clients/mod.rs  Oct 16th, 2026
///
/// StatsClient and the pipeline every operation runs through:
///   resolve -> compose -> execute -> normalize | convert
///
/// Operations themselves live in the sibling modules, grouped by the
/// screen family that consumes them.
///

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{
    config::ApiConfig,
    endpoint::{Endpoint, EndpointRegistry, Resource},
    error::{ApiError, FetchError},
    http::{CallContext, Executor, ReqwestTransport, Transport},
    normalize::{normalize, normalize_page},
    pagination::{compose, Pagination},
    resource::{to_resource, ChartResource},
};
use crate::models::PaginatedResult;

pub mod charts;
pub mod competitions;
pub mod games;
pub mod players;
pub mod teams;

/************ StatsClient *********************************/
/* Cheap to clone; clones share the transport's connection pool.
 * Holds no state besides the immutable base address, so concurrent
 * calls never coordinate: identical calls are separate round trips
 * and responses may complete in any order.
 */
#[derive(Clone)]
pub struct StatsClient {
    registry: EndpointRegistry,
    executor: Executor,
}

impl StatsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new().map_err(|e| {
            FetchError::Configuration(format!("could not build http transport: {e}"))
        })?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &ApiConfig, transport: Arc<dyn Transport>) -> Result<Self, FetchError> {
        Ok(Self {
            registry: EndpointRegistry::new(config)?,
            executor: Executor::new(transport),
        })
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /******** Pipeline ************************************/

    fn endpoint<F>(&self, resource: Resource, path_params: &[&str], filter: &F, pagination: Option<Pagination>)
        -> Result<Endpoint, FetchError>
    where
        F: Serialize + ?Sized,
    {
        let query = compose(filter, pagination)?;
        path_params
            .iter()
            .fold(Endpoint::builder(resource), |builder, p| builder.path_param(*p))
            .query(query)
            .finish(&self.registry)
    }

    // Structured lookup decoded straight into T
    pub(crate) async fn fetch<T, F>(&self, resource: Resource, path_params: &[&str], filter: &F, ctx: &CallContext)
        -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let run = async {
            let endpoint = self.endpoint(resource, path_params, filter, None)?;
            let raw = self.executor.execute(&endpoint.url, &endpoint.query, endpoint.mode, ctx).await?;
            normalize(raw)
        };
        run.await.map_err(|e| ApiError::new(resource.action(), e))
    }

    // Structured search unwrapped from the `{ items_key: [...], total }` envelope
    pub(crate) async fn fetch_page<T, F>(
        &self,
        resource: Resource,
        items_key: &str,
        filter: &F,
        pagination: Pagination,
        ctx: &CallContext,
    ) -> Result<PaginatedResult<T>, ApiError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let run = async {
            let endpoint = self.endpoint(resource, &[], filter, Some(pagination))?;
            let raw = self.executor.execute(&endpoint.url, &endpoint.query, endpoint.mode, ctx).await?;
            normalize_page(raw, items_key, pagination)
        };
        run.await.map_err(|e| ApiError::new(resource.action(), e))
    }

    // Binary lookup converted into a fresh, caller-owned ChartResource
    pub(crate) async fn fetch_chart<F>(&self, resource: Resource, path_params: &[&str], filter: &F, ctx: &CallContext)
        -> Result<ChartResource, ApiError>
    where
        F: Serialize + ?Sized,
    {
        let run = async {
            let endpoint = self.endpoint(resource, path_params, filter, None)?;
            let raw = self.executor.execute(&endpoint.url, &endpoint.query, endpoint.mode, ctx).await?;
            if ctx.is_cancelled() {
                return Err(FetchError::Cancelled);
            }
            to_resource(raw, &self.registry.origin())
        };
        run.await.map_err(|e| ApiError::new(resource.action(), e))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;
    use tokio_util::sync::CancellationToken;
    use url::Url;

    use super::*;
    use crate::core::{error::TransportError, http::{RawResponse, ResponseMode}};
    use crate::core::pagination::QueryMapping;

    // png signature plus IHDR, enough for format sniffing
    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    ];

    // Delivers a full chart body, cancelling the caller's token on the way out
    struct CancelsAfterBody {
        token: CancellationToken,
    }

    #[async_trait]
    impl Transport for CancelsAfterBody {
        async fn get(&self, url: &Url, _query: &QueryMapping, _mode: ResponseMode)
            -> Result<RawResponse, TransportError> {
            self.token.cancel();
            Ok(RawResponse {
                url: url.clone(),
                status: 200,
                content_type: Some("image/png".into()),
                body: Bytes::from_static(PNG),
            })
        }
    }

    #[tokio::test]
    async fn cancellation_after_body_yields_no_chart() {
        let token = CancellationToken::new();
        let transport = Arc::new(CancelsAfterBody { token: token.clone() });
        let config = ApiConfig::parse("http://stats.local/api").unwrap();
        let client = StatsClient::with_transport(&config, transport).unwrap();

        let err = client
            .player_goals_chart(7, &CallContext::new().with_cancel(token))
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(err.action, "fetching player goals chart");
    }

    #[test]
    fn unusable_base_address_is_rejected() {
        let config = ApiConfig::parse("mailto:stats@example.com").unwrap();
        assert!(matches!(StatsClient::new(&config), Err(FetchError::Configuration(_))));
    }

    #[test]
    fn endpoint_merges_params_and_query() {
        let client = StatsClient::new(&ApiConfig::parse("http://stats.local/api").unwrap()).unwrap();
        let endpoint = client
            .endpoint(Resource::Games, &[], &serde_json::json!({ "competition_id": "ES1", "season": null }), None)
            .unwrap();

        assert_eq!(endpoint.url.as_str(), "http://stats.local/api/games");
        assert_eq!(endpoint.query.len(), 1);
        assert_eq!(endpoint.query["competition_id"], "ES1");
    }
}
