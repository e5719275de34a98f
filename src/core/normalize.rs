///
/// normalize.rs  Oct 16th, 2026
///
/// Response Normalizer: unwraps a successful structured response into
/// the value the caller asked for.
///

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::core::error::FetchError;
use crate::core::http::RawResponse;
use crate::core::pagination::Pagination;
use crate::models::PaginatedResult;

pub fn normalize<T>(raw: RawResponse) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(&raw.body).map_err(|e| {
        warn!(url = %raw.url, error = %e, "undecodable structured body");
        FetchError::Parse { url: raw.url, source: Box::new(e) }
    })
}

/************ PageEnvelope ********************************/
/* Paginated bodies from the service look like
 *   { "<items_key>": [...], "total": n }
 */
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    total: u64,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/******** normalize_page() ********************************/
/* Unwraps a paginated envelope. The requested pagination is echoed
 * back so the caller gets page/per_page alongside items and total.
 */
pub fn normalize_page<T>(raw: RawResponse, items_key: &str, pagination: Pagination)
    -> Result<PaginatedResult<T>, FetchError>
where
    T: DeserializeOwned,
{
    let url = raw.url.clone();
    let parse_err = |reason: String| FetchError::Parse { url: url.clone(), source: reason.into() };

    let mut envelope: PageEnvelope = normalize(raw)?;
    let items = envelope.rest
        .remove(items_key)
        .ok_or_else(|| parse_err(format!("missing '{items_key}' in paginated body")))?;
    let items: Vec<T> = serde_json::from_value(items)
        .map_err(|e| FetchError::Parse { url: url.clone(), source: Box::new(e) })?;

    if items.len() > pagination.per_page() as usize {
        return Err(parse_err(format!(
            "page holds {} items but per_page is {}", items.len(), pagination.per_page()
        )));
    }

    Ok(PaginatedResult {
        items,
        total: envelope.total,
        page: pagination.page(),
        per_page: pagination.per_page(),
    })
}
