///
/// pagination.rs  Oct 16th, 2026
///
/// Pagination value and the query composer that merges a search filter
/// with pagination into the wire mapping.
///
/// Absent and empty filter values are never sent. Nothing is escaped
/// here, that is left to the transport.
///

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::Serialize;
use serde_json::Value;

use crate::core::error::FetchError;

/************ Wire Keys ***********************************/
pub const PAGE_PARAM: &str = "page";
pub const PER_PAGE_PARAM: &str = "per_page";

pub const DEFAULT_PAGE: NonZeroU32 = NonZeroU32::MIN;
pub const DEFAULT_PER_PAGE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => panic!("default per_page must be non-zero"),
};

/************ QueryMapping ********************************/
/* Ordered so composed queries are reproducible */
pub type QueryMapping = BTreeMap<String, String>;

/************ Pagination **********************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: NonZeroU32,
    per_page: NonZeroU32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Result<Self, FetchError> {
        let page = NonZeroU32::new(page)
            .ok_or_else(|| FetchError::Configuration("page must be greater than zero".into()))?;
        let per_page = NonZeroU32::new(per_page)
            .ok_or_else(|| FetchError::Configuration("per_page must be greater than zero".into()))?;
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.get()
    }

    // Parameters to inject into the query for this page
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            (PAGE_PARAM, self.page().to_string()),
            (PER_PAGE_PARAM, self.per_page().to_string()),
        ]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }
}

/************ compose() ***********************************/
/* Flattens `filter` into a QueryMapping and appends pagination.
 *
 * Caller Provides:
 *   any Serialize value whose top level is a map (or unit/None)
 *   optional pagination, which overrides same-named filter keys
 *
 * Scalar values are rendered as text; null and "" are dropped;
 * nested arrays/objects are rejected.
 */
pub fn compose<F>(filter: &F, pagination: Option<Pagination>) -> Result<QueryMapping, FetchError>
where
    F: Serialize + ?Sized,
{
    let value = serde_json::to_value(filter)
        .map_err(|e| FetchError::Configuration(format!("filter is not serializable: {e}")))?;

    let mut query = QueryMapping::new();
    match value {
        Value::Null => {}
        Value::Object(fields) => {
            for (key, value) in fields {
                if let Some(text) = scalar_to_param(&key, value)? {
                    query.insert(key, text);
                }
            }
        }
        other => {
            return Err(FetchError::Configuration(format!(
                "filter must be a map of named criteria, got {other}"
            )));
        }
    }

    if let Some(pagination) = pagination {
        for (key, value) in pagination.params() {
            query.insert(key.to_string(), value);
        }
    }

    Ok(query)
}

fn scalar_to_param(key: &str, value: Value) -> Result<Option<String>, FetchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(FetchError::Configuration(format!(
            "filter field '{key}' must be a scalar"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Serialize)]
    struct Criteria<'a> {
        name: Option<&'a str>,
        country: Option<&'a str>,
        competition: Option<&'a str>,
    }

    #[test]
    fn default_pagination_is_first_page_of_ten() {
        let p = Pagination::default();
        assert_eq!((p.page(), p.per_page()), (1, 10));
    }

    #[test]
    fn zero_pagination_is_rejected() {
        assert!(Pagination::new(0, 10).is_err());
        assert!(Pagination::new(1, 0).is_err());
    }

    #[test]
    fn absent_and_empty_values_are_dropped() {
        let filter = Criteria { name: Some("Real"), country: Some(""), competition: None };
        let query = compose(&filter, None).unwrap();

        assert_eq!(query.len(), 1);
        assert_eq!(query.get("name").map(String::as_str), Some("Real"));
        assert!(!query.contains_key("country"));
        assert!(!query.contains_key("competition"));
    }

    #[test]
    fn pagination_uses_wire_keys() {
        let query = compose(&HashMap::<String, String>::new(), Some(Pagination::new(2, 5).unwrap())).unwrap();
        assert_eq!(query.get("page").map(String::as_str), Some("2"));
        assert_eq!(query.get("per_page").map(String::as_str), Some("5"));
        assert!(!query.contains_key("perPage"));
    }

    #[test]
    fn pagination_overrides_filter_keys() {
        let mut filter = HashMap::new();
        filter.insert("page", "9");
        let query = compose(&filter, Some(Pagination::default())).unwrap();
        assert_eq!(query.get("page").map(String::as_str), Some("1"));
    }

    #[test]
    fn scalars_are_rendered_and_keys_pass_through() {
        let filter = serde_json::json!({ "minPrice": 1000.5, "active": true, "competition_id": 3 });
        let query = compose(&filter, None).unwrap();
        assert_eq!(query.get("minPrice").map(String::as_str), Some("1000.5"));
        assert_eq!(query.get("active").map(String::as_str), Some("true"));
        assert_eq!(query.get("competition_id").map(String::as_str), Some("3"));
    }

    #[test]
    fn composition_is_order_independent() {
        let a = serde_json::json!({ "name": "x", "country": "y" });
        let b = serde_json::json!({ "country": "y", "name": "x" });
        assert_eq!(compose(&a, None).unwrap(), compose(&b, None).unwrap());
    }

    #[test]
    fn unit_filter_is_empty() {
        assert!(compose(&(), None).unwrap().is_empty());
        assert!(compose(&Option::<Criteria>::None, None).unwrap().is_empty());
    }

    #[test]
    fn nested_values_and_non_maps_are_rejected() {
        let nested = serde_json::json!({ "ids": [1, 2] });
        assert!(matches!(compose(&nested, None), Err(FetchError::Configuration(_))));
        assert!(matches!(compose(&"name", None), Err(FetchError::Configuration(_))));
    }

    #[test]
    fn values_are_not_escaped() {
        let filter = serde_json::json!({ "name": "Atlético & Co" });
        let query = compose(&filter, None).unwrap();
        assert_eq!(query.get("name").map(String::as_str), Some("Atlético & Co"));
    }
}
