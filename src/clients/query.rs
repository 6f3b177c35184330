//! Query string encoding for list and count options.
//!
//! Any `Serialize` struct can be used as query options. Fields serialize to
//! JSON first and are then flattened to strings:
//!
//! - `null` fields are skipped
//! - arrays are joined with commas (`ids=1,2,3`)
//! - nested objects are sent as JSON text
//! - timestamps keep their RFC 3339 form

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Flattens `params` into query parameters.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if `params` cannot be serialized or does
/// not serialize to a JSON object.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{to_query, ListOptions};
///
/// let options = ListOptions {
///     limit: Some(50),
///     ids: vec![1, 2, 3],
///     ..Default::default()
/// };
/// let query = to_query(&options).unwrap();
///
/// assert_eq!(query["limit"], "50");
/// assert_eq!(query["ids"], "1,2,3");
/// assert!(!query.contains_key("page_info"));
/// ```
pub fn to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<HashMap<String, String>, serde_json::Error> {
    let map = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => return Ok(HashMap::new()),
        other => {
            return Err(serde::ser::Error::custom(format!(
                "query options must serialize to an object, got {other}"
            )))
        }
    };

    let mut query = HashMap::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => {
                query.insert(key, s);
            }
            Value::Array(items) => {
                let values: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            other => {
                query.insert(key, other.to_string());
            }
        }
    }

    Ok(query)
}
