//! Recursive key stripping for schema trees.

use serde_json::{Map, Value};

/// Return a copy of `tree` with `key` removed from every mapping at every depth.
///
/// Recurses into the values of every mapping and every element of every
/// array, so objects nested in lists (e.g. `enum` entries) are rewritten too.
/// Scalars are cloned as-is and the order of the remaining keys is kept.
///
/// ```
/// use ai_tool_schema::schema::strip_key;
/// use serde_json::json;
///
/// let tree = json!({"title": "Foo", "enum": [{"title": "A", "v": 1}]});
/// assert_eq!(strip_key(&tree, "title"), json!({"enum": [{"v": 1}]}));
/// ```
pub fn strip_key(tree: &Value, key: &str) -> Value {
    match tree {
        Value::Object(map) => Value::Object(strip_key_from_map(map, key)),
        Value::Array(items) => Value::Array(items.iter().map(|v| strip_key(v, key)).collect()),
        scalar => scalar.clone(),
    }
}

/// Mapping form of [`strip_key`].
pub fn strip_key_from_map(map: &Map<String, Value>, key: &str) -> Map<String, Value> {
    map.iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), strip_key(v, key)))
        .collect()
}
