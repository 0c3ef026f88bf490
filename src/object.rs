//! Helpers over JSON values.
//!
//! The dynamic value model here is [`serde_json::Value`]: a tagged union
//! over null, booleans, numbers, text, sequences, and string-keyed
//! mappings. These helpers cover the introspection and editing operations
//! the `Value` type does not provide inherently — shallow merging, dotted
//! path lookup, and property manipulation. Type predicates (`is_object`,
//! `is_string`, ...) are already inherent `Value` methods.

use serde_json::Value;

/// Shallowly merges mappings into a new mapping.
///
/// Starts from the target's entries and lays each source's entries over
/// them in order, so later sources win on key collisions. Inputs that are
/// not mappings contribute nothing.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::merge;
/// use serde_json::json;
///
/// let merged = merge(
///     &json!({"a": 1, "b": 1}),
///     &[json!({"b": 2}), json!({"c": 3})],
/// );
/// assert_eq!(merged, json!({"a": 1, "b": 2, "c": 3}));
/// ```
pub fn merge(target: &Value, sources: &[Value]) -> Value {
    let mut combined = target
        .as_object()
        .cloned()
        .unwrap_or_default();

    for source in sources {
        if let Some(entries) = source.as_object() {
            for (key, value) in entries {
                combined.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(combined)
}

/// Returns `true` if the value is a mapping with the given property.
#[inline]
pub fn has_property(value: &Value, property: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(property))
}

/// The value of a property, or `None` if absent or not a mapping.
#[inline]
pub fn get_property<'a>(value: &'a Value, property: &str) -> Option<&'a Value> {
    value.as_object()?.get(property)
}

/// Sets a property on a mapping.
///
/// Does nothing when the value is not a mapping.
pub fn set_property(value: &mut Value, property: &str, new_value: Value) {
    if let Some(map) = value.as_object_mut() {
        map.insert(property.to_string(), new_value);
    }
}

/// Removes a property from a mapping, returning the removed value.
pub fn remove_property(value: &mut Value, property: &str) -> Option<Value> {
    value.as_object_mut()?.remove(property)
}

/// The property names of a mapping, sorted by key.
///
/// Returns an empty vector for non-mappings.
pub fn property_names(value: &Value) -> Vec<String> {
    value.as_object().map_or_else(Vec::new, |map| {
        map.keys().cloned().collect()
    })
}

/// Looks up a nested value by a dotted key path.
///
/// Each path segment descends one mapping level; the lookup fails with
/// `None` as soon as a segment is missing or the current value is not a
/// mapping.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::get_by_path;
/// use serde_json::json;
///
/// let value = json!({"server": {"port": 8080}});
///
/// assert_eq!(get_by_path(&value, "server.port"), Some(&json!(8080)));
/// assert_eq!(get_by_path(&value, "server.host"), None);
/// ```
pub fn get_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

/// Returns `true` if the value has no enumerable entries.
///
/// Mappings count their properties, sequences their elements, and text
/// its characters; all other values are considered empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => true,
    }
}
