//! Canonical cache keys from argument values.

use serde::Serialize;

/// The map type backing memoization caches.
///
/// With the `fxhash` feature, a faster non-cryptographic hasher replaces
/// the standard library's default.
#[cfg(feature = "fxhash")]
pub(crate) type CacheMap<V> = rustc_hash::FxHashMap<String, V>;

#[cfg(not(feature = "fxhash"))]
pub(crate) type CacheMap<V> = std::collections::HashMap<String, V>;

/// Serializes an argument value to its canonical cache key.
///
/// The key is the `serde_json` rendering of the value: structurally equal
/// values always produce identical keys, and values differing in any
/// element, order, or nesting produce different keys. Reference identity
/// plays no part.
///
/// # Panics
///
/// Panics if the value cannot be represented as JSON text (for example a
/// map with non-string keys). The supported argument kinds — numbers,
/// strings, booleans, options, and nested sequences or string-keyed
/// mappings of them — always serialize.
///
/// # Examples
///
/// ```rust
/// use fnkit::cache::cache_key;
///
/// assert_eq!(cache_key(&(1, "a")), cache_key(&(1, "a")));
/// assert_ne!(cache_key(&(1, 2)), cache_key(&(2, 1)));
/// assert_ne!(cache_key(&vec![1, 2]), cache_key(&vec![1, 2, 3]));
/// ```
pub fn cache_key<Args>(arguments: &Args) -> String
where
    Args: Serialize + ?Sized,
{
    match serde_json::to_string(arguments) {
        Ok(key) => key,
        Err(error) => panic!("cache_key: argument serialization failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let first = (1, "text".to_string(), true);
        let second = (1, "text".to_string(), true);
        assert_eq!(cache_key(&first), cache_key(&second));
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(cache_key(&("a", "b")), cache_key(&("b", "a")));
    }

    #[test]
    fn test_absent_values_are_distinguished() {
        assert_ne!(cache_key(&Some(1)), cache_key(&None::<i32>));
    }

    #[test]
    fn test_nested_aggregates() {
        let nested = vec![vec![1, 2], vec![3]];
        assert_eq!(cache_key(&nested), cache_key(&nested.clone()));
        assert_ne!(cache_key(&nested), cache_key(&vec![vec![1], vec![2, 3]]));
    }
}
