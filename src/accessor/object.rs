//! Untyped property access and whole-object views.
//!
//! [`prop`] is [`get`](super::get) without the type check. [`keys`],
//! [`values`] and [`pairs`] list the entries of any [`StrMap`] in key
//! order.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::get::member;
use crate::control::Maybe;

/// A map from string keys to values.
pub trait StrMap {
    /// The type of the stored values.
    type Value;

    /// The entries, in the map's iteration order.
    fn entries(&self) -> impl Iterator<Item = (&str, &Self::Value)>;
}

impl<V> StrMap for BTreeMap<String, V> {
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Sorted by key unless `serde_json` preserves insertion order.
impl StrMap for Map<String, Value> {
    type Value = Value;

    fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Returns the property `key` of `value`, whatever its type.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::prop;
/// use tacit::control::Maybe::{Just, Nothing};
///
/// assert_eq!(prop("a", &json!({"a": 1, "b": 2})), Just(&json!(1)));
/// assert_eq!(prop("a", &json!({"a": null})), Just(&json!(null)));
/// assert_eq!(prop("c", &json!({"a": 1})), Nothing);
/// ```
pub fn prop<'a>(key: &str, value: &'a Value) -> Maybe<&'a Value> {
    member(value, key).into()
}

/// The keys of `map`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use tacit::accessor::keys;
///
/// let map = BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
/// assert_eq!(keys(&map), vec!["a", "b"]);
/// ```
pub fn keys<M: StrMap + ?Sized>(map: &M) -> Vec<&str> {
    map.entries().map(|(key, _)| key).collect()
}

/// The values of `map`, in key order.
pub fn values<M: StrMap + ?Sized>(map: &M) -> Vec<&M::Value> {
    map.entries().map(|(_, value)| value).collect()
}

/// The key-value pairs of `map`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::pairs;
///
/// let object = json!({"b": 2, "a": 1});
/// let entries = object.as_object().map(pairs).unwrap_or_default();
/// assert_eq!(entries, vec![("a", &json!(1)), ("b", &json!(2))]);
/// ```
pub fn pairs<M: StrMap + ?Sized>(map: &M) -> Vec<(&str, &M::Value)> {
    map.entries().collect()
}
