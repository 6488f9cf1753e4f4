//! Safe property access on dynamic values.
//!
//! Every accessor checks the value it finds against a [`TypeRep`] and
//! returns `Nothing` instead of a value of the wrong type, so callers never
//! have to re-check what they got.

use serde_json::Value;

use super::TypeRep;
use crate::control::Maybe::{self, Just, Nothing};

pub(super) fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(members) => members.get(key),
        Value::Array(elements) => key.parse::<usize>().ok().and_then(|index| elements.get(index)),
        _ => None,
    }
}

fn checked<'a>(type_rep: &TypeRep, found: Option<&'a Value>) -> Maybe<&'a Value> {
    match found {
        Some(value) if type_rep.matches(value) => Just(value),
        _ => Nothing,
    }
}

/// Returns the property `key` of `value`, if present and of type `type_rep`.
///
/// Objects are looked up by member name and arrays by decimal index.
/// Nothing else has properties: the result borrows from `value`, so there
/// are no computed members such as a string's or array's `length`. Use
/// `list::List::element_count` or `Vec::len` for those.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::{TypeRep, get};
/// use tacit::control::Maybe::{Just, Nothing};
///
/// assert_eq!(get(&TypeRep::Number, "x", &json!({"x": 1, "y": 2})), Just(&json!(1)));
/// assert_eq!(get(&TypeRep::Number, "x", &json!({"x": "1", "y": "2"})), Nothing);
/// assert_eq!(get(&TypeRep::Number, "x", &json!({})), Nothing);
/// ```
pub fn get<'a>(type_rep: &TypeRep, key: &str, value: &'a Value) -> Maybe<&'a Value> {
    checked(type_rep, member(value, key))
}

/// Follows a path of property names, checking the final value's type.
///
/// An empty path checks `value` itself. A missing property anywhere on the
/// path yields `Nothing`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::{TypeRep, gets};
/// use tacit::control::Maybe::{Just, Nothing};
///
/// let nested = json!({"a": {"b": {"c": 42}}});
/// assert_eq!(gets(&TypeRep::Number, &["a", "b", "c"], &nested), Just(&json!(42)));
/// assert_eq!(gets(&TypeRep::String, &["a", "b", "c"], &nested), Nothing);
/// assert_eq!(gets(&TypeRep::Number, &["a", "b", "c"], &json!({})), Nothing);
/// ```
pub fn gets<'a, K: AsRef<str>>(type_rep: &TypeRep, path: &[K], value: &'a Value) -> Maybe<&'a Value> {
    let found = path
        .iter()
        .try_fold(value, |current, key| member(current, key.as_ref()));
    checked(type_rep, found)
}

/// [`get`] applied to every element of `values`.
///
/// The result has one entry per input value.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::{TypeRep, pluck};
/// use tacit::control::Maybe::{Just, Nothing};
///
/// let rows = [json!({"x": 1}), json!({"x": 2}), json!({"x": "3"}), json!({"x": null}), json!({})];
/// assert_eq!(
///     pluck(&TypeRep::Number, "x", &rows),
///     vec![Just(&json!(1)), Just(&json!(2)), Nothing, Nothing, Nothing]
/// );
/// ```
pub fn pluck<'a>(type_rep: &TypeRep, key: &str, values: &'a [Value]) -> Vec<Maybe<&'a Value>> {
    values.iter().map(|value| get(type_rep, key, value)).collect()
}

/// Parses `text` as JSON, keeping the result only if it is of type
/// `type_rep`.
///
/// Malformed input yields `Nothing`; the parse error is logged at trace
/// level and discarded.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::{TypeRep, parse_json};
/// use tacit::control::Maybe::{Just, Nothing};
///
/// assert_eq!(parse_json(&TypeRep::Array, r#"["foo","bar"]"#), Just(json!(["foo", "bar"])));
/// assert_eq!(parse_json(&TypeRep::Array, "["), Nothing);
/// assert_eq!(parse_json(&TypeRep::Object, r#"["foo","bar"]"#), Nothing);
/// ```
pub fn parse_json(type_rep: &TypeRep, text: &str) -> Maybe<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) if type_rep.matches(&value) => Just(value),
        Ok(_) => Nothing,
        Err(error) => {
            tracing::trace!(%error, expected = type_rep.name(), "discarding malformed JSON");
            Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn get_reads_array_indices() {
        let pair = json!(["a", 1]);
        assert_eq!(get(&TypeRep::String, "0", &pair), Just(&json!("a")));
        assert_eq!(get(&TypeRep::Number, "1", &pair), Just(&json!(1)));
        assert_eq!(get(&TypeRep::Number, "2", &pair), Nothing);
        assert_eq!(get(&TypeRep::Number, "-1", &pair), Nothing);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(3))]
    #[case(json!("text"))]
    fn get_on_scalars_is_nothing(#[case] scalar: Value) {
        assert_eq!(get(&TypeRep::Number, "0", &scalar), Nothing);
        assert_eq!(get(&TypeRep::Number, "length", &scalar), Nothing);
    }

    #[rstest]
    fn length_is_not_a_stored_member() {
        assert_eq!(get(&TypeRep::Number, "length", &json!([1, 2, 3])), Nothing);
        let declared = json!({"length": 3});
        assert_eq!(get(&TypeRep::Number, "length", &declared), Just(&json!(3)));
    }

    #[rstest]
    fn gets_with_empty_path_checks_the_value() {
        let empty: [&str; 0] = [];
        assert_eq!(gets(&TypeRep::Number, &empty, &json!(5)), Just(&json!(5)));
        assert_eq!(gets(&TypeRep::String, &empty, &json!(5)), Nothing);
    }

    #[rstest]
    fn gets_stops_at_null() {
        let value = json!({"a": null});
        assert_eq!(gets(&TypeRep::Number, &["a", "b"], &value), Nothing);
        assert_eq!(gets(&TypeRep::Null, &["a"], &value), Just(&Value::Null));
    }

    #[rstest]
    fn gets_accepts_owned_keys() {
        let path = vec!["outer".to_string(), "inner".to_string()];
        let value = json!({"outer": {"inner": [1]}});
        assert_eq!(gets(&TypeRep::Array, &path, &value), Just(&json!([1])));
    }

    #[rstest]
    fn pluck_of_nothing_is_empty() {
        assert!(pluck(&TypeRep::Number, "x", &[]).is_empty());
    }

    #[rstest]
    fn parse_json_checks_named_types() {
        let text = r#"{"@@type": "geo/Point", "x": 1}"#;
        assert!(parse_json(&TypeRep::named("geo/Point"), text).is_just());
        assert!(parse_json(&TypeRep::Object, text).is_nothing());
    }

    #[rstest]
    #[case("")]
    #[case("{")]
    #[case("[1,]")]
    fn parse_json_rejects_malformed_input(#[case] text: &str) {
        assert_eq!(parse_json(&TypeRep::Array, text), Nothing);
    }
}
