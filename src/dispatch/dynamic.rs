//! Capability lookup for values whose type is only known at run time.
//!
//! Dynamic values are `serde_json::Value`s. A JSON object may carry a
//! string-valued `"@@type"` member, in which case that string is its type
//! identifier; otherwise the identifier is the JSON kind (`Null`,
//! `Boolean`, `Number`, `String`, `Array`, `Object`). Two objects tagged
//! with the same `"@@type"` are indistinguishable here.
//!
//! Pseudo-methods of primitive types live in a static table consulted by
//! [`bound_method`]. The table is built at compile time and never mutated.

use serde_json::Value;

/// The member that names a dynamic value's type.
pub const TYPE_TAG: &str = "@@type";

type Implementation = fn(&Value) -> Value;

/// Pseudo-methods for primitive types, keyed by type identifier and name.
static IMPLEMENTATIONS: &[(&str, &str, Implementation)] =
    &[("Boolean", "toBoolean", boolean_to_boolean)];

fn boolean_to_boolean(receiver: &Value) -> Value {
    receiver.clone()
}

/// Returns the type identifier of a dynamic value.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::dispatch::dynamic::type_identifier;
///
/// assert_eq!(type_identifier(&json!([1, 2])), "Array");
/// assert_eq!(type_identifier(&json!(null)), "Null");
/// assert_eq!(type_identifier(&json!({"@@type": "my-package/Point", "x": 1})), "my-package/Point");
/// assert_eq!(type_identifier(&json!({"@@type": 42})), "Object");
/// ```
pub fn type_identifier(value: &Value) -> &str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(members) => match members.get(TYPE_TAG) {
            Some(Value::String(tag)) => tag.as_str(),
            _ => "Object",
        },
    }
}

/// A pseudo-method bound to its receiver.
#[derive(Debug, Clone)]
pub struct BoundMethod<'a> {
    name: &'static str,
    receiver: &'a Value,
    implementation: Implementation,
}

impl BoundMethod<'_> {
    /// The method's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the method on its receiver.
    pub fn call(&self) -> Value {
        (self.implementation)(self.receiver)
    }
}

/// Looks up the pseudo-method `name` for `value`'s type.
///
/// Returns `None` when the type has no such capability; whether that is an
/// error is up to the caller.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::dispatch::dynamic::bound_method;
///
/// let truth = json!(true);
/// let method = bound_method("toBoolean", &truth).map(|method| method.call());
/// assert_eq!(method, Some(json!(true)));
/// assert!(bound_method("toBoolean", &json!(1)).is_none());
/// ```
pub fn bound_method<'a>(name: &str, value: &'a Value) -> Option<BoundMethod<'a>> {
    let identifier = type_identifier(value);
    let found = IMPLEMENTATIONS
        .iter()
        .find(|(type_name, method_name, _)| *type_name == identifier && *method_name == name)
        .map(|(_, method_name, implementation)| BoundMethod {
            name: *method_name,
            receiver: value,
            implementation: *implementation,
        });
    if found.is_none() {
        tracing::trace!(method = name, type_identifier = identifier, "no capability found");
    }
    found
}

/// Returns the truthiness of a dynamic value, if it has one.
///
/// Strings, arrays and untagged objects are true when non-empty; every
/// other value is asked for its `toBoolean` capability.
pub fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(values) => Some(!values.is_empty()),
        Value::Object(members) if !members.contains_key(TYPE_TAG) => Some(!members.is_empty()),
        _ => bound_method("toBoolean", value).and_then(|method| method.call().as_bool()),
    }
}
