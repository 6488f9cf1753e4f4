//! Type representatives: run-time names for the families of dynamic values.

use std::fmt;

use serde_json::Value;

use crate::dispatch::dynamic::{TYPE_TAG, type_identifier};

/// A type representative, naming a family of [`Value`]s.
///
/// The built-in representatives match on the kind of JSON value.
/// `Named(tag)` matches objects whose `"@@type"` member is the string `tag`;
/// such objects are *not* matched by `Object`. Subtyping is not respected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRep {
    /// `null`.
    Null,
    /// `true` and `false`.
    Boolean,
    /// Any number.
    Number,
    /// Any string.
    String,
    /// Any array.
    Array,
    /// Objects without a string `"@@type"` member.
    Object,
    /// Objects whose `"@@type"` member equals the tag.
    Named(String),
}

impl TypeRep {
    /// A representative for a tagged object family.
    pub fn named(tag: impl Into<String>) -> Self {
        Self::Named(tag.into())
    }

    /// The type identifier this representative stands for.
    pub fn name(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Named(tag) => tag,
        }
    }

    /// Returns `true` if `value` belongs to this family.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Named(tag) => value
                .get(TYPE_TAG)
                .and_then(Value::as_str)
                .is_some_and(|found| found == tag),
            builtin => builtin.name() == type_identifier(value),
        }
    }
}

impl fmt::Display for TypeRep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Returns `true` if `value` is of the type `type_rep` represents.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tacit::accessor::{TypeRep, is};
///
/// assert!(is(&TypeRep::Number, &json!(42)));
/// assert!(!is(&TypeRep::Object, &json!(42)));
/// assert!(!is(&TypeRep::String, &json!(42)));
/// assert!(is(&TypeRep::named("geo/Point"), &json!({"@@type": "geo/Point"})));
/// assert!(!is(&TypeRep::Object, &json!({"@@type": "geo/Point"})));
/// ```
pub fn is(type_rep: &TypeRep, value: &Value) -> bool {
    type_rep.matches(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(TypeRep::Null, json!(null))]
    #[case(TypeRep::Boolean, json!(false))]
    #[case(TypeRep::Number, json!(-1.5))]
    #[case(TypeRep::String, json!(""))]
    #[case(TypeRep::Array, json!([]))]
    #[case(TypeRep::Object, json!({}))]
    fn builtin_representatives(#[case] type_rep: TypeRep, #[case] value: Value) {
        assert!(is(&type_rep, &value));
    }

    #[rstest]
    fn named_representative_needs_matching_tag() {
        let point = TypeRep::named("geo/Point");
        assert!(!is(&point, &json!({"@@type": "geo/Line"})));
        assert!(!is(&point, &json!("geo/Point")));
        assert!(!is(&point, &json!(null)));
    }

    #[rstest]
    fn non_string_tag_is_a_plain_object() {
        assert!(is(&TypeRep::Object, &json!({"@@type": 7})));
    }

    #[rstest]
    fn display_uses_the_name() {
        assert_eq!(TypeRep::Array.to_string(), "Array");
        assert_eq!(TypeRep::named("pkg/T").to_string(), "pkg/T");
    }
}
