//! `Setoid` and `Show` for dynamic values.

use serde_json::{Number, Value};

use crate::typeclass::{Setoid, Show, quote, show_number};

fn numbers_equal(left: &Number, right: &Number) -> bool {
    if left.is_f64() || right.is_f64() {
        match (left.as_f64(), right.as_f64()) {
            (Some(left), Some(right)) => left.equals(&right),
            _ => false,
        }
    } else {
        left == right
    }
}

/// Structural equality.
///
/// Numbers compare by value regardless of their integer or floating-point
/// representation, but `0` and `-0` differ. Objects are equal when they
/// have the same member names with equal values.
impl Setoid for Value {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => numbers_equal(left, right),
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| left.equals(right))
            }
            (Self::Object(left), Self::Object(right)) => {
                left.len() == right.len()
                    && left.iter().all(|(key, value)| {
                        right.get(key).is_some_and(|other| value.equals(other))
                    })
            }
            _ => false,
        }
    }
}

impl Show for Value {
    fn show(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => match number.as_f64() {
                Some(float) if number.is_f64() => show_number(float),
                _ => number.to_string(),
            },
            Self::String(text) => quote(text),
            Self::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(Show::show).collect();
                format!("[{}]", rendered.join(", "))
            }
            Self::Object(members) => {
                let rendered: Vec<String> = members
                    .iter()
                    .map(|(key, value)| format!("{}: {}", quote(key), value.show()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1), json!(1.0))]
    #[case(json!([1, {"a": "b"}]), json!([1, {"a": "b"}]))]
    #[case(json!({"x": null, "y": [true]}), json!({"y": [true], "x": null}))]
    fn equal_values(#[case] left: Value, #[case] right: Value) {
        assert!(left.equals(&right));
        assert!(right.equals(&left));
    }

    #[rstest]
    #[case(json!(1), json!("1"))]
    #[case(json!([1, 2]), json!([2, 1]))]
    #[case(json!({"x": 1}), json!({"x": 1, "y": 2}))]
    #[case(json!({"x": 1}), json!({"y": 1}))]
    #[case(json!(null), json!(false))]
    fn unequal_values(#[case] left: Value, #[case] right: Value) {
        assert!(!left.equals(&right));
    }

    #[rstest]
    fn negative_zero_differs_from_zero() {
        let negative = Value::from(-0.0);
        let positive = Value::from(0.0);
        assert!(!negative.equals(&positive));
        assert_eq!(negative.show(), "-0");
    }

    #[rstest]
    fn show_renders_nested_values() {
        let value = json!({"b": [1, "two", null], "a": {"c": false}});
        assert_eq!(value.show(), r#"{"a": {"c": false}, "b": [1, "two", null]}"#);
        assert_eq!(json!(2.5).show(), "2.5");
    }
}
