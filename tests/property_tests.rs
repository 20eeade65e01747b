//! Property-based tests for the parse/serialize round trip.
//!
//! These complement the example-driven tests by checking the core guarantees
//! over generated trees: serializing in any style and parsing the result
//! yields an equal tree, and number kinds are preserved.

use proptest::prelude::*;
use json_tree::{from_str, to_string_styled, JsonArray, JsonMap, JsonValue, Number, Style};

/// Finite floats only; the data model has no representation for NaN or
/// infinities.
fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |f| f.is_finite())
}

fn leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(|i| JsonValue::Number(Number::Integer(i))),
        finite_f64().prop_map(|f| JsonValue::Number(Number::Float(f))),
        any::<String>().prop_map(JsonValue::String),
    ]
}

/// Acyclic trees up to a few levels deep.
fn tree() -> impl Strategy<Value = JsonValue> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(|items| JsonValue::Array(JsonArray::from(items))),
            prop::collection::btree_map(any::<String>(), inner, 0..8).prop_map(|entries| {
                let map = JsonMap::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                JsonValue::Object(map)
            }),
        ]
    })
}

fn round_trips(value: &JsonValue, style: Style) -> bool {
    let text = to_string_styled(value, style);
    match from_str(&text) {
        Ok(parsed) => parsed == *value,
        Err(e) => {
            eprintln!("parse failed: {}", e);
            eprintln!("serialized was: {}", text);
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_compact_round_trip(value in tree()) {
        prop_assert!(round_trips(&value, Style::Compact));
    }

    #[test]
    fn prop_spaced_round_trip(value in tree()) {
        prop_assert!(round_trips(&value, Style::Spaced));
    }

    #[test]
    fn prop_indented_round_trip(value in tree()) {
        prop_assert!(round_trips(&value, Style::Indented));
    }

    #[test]
    fn prop_integer_kind_survives(i in any::<i64>()) {
        let text = to_string_styled(&JsonValue::Number(Number::Integer(i)), Style::Compact);
        prop_assert_eq!(from_str(&text).unwrap(), JsonValue::Number(Number::Integer(i)));
    }

    #[test]
    fn prop_float_kind_survives(f in finite_f64()) {
        let text = to_string_styled(&JsonValue::Number(Number::Float(f)), Style::Compact);
        prop_assert_eq!(from_str(&text).unwrap(), JsonValue::Number(Number::Float(f)));
    }

    #[test]
    fn prop_string_escaping_round_trips(s in any::<String>()) {
        let text = to_string_styled(&JsonValue::String(s.clone()), Style::Compact);
        prop_assert_eq!(from_str(&text).unwrap(), JsonValue::String(s));
    }

    #[test]
    fn prop_key_order_is_preserved(keys in prop::collection::btree_set("[a-z]{1,8}", 1..10)) {
        let map = JsonMap::new();
        for key in &keys {
            map.insert(key.clone(), JsonValue::Null);
        }
        let text = to_string_styled(&JsonValue::Object(map.clone()), Style::Compact);
        let parsed = from_str(&text).unwrap();
        prop_assert_eq!(parsed.try_object().unwrap().keys(), map.keys());
    }
}
