#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array($crate::JsonArray::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array($crate::JsonArray::from(vec![$($crate::json!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    // Fallback: any expression convertible into a value
    ($other:expr) => {
        $crate::JsonValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonArray, JsonMap, JsonValue, Number};

    #[test]
    fn json_macro_primitives() {
        assert_eq!(json!(null), JsonValue::Null);
        assert_eq!(json!(true), JsonValue::Bool(true));
        assert_eq!(json!(false), JsonValue::Bool(false));
        assert_eq!(json!(42), JsonValue::Number(Number::Integer(42)));
        assert_eq!(json!(2.5), JsonValue::Number(Number::Float(2.5)));
        assert_eq!(json!("hello"), JsonValue::String("hello".to_string()));
    }

    #[test]
    fn json_macro_arrays() {
        assert_eq!(json!([]), JsonValue::Array(JsonArray::new()));

        let arr = json!([1, 2, 3]);
        match arr {
            JsonValue::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items.get(0), Some(JsonValue::from(1)));
                assert_eq!(items.get(1), Some(JsonValue::from(2)));
                assert_eq!(items.get(2), Some(JsonValue::from(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn json_macro_objects() {
        assert_eq!(json!({}), JsonValue::Object(JsonMap::new()));

        let obj = json!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JsonValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(JsonValue::from("Alice")));
                assert_eq!(map.get("age"), Some(JsonValue::from(30)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn json_macro_nests() {
        let doc = json!({
            "items": [1, [true, null], {"deep": "yes"}],
            "empty": {}
        });
        let map = doc.try_object().unwrap();
        assert_eq!(map.get_array("items").unwrap().len(), 3);
        assert!(map.get_object("empty").unwrap().is_empty());
    }
}
