//! Deep copies of document trees.
//!
//! Maps and arrays are rebuilt into new backing collections and scalars are
//! copied by value, so a clone never shares storage with its source. The
//! `Clone` impls of [`Value`], [`Map`] and [`Array`] go through here.

use crate::array::Array;
use crate::map::Map;
use crate::value::Value;

/// Creates a deep clone of any value.
///
/// # Examples
///
/// ```
/// use structed_core::{clone::clone_value, Value};
///
/// let original = Value::from(serde_json::json!({"foo": [1, 2, 3]}));
/// let cloned = clone_value(&original);
/// assert_eq!(original, cloned);
/// ```
pub fn clone_value(value: &Value) -> Value {
    match value {
        Value::Nil => Value::Nil,
        Value::Bool(b) => Value::Bool(*b),
        Value::Int(i) => Value::Int(*i),
        Value::Uint(u) => Value::Uint(*u),
        Value::Int8(i) => Value::Int8(*i),
        Value::Uint8(u) => Value::Uint8(*u),
        Value::Int16(i) => Value::Int16(*i),
        Value::Uint16(u) => Value::Uint16(*u),
        Value::Int32(i) => Value::Int32(*i),
        Value::Uint32(u) => Value::Uint32(*u),
        Value::Int64(i) => Value::Int64(*i),
        Value::Uint64(u) => Value::Uint64(*u),
        Value::Float32(f) => Value::Float32(*f),
        Value::Float64(f) => Value::Float64(*f),
        Value::String(s) => Value::String(s.as_str().to_owned()),
        Value::Time(t) => Value::Time(*t),
        Value::Binary(b) => Value::Binary(b.as_slice().to_vec()),
        Value::Map(m) => Value::Map(clone_map(m)),
        Value::Array(a) => Value::Array(clone_array(a)),
    }
}

pub fn clone_map(map: &Map) -> Map {
    let mut out = Map::with_capacity(map.len());
    for (key, val) in map {
        out.insert(key.as_str(), clone_value(val));
    }
    out
}

pub fn clone_array(array: &Array) -> Array {
    array.iter().map(clone_value).collect()
}

/// Deep clone with every map rebuilt in sorted key order.
///
/// Used on egress for wire formats that encode maps with sorted keys.
///
/// ```
/// use structed_core::{clone::sorted_clone, Value};
///
/// let v = Value::from(serde_json::json!({"b": 1, "a": {"d": 2, "c": 3}}));
/// let sorted = sorted_clone(&v);
/// let keys: Vec<&String> = sorted.as_map().unwrap().iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub fn sorted_clone(value: &Value) -> Value {
    match value {
        Value::Map(m) => {
            let mut out = Map::with_capacity(m.len());
            for key in m.keys() {
                if let Some(val) = m.get(key) {
                    out.insert(key, sorted_clone(val));
                }
            }
            Value::Map(out)
        }
        Value::Array(a) => Value::Array(a.iter().map(sorted_clone).collect()),
        other => clone_value(other),
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        clone_value(self)
    }
}

impl Clone for Map {
    fn clone(&self) -> Self {
        clone_map(self)
    }
}

impl Clone for Array {
    fn clone(&self) -> Self {
        clone_array(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;
    use serde_json::json;

    #[test]
    fn test_clone_scalars() {
        for v in [
            Value::Nil,
            Value::Bool(true),
            Value::Uint16(9),
            Value::Float32(0.25),
            Value::from("s"),
            Value::Binary(vec![1, 2]),
        ] {
            assert_eq!(clone_value(&v), v);
        }
    }

    #[test]
    fn test_clone_nested() {
        let value = Value::from(json!({
            "array": [1, 2, {"nested": true}],
            "object": {"a": "b"},
            "scalar": 42
        }));
        assert_eq!(clone_value(&value), value);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Value::from(json!({"arr": [1, 2, 3], "m": {"k": "v"}}));
        let mut cloned = original.clone();

        let m = cloned.as_map_mut().unwrap();
        m.set_value_at("arr/3", Value::from(4i32)).unwrap();
        m.set_value_at("m/k", Value::from("changed")).unwrap();

        assert_eq!(original.as_map().unwrap().key_size_at("arr"), Ok(3));
        assert_eq!(
            original.as_map().unwrap().get_path("m/k").unwrap().get_string(),
            Ok("v")
        );
        assert_ne!(original, cloned);
    }

    #[test]
    fn test_clone_keeps_document_order() {
        let v = Value::from(json!({"z": 1, "a": 2}));
        let keys: Vec<String> = clone_value(&v)
            .as_map()
            .unwrap()
            .iter()
            .map(|(k, _)| k.clone())
            .collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_sorted_clone_recurses_into_arrays() {
        let v = Value::from(json!([{"y": 1, "x": 2}]));
        let sorted = sorted_clone(&v);
        let inner = sorted.as_array().unwrap().get(0).unwrap().as_map().unwrap();
        let keys: Vec<&String> = inner.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(sorted, v);
    }
}
