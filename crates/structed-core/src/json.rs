//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! Ingress keeps object key order. Integers become `Int64` when they fit in
//! an `i64` and `Uint64` otherwise; every other number becomes `Float64`.

use serde_json::{Number, Value as JsonValue};

use crate::array::Array;
use crate::map::Map;
use crate::value::Value;

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Nil,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint64(u)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(0.0))
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

fn float(f: f64) -> JsonValue {
    Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}

impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Nil => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) | Value::Int64(i) => JsonValue::from(*i),
            Value::Uint(u) | Value::Uint64(u) => JsonValue::from(*u),
            Value::Int8(i) => JsonValue::from(*i),
            Value::Uint8(u) => JsonValue::from(*u),
            Value::Int16(i) => JsonValue::from(*i),
            Value::Uint16(u) => JsonValue::from(*u),
            Value::Int32(i) => JsonValue::from(*i),
            Value::Uint32(u) => JsonValue::from(*u),
            Value::Float32(f) => float(f64::from(*f)),
            Value::Float64(f) => float(*f),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Time(t) => JsonValue::from(t.as_millis()),
            Value::Binary(b) => JsonValue::Array(b.iter().map(|&x| JsonValue::from(x)).collect()),
            Value::Map(m) => JsonValue::from(m),
            Value::Array(a) => JsonValue::from(a),
        }
    }
}

impl From<&Map> for JsonValue {
    fn from(m: &Map) -> Self {
        JsonValue::Object(
            m.iter()
                .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                .collect(),
        )
    }
}

impl From<&Array> for JsonValue {
    fn from(a: &Array) -> Self {
        JsonValue::Array(a.iter().map(JsonValue::from).collect())
    }
}
