//! Human-readable dumps of document trees.
//!
//! The output is deterministic: map entries are listed in sorted key order,
//! one node per line, children indented under their parent.
//!
//! ```text
//! map (1)
//!   user: map (2)
//!     name: string = "Ann"
//!     tags: array (2)
//!       0: string = "x"
//!       1: string = "y"
//! ```

use std::fmt::{self, Write};

use crate::array::Array;
use crate::map::Map;
use crate::value::Value;

/// Options for [`debug_string_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Containers deeper than this are summarized as `...`.
    pub max_depth: Option<usize>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: None,
        }
    }
}

pub fn debug_string(value: &Value) -> String {
    debug_string_with(value, &DumpOptions::default())
}

pub fn debug_string_with(value: &Value, opts: &DumpOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, None, value, 0, opts);
    out
}

pub(crate) fn dump_map(map: &Map) -> String {
    let mut out = String::new();
    let _ = write_map(&mut out, map, 0, &DumpOptions::default());
    out
}

pub(crate) fn dump_array(array: &Array) -> String {
    let mut out = String::new();
    let _ = write_array(&mut out, array, 0, &DumpOptions::default());
    out
}

fn write_node(
    out: &mut String,
    label: Option<&str>,
    value: &Value,
    depth: usize,
    opts: &DumpOptions,
) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * opts.indent)?;
    if let Some(label) = label {
        write!(out, "{label}: ")?;
    }
    match value {
        Value::Map(m) => write_map(out, m, depth, opts),
        Value::Array(a) => write_array(out, a, depth, opts),
        scalar => writeln!(out, "{}", Scalar(scalar)),
    }
}

fn truncated(depth: usize, opts: &DumpOptions) -> bool {
    opts.max_depth.is_some_and(|max| depth >= max)
}

fn write_map(out: &mut String, map: &Map, depth: usize, opts: &DumpOptions) -> fmt::Result {
    if truncated(depth, opts) && !map.is_empty() {
        return writeln!(out, "map ({}) ...", map.len());
    }
    writeln!(out, "map ({})", map.len())?;
    for key in map.keys() {
        if let Some(child) = map.get(key) {
            write_node(out, Some(key), child, depth + 1, opts)?;
        }
    }
    Ok(())
}

fn write_array(out: &mut String, array: &Array, depth: usize, opts: &DumpOptions) -> fmt::Result {
    if truncated(depth, opts) && !array.is_empty() {
        return writeln!(out, "array ({}) ...", array.len());
    }
    writeln!(out, "array ({})", array.len())?;
    for (i, child) in array.iter().enumerate() {
        write_node(out, Some(&i.to_string()), child, depth + 1, opts)?;
    }
    Ok(())
}

struct Scalar<'a>(&'a Value);

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.0.type_tag();
        match self.0 {
            Value::Nil => write!(f, "{tag}"),
            Value::Bool(b) => write!(f, "{tag} = {b}"),
            Value::Int(i) | Value::Int64(i) => write!(f, "{tag} = {i}"),
            Value::Uint(u) | Value::Uint64(u) => write!(f, "{tag} = {u}"),
            Value::Int8(i) => write!(f, "{tag} = {i}"),
            Value::Uint8(u) => write!(f, "{tag} = {u}"),
            Value::Int16(i) => write!(f, "{tag} = {i}"),
            Value::Uint16(u) => write!(f, "{tag} = {u}"),
            Value::Int32(i) => write!(f, "{tag} = {i}"),
            Value::Uint32(u) => write!(f, "{tag} = {u}"),
            Value::Float32(x) => write!(f, "{tag} = {x:?}"),
            Value::Float64(x) => write!(f, "{tag} = {x:?}"),
            Value::String(s) => write!(f, "{tag} = {s:?}"),
            Value::Time(t) => write!(f, "{tag} = {t}"),
            Value::Binary(b) => write!(f, "{tag} = <{} bytes>", b.len()),
            Value::Map(m) => write!(f, "map ({})", m.len()),
            Value::Array(a) => write!(f, "array ({})", a.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Timestamp;
    use serde_json::json;

    #[test]
    fn test_dump_scenario() {
        let v = Value::from(json!({"user": {"tags": ["x", "y"], "name": "Ann"}}));
        let expected = "\
map (1)
  user: map (2)
    name: string = \"Ann\"
    tags: array (2)
      0: string = \"x\"
      1: string = \"y\"
";
        assert_eq!(debug_string(&v), expected);
    }

    #[test]
    fn test_dump_is_order_independent() {
        let a = Value::from(json!({"b": 1, "a": 2}));
        let b = Value::from(json!({"a": 2, "b": 1}));
        assert_eq!(debug_string(&a), debug_string(&b));
    }

    #[test]
    fn test_dump_scalars() {
        let mut m = Map::new();
        m.insert("bin", Value::Binary(vec![0, 1, 2]));
        m.insert("f", 1.0f32);
        m.insert("nil", Value::Nil);
        m.insert("t", Timestamp::from_millis(5));
        m.insert("u", u32::MAX);
        let expected = "\
map (5)
  bin: unknown = <3 bytes>
  f: float32 = 1.0
  nil: nil
  t: time = 5ms
  u: int32 = 4294967295
";
        assert_eq!(m.debug_string(), expected);
    }

    #[test]
    fn test_dump_max_depth() {
        let v = Value::from(json!({"a": {"b": {"c": 1}}, "e": []}));
        let opts = DumpOptions {
            indent: 1,
            max_depth: Some(1),
        };
        let expected = "\
map (2)
 a: map (1) ...
 e: array (0)
";
        assert_eq!(debug_string_with(&v, &opts), expected);
    }

    #[test]
    fn test_dump_array_root() {
        let a = Array::from(vec![Value::from(true), Value::Int(-4)]);
        assert_eq!(a.debug_string(), "array (2)\n  0: bool = true\n  1: int = -4\n");
    }
}
