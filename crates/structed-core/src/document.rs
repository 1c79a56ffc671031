//! [`Document`]: a container root together with the wire format it was
//! decoded from.

use std::fmt;
use std::str::FromStr;

use structed_path::parse_path;
use thiserror::Error;

use crate::clone::sorted_clone;
use crate::container::Container;
use crate::error::{TreeError, TreeResult};
use crate::field::Field;
use crate::tree;
use crate::value::{TypeTag, Value};

/// Encoding a document was read from and is written back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WireFormat {
    #[default]
    MessagePack,
    Json,
    Yaml,
}

impl WireFormat {
    pub fn name(self) -> &'static str {
        match self {
            WireFormat::MessagePack => "msgpack",
            WireFormat::Json => "json",
            WireFormat::Yaml => "yaml",
        }
    }

    /// MessagePack is written with map keys in sorted order. JSON and YAML
    /// keep document order.
    pub fn sorts_keys(self) -> bool {
        matches!(self, WireFormat::MessagePack)
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown wire format: {0:?}")]
pub struct ParseFormatError(pub String);

impl FromStr for WireFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msgpack" | "messagepack" => Ok(WireFormat::MessagePack),
            "json" => Ok(WireFormat::Json),
            "yaml" | "yml" => Ok(WireFormat::Yaml),
            _ => Err(ParseFormatError(s.to_owned())),
        }
    }
}

/// A loaded document. The root is always a map or an array.
///
/// ```
/// use structed_core::{Document, Value, WireFormat};
///
/// let root = Value::from(serde_json::json!({"user": {"name": "Ann"}}));
/// let mut doc = Document::load(root, WireFormat::Json).unwrap();
/// doc.set_value_at("user/name", Value::from("Bo")).unwrap();
/// assert_eq!(doc.get_path("user/name").unwrap().get_string(), Ok("Bo"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    format: WireFormat,
}

impl Document {
    pub fn load(root: Value, format: WireFormat) -> TreeResult<Self> {
        if !root.is_container() {
            return Err(TreeError::not_container("", root.type_tag()));
        }
        tracing::debug!(
            kind = %root.type_tag(),
            size = root.len().unwrap_or(0),
            %format,
            "loaded document"
        );
        Ok(Document { root, format })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn set_format(&mut self, format: WireFormat) {
        self.format = format;
    }

    /// `TypeTag::Map` or `TypeTag::Array`.
    pub fn kind(&self) -> TypeTag {
        self.root.type_tag()
    }

    /// Independent copy of the root prepared for encoding in this
    /// document's format.
    pub fn egress(&self) -> Value {
        if self.format.sorts_keys() {
            sorted_clone(&self.root)
        } else {
            self.root.clone()
        }
    }

    pub fn debug_string(&self) -> String {
        crate::debug::debug_string(&self.root)
    }

    fn container(&self) -> TreeResult<&dyn Container> {
        self.root
            .as_container()
            .ok_or_else(|| TreeError::not_container("", self.root.type_tag()))
    }

    fn container_mut(&mut self) -> TreeResult<&mut dyn Container> {
        let found = self.root.type_tag();
        self.root
            .as_container_mut()
            .ok_or_else(|| TreeError::not_container("", found))
    }

    pub fn get_path(&self, path: &str) -> TreeResult<Field> {
        tree::get_field(self.container()?, &parse_path(path)?)
    }

    /// Write `field` into the container at `path`. A root field replaces the
    /// value at `path`; at `""` it must keep the root's kind.
    pub fn set_path(&mut self, path: &str, field: Field) -> TreeResult<()> {
        let path = parse_path(path)?;
        tree::set_field(self.container_mut()?, &path, field)
    }

    pub fn set_value_at(&mut self, path: &str, value: Value) -> TreeResult<()> {
        let path = parse_path(path)?;
        tree::put_value(self.container_mut()?, &path, value)
    }

    pub fn key_size_at(&self, path: &str) -> TreeResult<usize> {
        tree::key_size(self.container()?, &parse_path(path)?)
    }

    pub fn get_key_at(&self, path: &str, i: usize) -> TreeResult<String> {
        tree::key_at(self.container()?, &parse_path(path)?, i)
    }

    pub fn remove_path(&mut self, path: &str) -> TreeResult<Option<Value>> {
        let path = parse_path(path)?;
        tree::remove_value(self.container_mut()?, &path)
    }

    pub fn insert_at(&mut self, path: &str, value: Value) -> TreeResult<()> {
        let path = parse_path(path)?;
        tree::insert_value(self.container_mut()?, &path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(format: WireFormat) -> Document {
        Document::load(Value::from(json!({"b": {"y": 1, "x": 2}, "a": []})), format).unwrap()
    }

    #[test]
    fn test_load_rejects_scalar_root() {
        assert_eq!(
            Document::load(Value::from("s"), WireFormat::Json),
            Err(TreeError::not_container("", TypeTag::String))
        );
    }

    #[test]
    fn test_format_names() {
        for f in [WireFormat::MessagePack, WireFormat::Json, WireFormat::Yaml] {
            assert_eq!(f.to_string().parse::<WireFormat>(), Ok(f));
        }
        assert_eq!("YML".parse::<WireFormat>(), Ok(WireFormat::Yaml));
        assert!("toml".parse::<WireFormat>().is_err());
    }

    #[test]
    fn test_egress_sorts_for_msgpack_only() {
        let keys = |v: &Value| -> Vec<String> {
            v.as_map().unwrap().iter().map(|(k, _)| k.clone()).collect()
        };
        assert_eq!(keys(&doc(WireFormat::MessagePack).egress()), ["a", "b"]);
        assert_eq!(keys(&doc(WireFormat::Json).egress()), ["b", "a"]);
    }

    #[test]
    fn test_root_replacement_keeps_kind() {
        let mut d = doc(WireFormat::Json);
        assert_eq!(
            d.set_value_at("", Value::from(1i32)),
            Err(TreeError::type_mismatch(TypeTag::Map, TypeTag::Int32))
        );
        d.set_path("", Field::root(Value::from(json!({"k": 1})))).unwrap();
        assert_eq!(d.key_size_at(""), Ok(1));
        assert_eq!(d.kind(), TypeTag::Map);
    }

    #[test]
    fn test_structural_edits() {
        let mut d = doc(WireFormat::Yaml);
        d.insert_at("a/0", Value::from("first")).unwrap();
        d.insert_at("a/0", Value::from("zeroth")).unwrap();
        assert_eq!(d.get_key_at("a", 1), Ok("1".to_string()));
        assert_eq!(d.remove_path("a/0"), Ok(Some(Value::from("zeroth"))));
        assert_eq!(d.remove_path("b/x"), Ok(Some(Value::Int64(2))));
        assert_eq!(d.get_key_at("b", 0), Ok("y".to_string()));
        assert!(d.remove_path("").is_err());
    }
}
