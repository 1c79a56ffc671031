//! [`Map`]: string-keyed container.
//!
//! Entries keep their decode order so a document re-encodes with the key order
//! it was read with. Index-based enumeration ([`Map::keys`], `key_at`) uses the
//! lexicographically sorted key order instead, which is stable no matter how
//! the map was built.

use indexmap::IndexMap;

use crate::container::Container;
use crate::error::{TreeError, TreeResult};
use crate::field::{Field, Slot};
use crate::value::{TypeTag, Value};

#[derive(Debug, Default, PartialEq)]
pub struct Map {
    items: IndexMap<String, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            items: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.items.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Insert or overwrite `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.items.insert(key.into(), value.into())
    }

    /// Delete `key` if present. Missing keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.items.shift_remove(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.items.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Entries in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.items.iter()
    }

    pub fn items(&self) -> &IndexMap<String, Value> {
        &self.items
    }

    pub fn into_items(self) -> IndexMap<String, Value> {
        self.items
    }

    pub fn debug_string(&self) -> String {
        crate::debug::dump_map(self)
    }
}

impl Container for Map {
    fn kind(&self) -> TypeTag {
        TypeTag::Map
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn child(&self, segment: &str) -> TreeResult<&Value> {
        self.items
            .get(segment)
            .ok_or_else(|| TreeError::not_found(segment))
    }

    fn child_mut(&mut self, segment: &str) -> TreeResult<&mut Value> {
        self.items
            .get_mut(segment)
            .ok_or_else(|| TreeError::not_found(segment))
    }

    fn field(&self, segment: &str) -> TreeResult<Field> {
        let value = self.child(segment)?;
        Ok(Field::map_field(segment, value.clone()))
    }

    fn key_at(&self, i: usize) -> TreeResult<String> {
        let keys = self.keys();
        keys.get(i)
            .map(|k| (*k).to_owned())
            .ok_or_else(|| TreeError::out_of_bounds(i, keys.len()))
    }

    fn set(&mut self, field: Field) -> TreeResult<()> {
        match field.into_parts() {
            (Slot::Key(key), value) => {
                self.items.insert(key, value);
                Ok(())
            }
            (slot, _) => Err(TreeError::type_mismatch(TypeTag::Map, slot.parent_tag())),
        }
    }

    fn put(&mut self, segment: &str, value: Value) -> TreeResult<()> {
        self.items.insert(segment.to_owned(), value);
        Ok(())
    }

    fn insert_child(&mut self, segment: &str, value: Value) -> TreeResult<()> {
        self.put(segment, value)
    }

    fn remove_child(&mut self, segment: &str) -> TreeResult<Option<Value>> {
        Ok(self.remove(segment))
    }

    fn replace_with(&mut self, value: Value) -> TreeResult<()> {
        match value {
            Value::Map(m) => {
                *self = m;
                Ok(())
            }
            other => Err(TreeError::type_mismatch(TypeTag::Map, other.type_tag())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }
}

impl From<IndexMap<String, Value>> for Map {
    fn from(items: IndexMap<String, Value>) -> Self {
        Map { items }
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Map {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Map {
        let mut m = Map::new();
        m.insert("b", 2i32);
        m.insert("a", 1i32);
        m.insert("c", 3i32);
        m
    }

    #[test]
    fn test_keys_sorted_regardless_of_insertion() {
        let m = sample();
        assert_eq!(m.keys(), vec!["a", "b", "c"]);
        assert_eq!(m.key_at(0).unwrap(), "a");
        assert_eq!(m.key_at(2).unwrap(), "c");
        assert_eq!(
            m.key_at(3),
            Err(TreeError::IndexOutOfBounds {
                index: "3".into(),
                len: 3
            })
        );
    }

    #[test]
    fn test_document_order_kept() {
        let m = sample();
        let order: Vec<&String> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_keeps_order_and_is_noop_when_missing() {
        let mut m = sample();
        assert_eq!(m.remove("a"), Some(Value::Int32(1)));
        assert_eq!(m.remove("a"), None);
        let order: Vec<&String> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(order, ["b", "c"]);
    }

    #[test]
    fn test_set_rejects_array_field() {
        let mut m = sample();
        let err = m.set(Field::array_field(0, Value::Nil)).unwrap_err();
        assert_eq!(err, TreeError::type_mismatch(TypeTag::Map, TypeTag::Array));
        let err = m.set(Field::root(Value::Nil)).unwrap_err();
        assert_eq!(err, TreeError::type_mismatch(TypeTag::Map, TypeTag::Nil));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_set_map_field() {
        let mut m = sample();
        m.set(Field::map_field("d", Value::from("x"))).unwrap();
        m.set(Field::map_field("a", Value::Nil)).unwrap();
        assert_eq!(m.get("d"), Some(&Value::from("x")));
        assert_eq!(m.get("a"), Some(&Value::Nil));
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_child_not_found() {
        let m = sample();
        assert_eq!(m.child("zz"), Err(TreeError::not_found("zz")));
    }

    #[test]
    fn test_replace_with_requires_map() {
        let mut m = sample();
        assert!(m.replace_with(Value::from(Vec::<Value>::new())).is_err());
        m.replace_with(Value::Map(Map::new())).unwrap();
        assert!(m.is_empty());
    }
}
