//! [`Array`]: index-addressed container.
//!
//! Indices are always `0..len`. Writing at `len` appends one element; writing
//! past it is an error, never a sparse fill.

use structed_path::IndexStep;

use crate::container::Container;
use crate::error::{TreeError, TreeResult};
use crate::field::{Field, Slot};
use crate::value::{TypeTag, Value};

#[derive(Debug, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Overwrite `index`, or append when `index == len`.
    pub fn set_index(&mut self, index: usize, value: Value) -> TreeResult<()> {
        let len = self.items.len();
        match index {
            i if i < len => self.items[i] = value,
            i if i == len => self.items.push(value),
            i => return Err(TreeError::out_of_bounds(i, len)),
        }
        Ok(())
    }

    /// Insert at `index`, shifting later elements right. `index` may equal `len`.
    pub fn insert(&mut self, index: usize, value: Value) -> TreeResult<()> {
        if index > self.items.len() {
            return Err(TreeError::out_of_bounds(index, self.items.len()));
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> TreeResult<Value> {
        if index >= self.items.len() {
            return Err(TreeError::out_of_bounds(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn debug_string(&self) -> String {
        crate::debug::dump_array(self)
    }

    /// Resolve a segment to an index. `NotFound` for non-numeric segments,
    /// `IndexOutOfBounds` for negative or oversized ones. The upper bound is
    /// left to the caller.
    fn index_of(&self, segment: &str) -> TreeResult<usize> {
        match IndexStep::classify(segment) {
            IndexStep::Index(i) => Ok(i),
            IndexStep::OutOfRange => Err(TreeError::out_of_bounds(segment, self.items.len())),
            IndexStep::NotIndex => Err(TreeError::not_found(segment)),
        }
    }

    fn existing_index(&self, segment: &str) -> TreeResult<usize> {
        let i = self.index_of(segment)?;
        if i >= self.items.len() {
            return Err(TreeError::out_of_bounds(segment, self.items.len()));
        }
        Ok(i)
    }
}

impl Container for Array {
    fn kind(&self) -> TypeTag {
        TypeTag::Array
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn child(&self, segment: &str) -> TreeResult<&Value> {
        let i = self.existing_index(segment)?;
        Ok(&self.items[i])
    }

    fn child_mut(&mut self, segment: &str) -> TreeResult<&mut Value> {
        let i = self.existing_index(segment)?;
        Ok(&mut self.items[i])
    }

    fn field(&self, segment: &str) -> TreeResult<Field> {
        let i = self.existing_index(segment)?;
        Ok(Field::array_field(i, self.items[i].clone()))
    }

    fn key_at(&self, i: usize) -> TreeResult<String> {
        if i >= self.items.len() {
            return Err(TreeError::out_of_bounds(i, self.items.len()));
        }
        Ok(i.to_string())
    }

    fn set(&mut self, field: Field) -> TreeResult<()> {
        match field.into_parts() {
            (Slot::Index(i), value) => self.set_index(i, value),
            (slot, _) => Err(TreeError::type_mismatch(TypeTag::Array, slot.parent_tag())),
        }
    }

    fn put(&mut self, segment: &str, value: Value) -> TreeResult<()> {
        let i = self.index_of(segment)?;
        self.set_index(i, value)
    }

    fn insert_child(&mut self, segment: &str, value: Value) -> TreeResult<()> {
        let i = self.index_of(segment)?;
        self.insert(i, value)
    }

    fn remove_child(&mut self, segment: &str) -> TreeResult<Option<Value>> {
        let i = self.existing_index(segment)?;
        Ok(Some(self.items.remove(i)))
    }

    fn replace_with(&mut self, value: Value) -> TreeResult<()> {
        match value {
            Value::Array(a) => {
                *self = a;
                Ok(())
            }
            other => Err(TreeError::type_mismatch(TypeTag::Array, other.type_tag())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Array(self.clone())
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array { items }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
