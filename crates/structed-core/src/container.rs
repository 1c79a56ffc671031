//! The [`Container`] trait shared by [`Map`](crate::Map) and
//! [`Array`](crate::Array).
//!
//! Implementors provide single-level access by segment; the path-relative API
//! (`get_path`, `set_path`, …) is built on top of it in [`crate::tree`]. Paths
//! are relative to the container, and `""` addresses the container itself.

use structed_path::parse_path;

use crate::error::TreeResult;
use crate::field::Field;
use crate::tree;
use crate::value::{TypeTag, Value};

pub trait Container {
    /// `TypeTag::Map` or `TypeTag::Array`.
    fn kind(&self) -> TypeTag;

    /// Number of keys or elements.
    fn size(&self) -> usize;

    /// The direct child addressed by `segment`.
    fn child(&self, segment: &str) -> TreeResult<&Value>;

    fn child_mut(&mut self, segment: &str) -> TreeResult<&mut Value>;

    /// A copy of the direct child, addressed for writing back here.
    fn field(&self, segment: &str) -> TreeResult<Field>;

    /// The `i`-th key: sorted key order for maps, the decimal index for arrays.
    fn key_at(&self, i: usize) -> TreeResult<String>;

    /// Write a field at this level. The field must have been built for this
    /// kind of container.
    fn set(&mut self, field: Field) -> TreeResult<()>;

    /// Overwrite the child at `segment`. Maps insert missing keys, arrays
    /// append when the index equals the length.
    fn put(&mut self, segment: &str, value: Value) -> TreeResult<()>;

    /// Add a child at `segment`. Arrays shift later elements right.
    fn insert_child(&mut self, segment: &str, value: Value) -> TreeResult<()>;

    /// Remove the child at `segment`. Missing map keys return `None`.
    fn remove_child(&mut self, segment: &str) -> TreeResult<Option<Value>>;

    /// Replace the whole container. `value` must be of the same kind.
    fn replace_with(&mut self, value: Value) -> TreeResult<()>;

    /// Deep copy of the container as a value.
    fn to_value(&self) -> Value;

    /// Read the value at `path`.
    fn get_path(&self, path: &str) -> TreeResult<Field>
    where
        Self: Sized,
    {
        tree::get_field(self, &parse_path(path)?)
    }

    /// Write `field` into the container at `path`. The field's own key or
    /// index selects the slot; a root field replaces the value at `path`.
    fn set_path(&mut self, path: &str, field: Field) -> TreeResult<()>
    where
        Self: Sized,
    {
        tree::set_field(self, &parse_path(path)?, field)
    }

    /// Write `value` at the full `path`.
    fn set_value_at(&mut self, path: &str, value: Value) -> TreeResult<()>
    where
        Self: Sized,
    {
        tree::put_value(self, &parse_path(path)?, value)
    }

    /// Number of children of the container at `path`.
    fn key_size_at(&self, path: &str) -> TreeResult<usize>
    where
        Self: Sized,
    {
        tree::key_size(self, &parse_path(path)?)
    }

    /// The `i`-th key of the container at `path`.
    fn get_key_at(&self, path: &str, i: usize) -> TreeResult<String>
    where
        Self: Sized,
    {
        tree::key_at(self, &parse_path(path)?, i)
    }

    /// Remove the value at `path`.
    fn remove_path(&mut self, path: &str) -> TreeResult<Option<Value>>
    where
        Self: Sized,
    {
        tree::remove_value(self, &parse_path(path)?)
    }

    /// Insert `value` at `path`, shifting array elements.
    fn insert_at(&mut self, path: &str, value: Value) -> TreeResult<()>
    where
        Self: Sized,
    {
        tree::insert_value(self, &parse_path(path)?, value)
    }
}
