//! [`Field`]: a value paired with the slot it is read from or written to.

use crate::array::Array;
use crate::error::{TreeError, TreeResult};
use crate::map::Map;
use crate::value::{Timestamp, TypeTag, Value};

/// Where a [`Field`] lives inside its parent container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The value addressed by a path itself, with no parent slot.
    Root,
    /// A key of a parent [`Map`].
    Key(String),
    /// An index of a parent [`Array`].
    Index(usize),
}

impl Slot {
    /// Tag of the container this slot belongs to. Root slots report `Nil`.
    pub fn parent_tag(&self) -> TypeTag {
        match self {
            Slot::Root => TypeTag::Nil,
            Slot::Key(_) => TypeTag::Map,
            Slot::Index(_) => TypeTag::Array,
        }
    }
}

/// A single addressable cell.
///
/// A field owns a copy of its payload but not its parent container; it
/// carries a value together with the place it should be written back to.
/// Typed getters never coerce across widths: [`Field::get_int32`] on an
/// `Int64` payload fails with [`TreeError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    slot: Slot,
    value: Value,
}

macro_rules! int_accessors {
    ($($get:ident, $set:ident, $ty:ty, $signed:ident, $unsigned:ident, $tag:ident;)*) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "`. The unsigned payload of the same width is reinterpreted.")]
            pub fn $get(&self) -> TreeResult<$ty> {
                match &self.value {
                    Value::$signed(v) => Ok(*v),
                    Value::$unsigned(v) => Ok(*v as $ty),
                    other => Err(TreeError::type_mismatch(TypeTag::$tag, other.type_tag())),
                }
            }

            #[doc = concat!("Overwrite the payload with a `", stringify!($ty), "`.")]
            pub fn $set(&mut self, v: $ty) {
                self.value = Value::$signed(v);
            }
        )*
    };
}

impl Field {
    /// A field stored under `key` of a map.
    pub fn map_field(key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if value.type_tag() == TypeTag::Unknown {
            tracing::warn!(key = %key, "field holds a value of unknown type");
        }
        Field {
            slot: Slot::Key(key),
            value,
        }
    }

    /// A field stored at `index` of an array.
    pub fn array_field(index: usize, value: Value) -> Self {
        if value.type_tag() == TypeTag::Unknown {
            tracing::warn!(index, "field holds a value of unknown type");
        }
        Field {
            slot: Slot::Index(index),
            value,
        }
    }

    /// A field for the value at a path itself.
    pub fn root(value: Value) -> Self {
        Field {
            slot: Slot::Root,
            value,
        }
    }

    #[inline]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// True when the parent is a map.
    #[inline]
    pub fn map_parent(&self) -> bool {
        matches!(self.slot, Slot::Key(_))
    }

    pub fn key(&self) -> Option<&str> {
        match &self.slot {
            Slot::Key(k) => Some(k),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.slot {
            Slot::Index(i) => Some(i),
            _ => None,
        }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }

    pub(crate) fn into_parts(self) -> (Slot, Value) {
        (self.slot, self.value)
    }

    /// Overwrite the payload with an arbitrary value.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    #[inline]
    pub fn type_tag(&self) -> TypeTag {
        self.value.type_tag()
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }

    int_accessors! {
        get_int, set_int, i64, Int, Uint, Int;
        get_int8, set_int8, i8, Int8, Uint8, Int8;
        get_int16, set_int16, i16, Int16, Uint16, Int16;
        get_int32, set_int32, i32, Int32, Uint32, Int32;
        get_int64, set_int64, i64, Int64, Uint64, Int64;
    }

    pub fn get_bool(&self) -> TreeResult<bool> {
        match &self.value {
            Value::Bool(b) => Ok(*b),
            other => Err(TreeError::type_mismatch(TypeTag::Bool, other.type_tag())),
        }
    }

    pub fn set_bool(&mut self, v: bool) {
        self.value = Value::Bool(v);
    }

    pub fn get_string(&self) -> TreeResult<&str> {
        match &self.value {
            Value::String(s) => Ok(s),
            other => Err(TreeError::type_mismatch(TypeTag::String, other.type_tag())),
        }
    }

    pub fn set_string(&mut self, v: impl Into<String>) {
        self.value = Value::String(v.into());
    }

    pub fn get_float32(&self) -> TreeResult<f32> {
        match &self.value {
            Value::Float32(f) => Ok(*f),
            other => Err(TreeError::type_mismatch(TypeTag::Float32, other.type_tag())),
        }
    }

    pub fn set_float32(&mut self, v: f32) {
        self.value = Value::Float32(v);
    }

    pub fn get_float64(&self) -> TreeResult<f64> {
        match &self.value {
            Value::Float64(f) => Ok(*f),
            other => Err(TreeError::type_mismatch(TypeTag::Float64, other.type_tag())),
        }
    }

    pub fn set_float64(&mut self, v: f64) {
        self.value = Value::Float64(v);
    }

    /// Read a timestamp as milliseconds since the Unix epoch.
    pub fn get_time(&self) -> TreeResult<i64> {
        match &self.value {
            Value::Time(t) => Ok(t.as_millis()),
            other => Err(TreeError::type_mismatch(TypeTag::Time, other.type_tag())),
        }
    }

    /// Store a timestamp given in milliseconds since the Unix epoch.
    pub fn set_time(&mut self, millis: i64) {
        self.value = Value::Time(Timestamp::from_millis(millis));
    }

    /// Live view of a map payload.
    pub fn get_map(&self) -> TreeResult<&Map> {
        match &self.value {
            Value::Map(m) => Ok(m),
            other => Err(TreeError::type_mismatch(TypeTag::Map, other.type_tag())),
        }
    }

    pub fn get_map_mut(&mut self) -> TreeResult<&mut Map> {
        match &mut self.value {
            Value::Map(m) => Ok(m),
            other => Err(TreeError::type_mismatch(TypeTag::Map, other.type_tag())),
        }
    }

    pub fn set_map(&mut self, map: Map) {
        self.value = Value::Map(map);
    }

    /// Live view of an array payload.
    pub fn get_array(&self) -> TreeResult<&Array> {
        match &self.value {
            Value::Array(a) => Ok(a),
            other => Err(TreeError::type_mismatch(TypeTag::Array, other.type_tag())),
        }
    }

    pub fn get_array_mut(&mut self) -> TreeResult<&mut Array> {
        match &mut self.value {
            Value::Array(a) => Ok(a),
            other => Err(TreeError::type_mismatch(TypeTag::Array, other.type_tag())),
        }
    }

    pub fn set_array(&mut self, array: Array) {
        self.value = Value::Array(array);
    }
}
