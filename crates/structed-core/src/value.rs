//! [`Value`]: one node of a document tree.
//!
//! The set of representable payloads is closed. Integer payloads remember the
//! signedness they were decoded with, but signed and unsigned variants of the
//! same width report the same [`TypeTag`].

use std::fmt;

use crate::array::Array;
use crate::container::Container;
use crate::map::Map;

/// Runtime type tag of a [`Value`].
///
/// Always derived from the payload, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Nil,
    Map,
    Array,
    /// Platform-width integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Bool,
    String,
    Float32,
    Float64,
    Time,
    /// Payload outside the editable set, carried through untouched.
    Unknown,
}

impl TypeTag {
    /// Stable lowercase name, used in error messages and dumps.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Nil => "nil",
            TypeTag::Map => "map",
            TypeTag::Array => "array",
            TypeTag::Int => "int",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Bool => "bool",
            TypeTag::String => "string",
            TypeTag::Float32 => "float32",
            TypeTag::Float64 => "float64",
            TypeTag::Time => "time",
            TypeTag::Unknown => "unknown",
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, TypeTag::Map | TypeTag::Array)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in time, stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A document node: a scalar, a [`Map`], or an [`Array`].
///
/// `Clone` is a deep copy (see [`crate::clone`]).
#[derive(Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Time(Timestamp),
    /// Opaque bytes (MessagePack `bin`/`ext` payloads). Tagged `Unknown`.
    Binary(Vec<u8>),
    Map(Map),
    Array(Array),
}

/// Compute the type tag of `value`.
///
/// # Example
///
/// ```
/// use structed_core::{type_of, TypeTag, Value};
///
/// assert_eq!(type_of(&Value::Uint32(7)), TypeTag::Int32);
/// assert_eq!(type_of(&Value::Binary(vec![1])), TypeTag::Unknown);
/// ```
pub fn type_of(value: &Value) -> TypeTag {
    match value {
        Value::Nil => TypeTag::Nil,
        Value::Bool(_) => TypeTag::Bool,
        Value::Int(_) | Value::Uint(_) => TypeTag::Int,
        Value::Int8(_) | Value::Uint8(_) => TypeTag::Int8,
        Value::Int16(_) | Value::Uint16(_) => TypeTag::Int16,
        Value::Int32(_) | Value::Uint32(_) => TypeTag::Int32,
        Value::Int64(_) | Value::Uint64(_) => TypeTag::Int64,
        Value::Float32(_) => TypeTag::Float32,
        Value::Float64(_) => TypeTag::Float64,
        Value::String(_) => TypeTag::String,
        Value::Time(_) => TypeTag::Time,
        Value::Binary(_) => TypeTag::Unknown,
        Value::Map(_) => TypeTag::Map,
        Value::Array(_) => TypeTag::Array,
    }
}

impl Value {
    #[inline]
    pub fn type_tag(&self) -> TypeTag {
        type_of(self)
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Array(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// View this value as a container, if it is one.
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Map(m) => Some(m),
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Map(m) => Some(m),
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Number of direct children, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        self.as_container().map(Container::size)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    Timestamp => Time,
    Map => Map,
    Array => Array,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::from(items))
    }
}
