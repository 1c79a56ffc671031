//! Path-addressable document trees.
//!
//! A document is a tree of [`Value`]s rooted at a [`Map`] or an [`Array`].
//! Nodes are addressed by `/`-delimited paths such as `user/tags/1`, read as
//! [`Field`]s carrying typed accessors, and written back through the
//! [`Container`] path API.
//!
//! ```
//! use structed_core::{Container, Map, Value};
//!
//! let mut root = Map::new();
//! root.insert("tags", Value::from(vec![Value::from("x")]));
//! root.set_value_at("tags/1", Value::from("y")).unwrap();
//!
//! assert_eq!(root.key_size_at("tags"), Ok(2));
//! assert_eq!(root.get_path("tags/1").unwrap().get_string(), Ok("y"));
//! ```
//!
//! [`Document`] pairs a root with its wire format, and [`Session`] publishes
//! versioned, independent snapshots of a document as it is edited.

pub mod array;
pub mod clone;
pub mod container;
pub mod debug;
pub mod document;
pub mod error;
pub mod field;
pub mod json;
pub mod map;
pub mod session;
pub mod tree;
pub mod value;

pub use array::Array;
pub use container::Container;
pub use debug::{debug_string, debug_string_with, DumpOptions};
pub use document::{Document, ParseFormatError, WireFormat};
pub use error::{TreeError, TreeResult};
pub use field::{Field, Slot};
pub use map::Map;
pub use session::{Session, Snapshot};
pub use value::{type_of, Timestamp, TypeTag, Value};
