//! Path traversal and structural edits.
//!
//! Two layers live here. The public functions work on a root [`Value`] and a
//! parsed path ([`resolve`], [`get_path`], [`set_path`], …). The crate-private
//! ones start from a [`Container`] and back the path-relative methods of
//! [`Map`](crate::Map), [`Array`](crate::Array) and
//! [`Document`](crate::Document).
//!
//! Every step through an array needs a canonical index below the length, and
//! every step through a map needs an existing key. Walking into a scalar fails
//! with [`TreeError::NotContainer`]. Writes land in the parent of the final
//! segment, and only an array write at exactly `len` grows the tree.

use structed_path::split_last;

use crate::container::Container;
use crate::error::{TreeError, TreeResult};
use crate::field::{Field, Slot};
use crate::value::Value;

/// Walk `path` from `root`. `name` is the segment that addressed `root`.
fn walk<'a>(root: &'a Value, name: &str, path: &[String]) -> TreeResult<&'a Value> {
    let mut current = root;
    let mut name = name;
    for segment in path {
        let container = current
            .as_container()
            .ok_or_else(|| TreeError::not_container(name, current.type_tag()))?;
        current = container.child(segment)?;
        name = segment.as_str();
    }
    Ok(current)
}

fn walk_mut<'a>(root: &'a mut Value, name: &str, path: &[String]) -> TreeResult<&'a mut Value> {
    let mut current = root;
    let mut name = name;
    for segment in path {
        let found = current.type_tag();
        let container = match current.as_container_mut() {
            Some(c) => c,
            None => return Err(TreeError::not_container(name, found)),
        };
        current = container.child_mut(segment)?;
        name = segment.as_str();
    }
    Ok(current)
}

/// Resolve `path` to a value, read-only.
///
/// # Example
///
/// ```
/// use structed_core::{tree, Value};
///
/// let doc = Value::from(serde_json::json!({"a": [1, 2]}));
/// let path = vec!["a".to_string(), "1".to_string()];
/// assert_eq!(tree::resolve(&doc, &path).unwrap(), &Value::Int64(2));
/// ```
pub fn resolve<'a>(root: &'a Value, path: &[String]) -> TreeResult<&'a Value> {
    walk(root, "", path)
}

pub fn resolve_mut<'a>(root: &'a mut Value, path: &[String]) -> TreeResult<&'a mut Value> {
    walk_mut(root, "", path)
}

/// Read the value at `path` as a [`Field`] addressed by the final segment.
/// The empty path yields a root field holding a copy of `root`.
pub fn get_path(root: &Value, path: &[String]) -> TreeResult<Field> {
    match root.as_container() {
        Some(c) => get_field(c, path),
        None if path.is_empty() => Ok(Field::root(root.clone())),
        None => Err(TreeError::not_container("", root.type_tag())),
    }
}

/// Write `value` at `path`, appending when the final segment is the length of
/// an array. The empty path replaces `root`.
pub fn set_path(root: &mut Value, path: &[String], value: Value) -> TreeResult<()> {
    if path.is_empty() {
        *root = value;
        return Ok(());
    }
    let found = root.type_tag();
    match root.as_container_mut() {
        Some(c) => put_value(c, path, value),
        None => Err(TreeError::not_container("", found)),
    }
}

/// Number of keys or elements of the container at `path`.
pub fn key_size_at(root: &Value, path: &[String]) -> TreeResult<usize> {
    let value = resolve(root, path)?;
    value
        .as_container()
        .map(Container::size)
        .ok_or_else(|| TreeError::not_container(last_name(path), value.type_tag()))
}

/// The `i`-th key of the container at `path`, in sorted order for maps.
pub fn get_key_at(root: &Value, path: &[String], i: usize) -> TreeResult<String> {
    let value = resolve(root, path)?;
    value
        .as_container()
        .ok_or_else(|| TreeError::not_container(last_name(path), value.type_tag()))?
        .key_at(i)
}

/// Remove the value at `path`. Missing map keys are a no-op returning `None`.
pub fn remove_path(root: &mut Value, path: &[String]) -> TreeResult<Option<Value>> {
    let (parent, last) = split_last(path)?;
    let target = resolve_mut(root, parent)?;
    let found = target.type_tag();
    match target.as_container_mut() {
        Some(c) => c.remove_child(last),
        None => Err(TreeError::not_container(last_name(parent), found)),
    }
}

/// Insert `value` at `path`, shifting later array elements.
pub fn insert_at(root: &mut Value, path: &[String], value: Value) -> TreeResult<()> {
    let (parent, last) = split_last(path)?;
    let target = resolve_mut(root, parent)?;
    let found = target.type_tag();
    match target.as_container_mut() {
        Some(c) => c.insert_child(last, value),
        None => Err(TreeError::not_container(last_name(parent), found)),
    }
}

fn last_name(path: &[String]) -> &str {
    path.last().map(String::as_str).unwrap_or("")
}

/// The container at `path` below `c`.
fn container_at<'a>(c: &'a dyn Container, path: &[String]) -> TreeResult<&'a dyn Container> {
    let Some((first, rest)) = path.split_first() else {
        return Ok(c);
    };
    let value = walk(c.child(first)?, first, rest)?;
    value
        .as_container()
        .ok_or_else(|| TreeError::not_container(last_name(path), value.type_tag()))
}

fn container_at_mut<'a>(
    c: &'a mut dyn Container,
    path: &[String],
) -> TreeResult<&'a mut dyn Container> {
    let Some((first, rest)) = path.split_first() else {
        return Ok(c);
    };
    let value = walk_mut(c.child_mut(first)?, first, rest)?;
    let found = value.type_tag();
    value
        .as_container_mut()
        .ok_or_else(|| TreeError::not_container(last_name(path), found))
}

pub(crate) fn get_field(c: &dyn Container, path: &[String]) -> TreeResult<Field> {
    match path.split_last() {
        None => Ok(Field::root(c.to_value())),
        Some((last, parent)) => container_at(c, parent)?.field(last),
    }
}

pub(crate) fn set_field(c: &mut dyn Container, path: &[String], field: Field) -> TreeResult<()> {
    if *field.slot() == Slot::Root {
        return put_value(c, path, field.into_value());
    }
    container_at_mut(c, path)?.set(field)
}

pub(crate) fn put_value(c: &mut dyn Container, path: &[String], value: Value) -> TreeResult<()> {
    match path.split_last() {
        None => c.replace_with(value),
        Some((last, parent)) => container_at_mut(c, parent)?.put(last, value),
    }
}

pub(crate) fn key_size(c: &dyn Container, path: &[String]) -> TreeResult<usize> {
    Ok(container_at(c, path)?.size())
}

pub(crate) fn key_at(c: &dyn Container, path: &[String], i: usize) -> TreeResult<String> {
    container_at(c, path)?.key_at(i)
}

pub(crate) fn remove_value(c: &mut dyn Container, path: &[String]) -> TreeResult<Option<Value>> {
    let (parent, last) = split_last(path)?;
    container_at_mut(c, parent)?.remove_child(last)
}

pub(crate) fn insert_value(c: &mut dyn Container, path: &[String], value: Value) -> TreeResult<()> {
    let (parent, last) = split_last(path)?;
    container_at_mut(c, parent)?.insert_child(last, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeTag;
    use serde_json::json;
    use structed_path::parse_path;

    fn doc() -> Value {
        Value::from(json!({"user": {"name": "Ann", "tags": ["x", "y"]}, "n": 1}))
    }

    fn p(s: &str) -> Vec<String> {
        parse_path(s).unwrap()
    }

    #[test]
    fn test_resolve_root() {
        let d = doc();
        assert_eq!(resolve(&d, &[]).unwrap(), &d);
    }

    #[test]
    fn test_resolve_through_scalar() {
        let d = doc();
        assert_eq!(
            resolve(&d, &p("user/name/first")),
            Err(TreeError::not_container("name", TypeTag::String))
        );
        assert_eq!(
            resolve(&Value::from(1i32), &p("a")),
            Err(TreeError::not_container("", TypeTag::Int32))
        );
    }

    #[test]
    fn test_get_path_field_addressing() {
        let d = doc();
        let f = get_path(&d, &p("user/tags/1")).unwrap();
        assert_eq!(f.index(), Some(1));
        assert_eq!(f.get_string(), Ok("y"));

        let f = get_path(&d, &p("user/name")).unwrap();
        assert_eq!(f.key(), Some("name"));

        let f = get_path(&d, &[]).unwrap();
        assert_eq!(f.slot(), &Slot::Root);
        assert_eq!(f.value(), &d);
    }

    #[test]
    fn test_get_path_scalar_root() {
        let v = Value::from(true);
        assert_eq!(get_path(&v, &[]).unwrap().get_bool(), Ok(true));
        assert!(get_path(&v, &p("x")).is_err());
    }

    #[test]
    fn test_set_path_grows_by_one() {
        let mut d = doc();
        set_path(&mut d, &p("user/tags/2"), Value::from("z")).unwrap();
        assert_eq!(key_size_at(&d, &p("user/tags")), Ok(3));
        assert_eq!(
            set_path(&mut d, &p("user/tags/4"), Value::Nil),
            Err(TreeError::out_of_bounds("4", 3))
        );
    }

    #[test]
    fn test_set_path_inserts_new_key_but_not_intermediate() {
        let mut d = doc();
        set_path(&mut d, &p("user/age"), Value::from(30i32)).unwrap();
        assert_eq!(key_size_at(&d, &p("user")), Ok(3));
        assert_eq!(
            set_path(&mut d, &p("nobody/age"), Value::Nil),
            Err(TreeError::not_found("nobody"))
        );
    }

    #[test]
    fn test_set_path_empty_replaces_root() {
        let mut d = doc();
        set_path(&mut d, &[], Value::from(5u8)).unwrap();
        assert_eq!(d, Value::Uint8(5));
    }

    #[test]
    fn test_key_size_on_scalar() {
        let d = doc();
        assert_eq!(
            key_size_at(&d, &p("user/name")),
            Err(TreeError::not_container("name", TypeTag::String))
        );
    }

    #[test]
    fn test_get_key_at() {
        let d = doc();
        assert_eq!(get_key_at(&d, &[], 0).unwrap(), "n");
        assert_eq!(get_key_at(&d, &[], 1).unwrap(), "user");
        assert!(get_key_at(&d, &[], 2).is_err());
        assert_eq!(get_key_at(&d, &p("user/tags"), 1).unwrap(), "1");
    }

    #[test]
    fn test_remove_and_insert() {
        let mut d = doc();
        assert_eq!(
            remove_path(&mut d, &p("user/tags/0")),
            Ok(Some(Value::from("x")))
        );
        assert_eq!(remove_path(&mut d, &p("user/missing")), Ok(None));
        insert_at(&mut d, &p("user/tags/0"), Value::from("w")).unwrap();
        assert_eq!(
            resolve(&d, &p("user/tags")).unwrap(),
            &Value::from(json!(["w", "y"]))
        );
        assert!(matches!(
            remove_path(&mut d, &[]),
            Err(TreeError::MalformedPath(_))
        ));
    }

    #[test]
    fn test_container_layer_set_field() {
        let mut d = doc();
        let c = d.as_container_mut().unwrap();
        set_field(c, &p("user"), Field::map_field("name", Value::from("Bo"))).unwrap();
        assert_eq!(
            set_field(c, &p("user/tags"), Field::map_field("0", Value::Nil)),
            Err(TreeError::type_mismatch(TypeTag::Array, TypeTag::Map))
        );
        set_field(c, &p("n"), Field::root(Value::from(2i32))).unwrap();
        assert_eq!(get_field(c, &p("user/name")).unwrap().get_string(), Ok("Bo"));
        assert_eq!(get_field(c, &p("n")).unwrap().get_int32(), Ok(2));
    }
}
