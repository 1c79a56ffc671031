//! Slash-delimited document paths.
//!
//! A path addresses a value inside a document tree. Segments are separated by
//! `/` and are either map keys or base-10 array indices. The empty string is
//! the root. There is no escaping: a key that contains `/` cannot be addressed,
//! and empty segments (leading, trailing or doubled slashes) are rejected.
//!
//! # Example
//!
//! ```
//! use structed_path::{format_path, parse_path};
//!
//! let path = parse_path("user/tags/1").unwrap();
//! assert_eq!(path, vec!["user", "tags", "1"]);
//! assert_eq!(format_path(&path), "user/tags/1");
//!
//! assert!(parse_path("/user").is_err());
//! ```

use thiserror::Error;

pub mod types;
pub use types::{IndexStep, Path, Segment};

pub mod validate;
pub use validate::{validate_path, validate_segments, MAX_PATH_DEPTH, MAX_PATH_LENGTH};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    #[error("path is {len} bytes long (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("path has {depth} segments (max {max})")]
    TooDeep { depth: usize, max: usize },
    #[error("the root has no parent")]
    NoParent,
}

/// Parse a path string into segments.
///
/// - Empty string returns an empty vec (the root)
/// - Otherwise the string is split on `/`, and every segment must be non-empty
///
/// # Errors
///
/// [`PathError::EmptySegment`] for leading, trailing or doubled separators,
/// [`PathError::TooLong`] / [`PathError::TooDeep`] past the validation limits.
///
/// # Example
///
/// ```
/// use structed_path::{parse_path, PathError};
///
/// assert_eq!(parse_path("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_path("a/0").unwrap(), vec!["a", "0"]);
/// assert_eq!(parse_path("a//b"), Err(PathError::EmptySegment { position: 1 }));
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    validate_path(path)?;
    let segments: Path = path.split(SEPARATOR).map(str::to_owned).collect();
    validate_segments(&segments)?;
    Ok(segments)
}

/// Format segments into a path string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use structed_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["a".to_string(), "0".to_string()]), "a/0");
/// ```
pub fn format_path(path: &[String]) -> String {
    path.join("/")
}

/// Append one segment to a path string.
///
/// # Example
///
/// ```
/// use structed_path::join;
///
/// assert_eq!(join("", "user"), "user");
/// assert_eq!(join("user", "tags"), "user/tags");
/// ```
pub fn join(base: &str, segment: &str) -> String {
    if base.is_empty() {
        return segment.to_owned();
    }
    let mut out = String::with_capacity(base.len() + segment.len() + 1);
    out.push_str(base);
    out.push(SEPARATOR);
    out.push_str(segment);
    out
}

/// Check if a path points to the root.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict prefix of `child`.
///
/// # Example
///
/// ```
/// use structed_path::is_child;
///
/// let parent = vec!["user".to_string()];
/// let child = vec!["user".to_string(), "name".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Split a path into its parent and final segment.
///
/// # Errors
///
/// [`PathError::NoParent`] for the root path.
///
/// # Example
///
/// ```
/// use structed_path::split_last;
///
/// let path = vec!["a".to_string(), "b".to_string()];
/// let (parent, last) = split_last(&path).unwrap();
/// assert_eq!(parent, ["a".to_string()]);
/// assert_eq!(last, "b");
/// assert!(split_last(&[]).is_err());
/// ```
pub fn split_last(path: &[String]) -> Result<(&[String], &str), PathError> {
    match path.split_last() {
        Some((last, parent)) => Ok((parent, last.as_str())),
        None => Err(PathError::NoParent),
    }
}

/// Check if a string is a canonical non-negative array index.
///
/// Leading zeros are not allowed except for `"0"` itself.
///
/// # Example
///
/// ```
/// use structed_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}
