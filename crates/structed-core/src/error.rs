//! Error types for tree operations.

use crate::value::TypeTag;
use structed_path::PathError;
use thiserror::Error;

/// Result type alias for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while reading or editing a document tree.
///
/// Every variant is a deterministic function of the tree, the path and the
/// request, so retrying an operation without changing its inputs fails the
/// same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A typed accessor or a write targeted an incompatible value or container.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The type the operation required.
        expected: TypeTag,
        /// The type actually present.
        found: TypeTag,
    },

    /// A map key segment does not exist.
    #[error("field not found: {segment}")]
    NotFound {
        /// The segment that failed to resolve.
        segment: String,
    },

    /// An array segment is negative or past the end.
    #[error("index {index} out of bounds (len: {len})")]
    IndexOutOfBounds {
        /// The segment as written.
        index: String,
        /// The length of the array.
        len: usize,
    },

    /// The path descends through a scalar, or a container was required.
    #[error("{segment:?} is not an array or a map (found {found})")]
    NotContainer {
        /// The segment addressed into the scalar, or the last segment of the
        /// path when a container was required at its end.
        segment: String,
        /// The type actually present.
        found: TypeTag,
    },

    /// The path string could not be parsed.
    #[error("malformed path: {0}")]
    MalformedPath(#[from] PathError),
}

impl TreeError {
    #[inline]
    pub(crate) fn type_mismatch(expected: TypeTag, found: TypeTag) -> Self {
        TreeError::TypeMismatch { expected, found }
    }

    #[inline]
    pub(crate) fn not_found(segment: &str) -> Self {
        TreeError::NotFound {
            segment: segment.to_owned(),
        }
    }

    #[inline]
    pub(crate) fn out_of_bounds(index: impl ToString, len: usize) -> Self {
        TreeError::IndexOutOfBounds {
            index: index.to_string(),
            len,
        }
    }

    #[inline]
    pub(crate) fn not_container(segment: &str, found: TypeTag) -> Self {
        TreeError::NotContainer {
            segment: segment.to_owned(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TreeError::type_mismatch(TypeTag::Int32, TypeTag::Int64).to_string(),
            "type mismatch: expected int32, found int64"
        );
        assert_eq!(
            TreeError::not_found("missing").to_string(),
            "field not found: missing"
        );
        assert_eq!(
            TreeError::out_of_bounds(5, 2).to_string(),
            "index 5 out of bounds (len: 2)"
        );
        assert_eq!(
            TreeError::not_container("name", TypeTag::String).to_string(),
            "\"name\" is not an array or a map (found string)"
        );
    }

    #[test]
    fn test_from_path_error() {
        let err: TreeError = PathError::NoParent.into();
        assert_eq!(err, TreeError::MalformedPath(PathError::NoParent));
        assert_eq!(err.to_string(), "malformed path: the root has no parent");
    }
}
