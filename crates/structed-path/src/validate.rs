//! Validation functions for paths.

use crate::PathError;

/// Maximum allowed path string length, in bytes.
pub const MAX_PATH_LENGTH: usize = 4096;

/// Maximum allowed number of segments.
pub const MAX_PATH_DEPTH: usize = 512;

/// Validate a path string before it is split.
///
/// # Errors
///
/// Returns an error if the path exceeds [`MAX_PATH_LENGTH`] bytes.
///
/// # Example
///
/// ```
/// use structed_path::validate_path;
///
/// validate_path("").unwrap();
/// validate_path("user/tags/0").unwrap();
/// validate_path(&"a".repeat(5000)).unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::TooLong {
            len: path.len(),
            max: MAX_PATH_LENGTH,
        });
    }
    Ok(())
}

/// Validate an already split path.
///
/// # Errors
///
/// Returns an error if there are more than [`MAX_PATH_DEPTH`] segments or if
/// any segment is empty.
pub fn validate_segments(segments: &[String]) -> Result<(), PathError> {
    if segments.len() > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep {
            depth: segments.len(),
            max: MAX_PATH_DEPTH,
        });
    }
    if let Some(position) = segments.iter().position(|s| s.is_empty()) {
        return Err(PathError::EmptySegment { position });
    }
    Ok(())
}
