//! Type definitions for document paths.

/// A single step in a path: a map key or the decimal form of an array index.
pub type Segment = String;

/// A parsed path. The empty path addresses the container itself.
pub type Path = Vec<Segment>;

/// How a segment reads when it is used to address an array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStep {
    /// Canonical non-negative base-10 index.
    Index(usize),
    /// Numeric, but negative or too large to be an index.
    OutOfRange,
    /// Not a number.
    NotIndex,
}

impl IndexStep {
    /// Classify `segment` as an array index.
    ///
    /// # Example
    ///
    /// ```
    /// use structed_path::IndexStep;
    ///
    /// assert_eq!(IndexStep::classify("3"), IndexStep::Index(3));
    /// assert_eq!(IndexStep::classify("-1"), IndexStep::OutOfRange);
    /// assert_eq!(IndexStep::classify("01"), IndexStep::NotIndex);
    /// assert_eq!(IndexStep::classify("name"), IndexStep::NotIndex);
    /// ```
    pub fn classify(segment: &str) -> Self {
        if crate::is_valid_index(segment) {
            return match segment.parse::<usize>() {
                Ok(i) => IndexStep::Index(i),
                Err(_) => IndexStep::OutOfRange,
            };
        }
        match segment.strip_prefix('-') {
            Some(rest) if crate::is_valid_index(rest) => IndexStep::OutOfRange,
            _ => IndexStep::NotIndex,
        }
    }

    /// The parsed index, if the segment was a canonical one.
    pub fn index(self) -> Option<usize> {
        match self {
            IndexStep::Index(i) => Some(i),
            _ => None,
        }
    }
}
