//! Error types for path writes

use thiserror::Error;

/// A `set` could not reach the parent of its final segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathWriteError {
    /// An intermediate segment is absent
    #[error("segment '{segment}' of path '{path}' does not exist")]
    MissingSegment { path: String, segment: String },

    /// The value holding the segment is a leaf
    #[error("cannot write '{segment}' of path '{path}': parent is not a mapping or sequence")]
    NotAContainer { path: String, segment: String },

    /// Sequences are never extended by a write
    #[error("index '{index}' of path '{path}' is outside a sequence of length {len}")]
    IndexOutOfBounds {
        path: String,
        index: String,
        len: usize,
    },
}
