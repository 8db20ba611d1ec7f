//! Concrete document paths and the accessor that reads and writes through them
//!
//! A [`ResolvedPath`] is what the expression engine produces after expanding
//! braces and `@each` against one document. The accessor functions never
//! expand anything; every segment is taken literally.

mod accessor;
mod error;

pub use accessor::{get, get_mut, has, set};
pub(crate) use accessor::get_at;
pub use error::PathWriteError;

use std::fmt;

/// One step into a document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key. A canonical decimal key (`"0"`, `"12"`) also addresses a
    /// sequence element.
    Key(String),
    /// Sequence index. Addresses a mapping through its decimal key.
    Index(usize),
}

impl PathSegment {
    /// Index this segment denotes when applied to a sequence
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(key) => parse_index(key),
        }
    }
}

/// Only canonical decimal text counts as an index (`"01"` and `"+1"` do not)
fn parse_index(key: &str) -> Option<usize> {
    let index = key.parse::<usize>().ok()?;
    (index.to_string() == key).then_some(index)
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A concrete, instance-specific location inside a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    segments: Vec<PathSegment>,
}

impl ResolvedPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Split a dotted path into literal key segments (`"a.0.b"`)
    pub fn from_dotted(path: &str) -> Self {
        Self::new(path.split('.').map(PathSegment::from).collect())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<PathSegment>> for ResolvedPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::new(segments)
    }
}

/// Dot-joined form, e.g. `key1.0.key2`. Combos are looked up by this string
/// when a non-string value is overwritten.
impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
