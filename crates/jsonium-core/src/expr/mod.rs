//! Path expression engine
//!
//! ## Syntax
//!
//! ```text
//! path    := segment ("." segment)*
//! segment := "@each" | group | literal
//! group   := "{" alt ("," alt)* "}"
//! alt     := segment ("." segment)*
//! ```
//!
//! - `a.b.c` selects one nested location
//! - `a.{b,c}` selects `a.b` and `a.c`; alternatives may hold dots, further
//!   groups and `@each`
//! - `list.@each.name` selects `name` inside every element of `list`
//!
//! Expansion runs in two passes. [`expand_alternatives`] rewrites braces and
//! only looks at the text. [`expand_each`] resolves `@each` against one
//! document, so the same expression can denote different paths for different
//! templates.

mod alternation;
mod each;
mod tokenize;

pub use alternation::expand_alternatives;
pub use each::expand_each;

use serde_json::Value;

use crate::config::consts::{EACH_TOKEN, SEGMENT_SEPARATOR};
use crate::path::{PathSegment, ResolvedPath};

/// A segment of a brace-free path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprSegment {
    Literal(String),
    Each,
}

impl ExprSegment {
    fn to_path_segment(&self) -> PathSegment {
        match self {
            ExprSegment::Literal(key) => PathSegment::Key(key.clone()),
            // Only reached through a prefix slice that excludes `@each`
            ExprSegment::Each => PathSegment::Key(EACH_TOKEN.to_string()),
        }
    }
}

fn parse_segments(alternative: &str) -> Vec<ExprSegment> {
    alternative
        .split(SEGMENT_SEPARATOR)
        .map(|segment| {
            if segment == EACH_TOKEN {
                ExprSegment::Each
            } else {
                ExprSegment::Literal(segment.to_string())
            }
        })
        .collect()
}

/// A path expression with its alternatives already expanded
///
/// Compiling is document-independent, so one `PathExpr` is reused for every
/// template and combo of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    source: String,
    alternatives: Vec<String>,
    segments: Vec<Vec<ExprSegment>>,
}

impl PathExpr {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let alternatives = expand_alternatives(&source);
        let segments = alternatives.iter().map(|alt| parse_segments(alt)).collect();
        Self {
            source,
            alternatives,
            segments,
        }
    }

    /// The expression as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Brace-free paths the expression denotes, in expansion order
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Concrete paths in `doc`, alternative by alternative
    pub fn resolve(&self, doc: &Value) -> Vec<ResolvedPath> {
        self.segments
            .iter()
            .flat_map(|segments| each::expand_segments(segments, doc))
            .collect()
    }
}

impl From<&str> for PathExpr {
    fn from(source: &str) -> Self {
        PathExpr::new(source)
    }
}

#[cfg(test)]
mod tests;
