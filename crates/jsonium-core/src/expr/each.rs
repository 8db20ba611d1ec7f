//! `@each` expansion against a concrete document

use serde_json::Value;
use tracing::trace;

use super::ExprSegment;
use crate::path::{self, PathSegment, ResolvedPath};

/// Expand a brace-free path against `doc`
///
/// Each `@each` is replaced by every index of the sequence found at the path
/// before it, depth-first and in ascending order. When that prefix is missing or
/// is not a sequence the branch yields nothing. A path without `@each` yields
/// itself whether or not it exists in `doc`.
///
/// ```
/// use jsonium_core::expr::expand_each;
/// use serde_json::json;
///
/// let doc = json!({"a": [{"b": ""}, {"b": ""}]});
/// let paths: Vec<String> = expand_each("a.@each.b", &doc)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(paths, ["a.0.b", "a.1.b"]);
/// ```
pub fn expand_each(alternative: &str, doc: &Value) -> Vec<ResolvedPath> {
    expand_segments(&super::parse_segments(alternative), doc)
}

pub(crate) fn expand_segments(segments: &[ExprSegment], doc: &Value) -> Vec<ResolvedPath> {
    let mut resolved = Vec::new();
    let mut prefix = Vec::with_capacity(segments.len());
    expand_from(segments, doc, &mut prefix, &mut resolved);
    resolved
}

fn expand_from(
    remaining: &[ExprSegment],
    doc: &Value,
    prefix: &mut Vec<PathSegment>,
    resolved: &mut Vec<ResolvedPath>,
) {
    let base_len = prefix.len();

    let Some(each_pos) = remaining.iter().position(|s| *s == ExprSegment::Each) else {
        prefix.extend(remaining.iter().map(ExprSegment::to_path_segment));
        resolved.push(ResolvedPath::new(prefix.clone()));
        prefix.truncate(base_len);
        return;
    };

    prefix.extend(remaining[..each_pos].iter().map(ExprSegment::to_path_segment));

    let len = match path::get_at(doc, prefix) {
        Some(Value::Array(items)) => items.len(),
        _ => {
            trace!(
                prefix = %ResolvedPath::new(prefix.clone()),
                "@each prefix is not a sequence, branch skipped"
            );
            prefix.truncate(base_len);
            return;
        }
    };

    for index in 0..len {
        prefix.push(PathSegment::Index(index));
        expand_from(&remaining[each_pos + 1..], doc, prefix, resolved);
        prefix.pop();
    }
    prefix.truncate(base_len);
}
