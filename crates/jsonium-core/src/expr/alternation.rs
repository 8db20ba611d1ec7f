//! Alternation expansion (`{a,b}`), independent of any document

use tracing::warn;

use super::tokenize::{group_body, has_braces, split_alternatives, split_segments};
use crate::config::consts::SEGMENT_SEPARATOR;

/// Expand every brace group of an expression into plain paths
///
/// The first top-level group is rewritten once per alternative (prefix +
/// alternative + suffix) and each rewrite is expanded again, so later groups,
/// nested groups and groups inside alternatives are all enumerated:
///
/// ```
/// use jsonium_core::expr::expand_alternatives;
///
/// assert_eq!(expand_alternatives("a.{b,c}"), ["a.b", "a.c"]);
/// assert_eq!(expand_alternatives("{a,b}.{c,d}"), ["a.c", "a.d", "b.c", "b.d"]);
/// assert_eq!(expand_alternatives("a.{b.c,d.e}"), ["a.b.c", "a.d.e"]);
/// ```
///
/// Text without both `{` and `}` is returned unchanged. Text with braces but no
/// segment that is a whole group (`a{b}c`) denotes no path at all.
pub fn expand_alternatives(expr: &str) -> Vec<String> {
    if !has_braces(expr) {
        return vec![expr.to_string()];
    }

    let segments = split_segments(expr);
    let Some((pos, body)) = segments
        .iter()
        .enumerate()
        .find_map(|(i, segment)| group_body(segment).map(|body| (i, body)))
    else {
        warn!(expression = expr, "path expression has braces but no group segment");
        return Vec::new();
    };

    let prefix = segments[..pos].join(".");
    let suffix = segments[pos + 1..].join(".");

    let mut expanded = Vec::new();
    for alternative in split_alternatives(body) {
        let mut path = String::with_capacity(expr.len());
        if pos > 0 {
            path.push_str(&prefix);
            path.push(SEGMENT_SEPARATOR);
        }
        path.push_str(alternative);
        if !suffix.is_empty() {
            path.push(SEGMENT_SEPARATOR);
            path.push_str(&suffix);
        }
        expanded.extend(expand_alternatives(&path));
    }
    expanded
}
