//! Brace-aware splitting of path expressions
//!
//! Brace depth is tracked so that `{...}` runs stay opaque to the dot splitter,
//! nested groups included: `a.{b.c,{d,e}.f}.g` splits into three segments.

use crate::config::consts::{ALTERNATIVE_SEPARATOR, GROUP_CLOSE, GROUP_OPEN, SEGMENT_SEPARATOR};

/// Split an expression on dots that are outside every brace group
pub(crate) fn split_segments(expr: &str) -> Vec<&str> {
    split_outside_braces(expr, SEGMENT_SEPARATOR)
}

/// Split the body of a group on top-level commas, trimming each alternative
pub(crate) fn split_alternatives(body: &str) -> Vec<&str> {
    split_outside_braces(body, ALTERNATIVE_SEPARATOR)
        .into_iter()
        .map(str::trim)
        .collect()
}

fn split_outside_braces(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if c == GROUP_OPEN {
            depth += 1;
        } else if c == GROUP_CLOSE {
            depth = depth.saturating_sub(1);
        } else if c == separator && depth == 0 {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Body of a segment that is exactly one group, `{...}` → `...`
///
/// The brace opening the segment must be the one closed by its last character,
/// so `{a}.{b}`-style text glued into one segment (`{a}x{b}`) is not a group.
pub(crate) fn group_body(segment: &str) -> Option<&str> {
    let inner = segment
        .strip_prefix(GROUP_OPEN)?
        .strip_suffix(GROUP_CLOSE)?;

    let mut depth = 0usize;
    for c in inner.chars() {
        if c == GROUP_OPEN {
            depth += 1;
        } else if c == GROUP_CLOSE {
            // Closing the outer brace early
            depth = depth.checked_sub(1)?;
        }
    }
    (depth == 0).then_some(inner)
}

/// True when the text contains both brace characters
pub(crate) fn has_braces(expr: &str) -> bool {
    expr.contains(GROUP_OPEN) && expr.contains(GROUP_CLOSE)
}
