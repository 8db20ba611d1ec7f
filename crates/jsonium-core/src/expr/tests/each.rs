//! `@each` expansion tests

use super::*;
use serde_json::json;

fn dotted(paths: Vec<ResolvedPath>) -> Vec<String> {
    paths.iter().map(ToString::to_string).collect()
}

#[test]
fn test_path_without_each_is_itself() {
    let doc = json!({"a": {"b": {"c": ""}}});
    assert_eq!(dotted(expand_each("a.b.c", &doc)), ["a.b.c"]);
}

#[test]
fn test_path_without_each_is_kept_even_if_missing() {
    let doc = json!({});
    assert_eq!(dotted(expand_each("missing.key", &doc)), ["missing.key"]);
}

#[test]
fn test_each_over_sequence() {
    let doc = json!({"a": [{"b": ""}, {"b": ""}]});
    assert_eq!(dotted(expand_each("a.@each.b", &doc)), ["a.0.b", "a.1.b"]);
}

#[test]
fn test_each_produces_index_segments() {
    let doc = json!({"a": ["x"]});
    let paths = expand_each("a.@each", &doc);
    assert_eq!(
        paths,
        [ResolvedPath::new(vec![
            PathSegment::Key("a".to_string()),
            PathSegment::Index(0),
        ])]
    );
}

#[test]
fn test_nested_each_depth_first_ascending() {
    let doc = json!({
        "rows": [
            {"cells": ["a", "b"]},
            {"cells": ["c"]},
            {"cells": []}
        ]
    });
    assert_eq!(
        dotted(expand_each("rows.@each.cells.@each", &doc)),
        ["rows.0.cells.0", "rows.0.cells.1", "rows.1.cells.0"]
    );
}

#[test]
fn test_consecutive_each() {
    let doc = json!({"m": [[1, 2], [3]]});
    assert_eq!(
        dotted(expand_each("m.@each.@each", &doc)),
        ["m.0.0", "m.0.1", "m.1.0"]
    );
}

#[test]
fn test_leading_each_on_root_sequence() {
    let doc = json!([{"x": 1}, {"x": 2}]);
    assert_eq!(dotted(expand_each("@each.x", &doc)), ["0.x", "1.x"]);
}

#[test]
fn test_each_on_empty_sequence_yields_nothing() {
    let doc = json!({"a": []});
    assert!(expand_each("a.@each.b", &doc).is_empty());
}

#[test]
fn test_each_on_missing_prefix_yields_nothing() {
    let doc = json!({"other": [1]});
    assert!(expand_each("a.@each.b", &doc).is_empty());
}

#[test]
fn test_each_on_mapping_yields_nothing() {
    let doc = json!({"a": {"0": {"b": ""}}});
    assert!(expand_each("a.@each.b", &doc).is_empty());
}

#[test]
fn test_each_inside_literal_is_not_a_token() {
    let doc = json!({"a@each": "x"});
    assert_eq!(dotted(expand_each("a@each", &doc)), ["a@each"]);
}

#[test]
fn test_each_branches_with_different_lengths_per_document() {
    let short = json!({"a": [1]});
    let long = json!({"a": [1, 2, 3]});
    assert_eq!(expand_each("a.@each", &short).len(), 1);
    assert_eq!(expand_each("a.@each", &long).len(), 3);
}
