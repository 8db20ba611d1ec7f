//! Both passes composed through `PathExpr::resolve`

use super::*;
use serde_json::json;

fn resolve(expr: &str, doc: &Value) -> Vec<String> {
    PathExpr::new(expr)
        .resolve(doc)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_brace_expansion_touches_every_combination() {
    let doc = json!({"a": {"c": "x", "d": "y"}, "b": {"c": "x", "d": "y"}});
    assert_eq!(resolve("{a,b}.{c,d}", &doc), ["a.c", "a.d", "b.c", "b.d"]);
}

#[test]
fn test_each_then_braces() {
    let doc = json!({"a": [{"c": "", "d": ""}, {"c": "", "d": ""}]});
    assert_eq!(
        resolve("a.@each.{c,d}", &doc),
        ["a.0.c", "a.1.c", "a.0.d", "a.1.d"]
    );
}

#[test]
fn test_alternatives_resolve_against_their_own_sequences() {
    let doc = json!({"x": [1, 2], "y": [3]});
    assert_eq!(resolve("{x,y}.@each", &doc), ["x.0", "x.1", "y.0"]);
}

#[test]
fn test_missing_alternative_branch_does_not_affect_others() {
    let doc = json!({"x": [1]});
    assert_eq!(resolve("{missing,x}.@each", &doc), ["x.0"]);
}

#[test]
fn test_malformed_expression_resolves_to_nothing() {
    let doc = json!({"a{b}c": "v"});
    assert!(resolve("a{b}c", &doc).is_empty());
}
