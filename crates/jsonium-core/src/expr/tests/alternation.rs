//! Alternation expansion tests

use super::*;

#[test]
fn test_plain_path_expands_to_itself() {
    assert_eq!(expand_alternatives("a.b.c"), ["a.b.c"]);
    assert_eq!(expand_alternatives("list.@each.x"), ["list.@each.x"]);
}

#[test]
fn test_trailing_group() {
    assert_eq!(expand_alternatives("a.{b,c}"), ["a.b", "a.c"]);
}

#[test]
fn test_leading_group() {
    assert_eq!(expand_alternatives("{a,b}.c"), ["a.c", "b.c"]);
}

#[test]
fn test_two_groups_cross_product_in_written_order() {
    assert_eq!(
        expand_alternatives("{a,b}.{c,d}"),
        ["a.c", "a.d", "b.c", "b.d"]
    );
}

#[test]
fn test_alternatives_with_dots() {
    assert_eq!(expand_alternatives("a.{b.c,d.e}"), ["a.b.c", "a.d.e"]);
}

#[test]
fn test_whitespace_around_alternatives_is_trimmed() {
    assert_eq!(expand_alternatives("a.{ b , c }"), ["a.b", "a.c"]);
}

#[test]
fn test_nested_groups() {
    assert_eq!(
        expand_alternatives("x.{a,{b,c}.d}"),
        ["x.a", "x.b.d", "x.c.d"]
    );
}

#[test]
fn test_group_inside_alternative() {
    assert_eq!(
        expand_alternatives("{a.{b,c},d}.e"),
        ["a.b.e", "a.c.e", "d.e"]
    );
}

#[test]
fn test_each_inside_alternatives_is_kept() {
    assert_eq!(
        expand_alternatives("a.@each.{c,d}"),
        ["a.@each.c", "a.@each.d"]
    );
    assert_eq!(
        expand_alternatives("{a.@each,b}.c"),
        ["a.@each.c", "b.c"]
    );
}

#[test]
fn test_single_alternative_group() {
    assert_eq!(expand_alternatives("a.{b}"), ["a.b"]);
}

#[test]
fn test_unbalanced_brace_is_literal() {
    assert_eq!(expand_alternatives("a.{b,c"), ["a.{b,c"]);
}

#[test]
fn test_braces_without_group_segment_denote_nothing() {
    assert!(expand_alternatives("a{b}c").is_empty());
    assert!(expand_alternatives("a.x{b,c}").is_empty());
}

#[test]
fn test_path_expr_compiles_alternatives_once() {
    let expr = PathExpr::new("{a,b}.{c,d}");
    assert_eq!(expr.source(), "{a,b}.{c,d}");
    assert_eq!(expr.alternatives(), ["a.c", "a.d", "b.c", "b.d"]);
}
