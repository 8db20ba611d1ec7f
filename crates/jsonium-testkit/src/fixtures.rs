//! Shared fixtures
//!
//! Scenario data reused by the core and CLI test suites, plus helpers that
//! write fixtures to disk for the CLI.

use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Two flat templates with three placeholders each
pub fn flat_templates() -> Vec<Value> {
    vec![
        json!({"key1": "{{k1}} 1", "key2": "{{k2}} 1", "key3": "{{k3}} 1"}),
        json!({"key1": "{{k1}} 2", "key2": "{{k2}} 2", "key3": "{{k3}} 2"}),
    ]
}

/// Combos for [`flat_templates`]; `k2` is deliberately absent
pub fn flat_combos() -> Vec<Value> {
    vec![json!({"k1": "v1", "k3": "v2"}), json!({"k1": "v3", "k3": "v4"})]
}

/// Templates with a sequence of records, used with `a.@each.{c,d}`
pub fn sequence_templates() -> Vec<Value> {
    vec![
        json!({"a": [{"c": "{{k2}}", "d": "{{k1}}"}, {"c": "{{k2}}", "d": "{{k1}}"}]}),
        json!({"a": [{"c": "{{k1}}", "d": "{{k2}}"}, {"c": "{{k1}}", "d": "{{k2}}"}]}),
    ]
}

/// Four combos for [`sequence_templates`]
pub fn sequence_combos() -> Vec<Value> {
    vec![
        json!({"k1": "v11", "k2": "21"}),
        json!({"k1": "v12", "k2": "22"}),
        json!({"k1": "v13", "k2": "23"}),
        json!({"k1": "v14", "k2": "24"}),
    ]
}

/// Serialize `value` as pretty JSON into `dir/name`
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Write raw text (e.g. a TOML plan) into `dir/name`
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Parse JSON text (e.g. captured CLI stdout)
///
/// # Panics
///
/// Panics if the text is not valid JSON.
pub fn read_json(text: &[u8]) -> Value {
    serde_json::from_slice(text).unwrap_or_else(|e| {
        panic!(
            "Output is not valid JSON ({}): {}",
            e,
            String::from_utf8_lossy(text)
        )
    })
}
