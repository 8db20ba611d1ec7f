//! Document helpers
//!
//! Documents are plain `serde_json::Value` trees. Copying is `Clone` (no shared
//! substructure) and structural equality is `PartialEq`, which compares
//! mappings independently of field order.

use serde_json::Value;

use crate::config::consts::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Template and result documents
pub type Document = Value;

/// A mapping or a sequence. Leaves cannot act as templates.
pub fn is_document(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// True when every element is a mapping or a sequence
pub fn all_documents(values: &[Value]) -> bool {
    values.iter().all(is_document)
}

/// Build the placeholder token for a variable name: `{{name}}`
///
/// The name is used verbatim. No trimming or escaping is applied, so a combo key
/// of `" a "` only matches `{{ a }}`.
pub fn placeholder(name: &str) -> String {
    let mut token = String::with_capacity(name.len() + PLACEHOLDER_OPEN.len() * 2);
    token.push_str(PLACEHOLDER_OPEN);
    token.push_str(name);
    token.push_str(PLACEHOLDER_CLOSE);
    token
}

/// Text written in place of a placeholder
///
/// Strings are inserted as-is. Every other value is inserted as its compact JSON
/// text (`42`, `true`, `null`, `[1,2]`, `{"a":1}`).
pub fn replacement_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compact JSON text of a document, field order included
pub(crate) fn serialized_key(value: &Value) -> String {
    value.to_string()
}
