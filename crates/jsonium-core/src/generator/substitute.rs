//! Placeholder substitution for one (document, combo) pair

use serde_json::{Map, Value};
use tracing::trace;

use crate::document::{placeholder, replacement_text};
use crate::expr::PathExpr;
use crate::path::{self, ResolvedPath};

/// Apply every variable of `combo` along every expression
///
/// Paths are resolved again for each variable because an overwrite may change
/// the shape of `doc` (e.g. replace a sequence iterated by `@each`). A combo
/// that is not a mapping has no variables.
pub(crate) fn apply_combo(doc: &mut Value, exprs: &[PathExpr], combo: &Value) {
    let Value::Object(vars) = combo else {
        return;
    };

    for (name, value) in vars {
        let token = placeholder(name);
        let text = replacement_text(value);
        for expr in exprs {
            for resolved in expr.resolve(doc) {
                substitute_at(doc, &resolved, &token, &text, vars);
            }
        }
    }
}

fn substitute_at(
    doc: &mut Value,
    resolved: &ResolvedPath,
    token: &str,
    text: &str,
    vars: &Map<String, Value>,
) {
    let Some(current) = path::get_mut(doc, resolved) else {
        return;
    };

    match current {
        Value::String(s) => {
            if s.contains(token) {
                *s = s.replace(token, text);
            }
        }
        other => {
            // Non-string values are keyed by the resolved path, not the variable
            let key = resolved.to_string();
            trace!(path = %key, "overwriting non-string value");
            *other = vars.get(&key).cloned().unwrap_or(Value::Null);
        }
    }
}
