//! Expand command - show what a path expression selects

use crate::context::Context;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use jsonium_core::{PathExpr, path};
use serde_json::json;
use std::path::PathBuf;

/// Print the alternatives of `expression`, or its resolved paths in `document`
pub fn run(expression: &str, document: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let expr = PathExpr::new(expression);

    let Some(document) = document else {
        if json {
            return output::print_json(
                &json!({
                    "expression": expr.source(),
                    "alternatives": expr.alternatives(),
                }),
                true,
            );
        }
        for alternative in expr.alternatives() {
            output::print_text(alternative)?;
        }
        return Ok(());
    };

    let doc = ctx.read_json(&document)?;
    let resolved: Vec<(String, bool)> = expr
        .resolve(&doc)
        .iter()
        .map(|p| (p.to_string(), path::has(&doc, p)))
        .collect();

    output::status(
        ctx.verbose,
        &format!(
            "{} alternative(s), {} path(s) in '{}'",
            expr.alternatives().len(),
            resolved.len(),
            document.display()
        ),
    );

    if json {
        let paths: Vec<_> = resolved
            .iter()
            .map(|(path, exists)| json!({"path": path, "exists": exists}))
            .collect();
        return output::print_json(
            &json!({
                "expression": expr.source(),
                "alternatives": expr.alternatives(),
                "paths": paths,
            }),
            true,
        );
    }

    for (path, exists) in &resolved {
        if *exists {
            output::print_text(path)?;
        } else {
            output::print_text(&format!("{} {}", path, "(missing)".yellow()))?;
        }
    }
    Ok(())
}
