//! Generate command - expand template and combo files into documents

use crate::cli::GenerateArgs;
use crate::context::Context;
use crate::output;
use anyhow::{Result, bail};
use jsonium_core::Generator;
use jsonium_core::document::all_documents;
use serde_json::Value;

/// Generate `templates × combos` documents and print them as a JSON array
///
/// # Errors
///
/// Returns an error if an input file cannot be read, is not an array, or the
/// templates are not all mappings or sequences
pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    let templates = ctx.read_array(&args.templates)?;
    if !all_documents(&templates) {
        bail!(
            "'{}' must hold mappings or sequences only",
            args.templates.display()
        );
    }
    let combos = ctx.read_array(&args.combos)?;

    output::status(
        ctx.verbose,
        &format!(
            "Generating {} template(s) × {} combo(s) along {} path(s)",
            templates.len(),
            combos.len(),
            args.paths.len()
        ),
    );

    let mut generator = Generator::new(&templates);
    generator
        .generate(&args.paths, &combos)
        .rename(args.renames.iter().map(|(before, after)| (before, after)));
    if args.unique {
        generator.dedup_with(args.dedup.into());
    }

    output::success(
        ctx.verbose,
        &format!("Generated {} document(s)", generator.results().len()),
    );
    output::print_json(&Value::Array(generator.into_results()), !args.compact)
}
