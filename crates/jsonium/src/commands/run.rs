//! Run command - execute a TOML plan

use crate::context::Context;
use crate::output;
use anyhow::Result;
use jsonium_core::run_plan;
use serde_json::Value;
use std::path::PathBuf;

/// Run every stage of the plan and print the selected stage's results
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, fails validation, or a stage
/// cannot resolve its sources
pub fn run(plan_path: PathBuf, stage: Option<String>, compact: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let (mut plan, loader) = ctx.load_plan(&plan_path)?;

    if stage.is_some() {
        plan.output.stage = stage;
    }

    output::status(
        ctx.verbose,
        &format!(
            "Running {} stage(s) from '{}'",
            plan.stages.len(),
            plan_path.display()
        ),
    );

    let outcome = run_plan(&plan, &loader)?;

    for name in outcome.stage_names() {
        let count = outcome.stage(name).map_or(0, <[Value]>::len);
        output::success(
            ctx.verbose,
            &format!("Stage '{}': {} document(s)", name, count),
        );
    }

    let pretty = plan.output.pretty && !compact;
    output::print_json(&Value::Array(outcome.into_output()), pretty)
}
