use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

use super::{DocumentLoader, PlanOutcome};
use crate::config::{DedupPolicy, PlanConfig, Source, StageConfig};
use crate::document::all_documents;
use crate::error::{JsoniumError, Result};
use crate::generator::{ComboSource, Generator};

/// Stages that already ran, in execution order
type Finished = [(String, Generator)];

/// Documents a source resolves to
enum StageInput<'a> {
    Documents(Cow<'a, [Value]>),
    Stage(&'a Generator),
}

impl StageInput<'_> {
    fn documents(&self) -> &[Value] {
        match self {
            StageInput::Documents(documents) => documents,
            StageInput::Stage(generator) => generator.results(),
        }
    }

    fn combos(&self) -> ComboSource<'_> {
        match self {
            StageInput::Documents(documents) => ComboSource::Records(documents),
            StageInput::Stage(generator) => ComboSource::Generator(generator),
        }
    }
}

/// Execute every stage of `plan` in order
///
/// # Errors
///
/// - [`JsoniumError::PlanInvalid`], [`JsoniumError::StageDuplicate`] when the
///   plan fails validation
/// - [`JsoniumError::StageNotFound`] when a stage references itself, a later
///   stage or an unknown one
/// - [`JsoniumError::SourceInvalid`] when a source does not hold the expected
///   array
/// - any error returned by `loader`
pub fn run_plan(plan: &PlanConfig, loader: &dyn DocumentLoader) -> Result<PlanOutcome> {
    plan.validate()?;

    let mut finished: Vec<(String, Generator)> = Vec::with_capacity(plan.stages.len());
    for stage in &plan.stages {
        let generator = run_stage(stage, &finished, plan.output.dedup, loader)?;
        debug!(
            stage = %stage.name,
            results = generator.results().len(),
            "stage finished"
        );
        finished.push((stage.name.clone(), generator));
    }

    let output_name = plan.output_stage().unwrap_or_default();
    let output = finished
        .iter()
        .position(|(name, _)| name == output_name)
        .ok_or_else(|| JsoniumError::StageNotFound {
            name: output_name.to_string(),
            referenced_by: "output".to_string(),
        })?;

    Ok(PlanOutcome {
        stages: finished
            .into_iter()
            .map(|(name, generator)| (name, generator.into_results()))
            .collect(),
        output,
    })
}

fn run_stage(
    stage: &StageConfig,
    finished: &Finished,
    dedup: DedupPolicy,
    loader: &dyn DocumentLoader,
) -> Result<Generator> {
    debug!(stage = %stage.name, paths = ?stage.paths, "running stage");

    let templates = resolve(stage, "templates", &stage.templates, finished, loader)?;
    if !all_documents(templates.documents()) {
        return Err(source_invalid(
            stage,
            "templates",
            "every template must be a mapping or a sequence",
        ));
    }
    let combos = resolve(stage, "combos", &stage.combos, finished, loader)?;

    let mut generator = Generator::new(templates.documents());
    generator.generate(&stage.paths, combos.combos());

    for name in &stage.concat {
        let other = lookup(stage, "concat", name, finished)?;
        generator.concat(other);
    }

    generator.rename(&stage.rename);

    if stage.unique {
        generator.dedup_with(dedup);
    }

    Ok(generator)
}

fn resolve<'a>(
    stage: &StageConfig,
    field: &str,
    source: &'a Source,
    finished: &'a Finished,
    loader: &dyn DocumentLoader,
) -> Result<StageInput<'a>> {
    match source {
        Source::Inline(documents) => {
            Ok(StageInput::Documents(Cow::Borrowed(documents.as_slice())))
        }
        Source::File { file } => match loader.load(file)? {
            Value::Array(documents) => Ok(StageInput::Documents(Cow::Owned(documents))),
            _ => Err(source_invalid(
                stage,
                field,
                &format!("'{}' must hold a JSON array", file.display()),
            )),
        },
        Source::Stage { stage: name } => lookup(stage, field, name, finished).map(StageInput::Stage),
    }
}

fn lookup<'a>(
    stage: &StageConfig,
    field: &str,
    name: &str,
    finished: &'a Finished,
) -> Result<&'a Generator> {
    finished
        .iter()
        .find(|(finished_name, _)| finished_name == name)
        .map(|(_, generator)| generator)
        .ok_or_else(|| JsoniumError::StageNotFound {
            name: name.to_string(),
            referenced_by: format!("{}.{}", stage.name, field),
        })
}

fn source_invalid(stage: &StageConfig, field: &str, reason: &str) -> JsoniumError {
    JsoniumError::SourceInvalid {
        stage: stage.name.clone(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
