//! Multi-stage generation plans
//!
//! A plan is a list of stages, each one a [`Generator`](crate::Generator) run.
//! A stage reads templates and combos from inline documents, from files, or
//! from the results of an earlier stage, then optionally appends earlier
//! results, renames keys and removes duplicates.
//!
//! File access goes through [`DocumentLoader`], so this crate performs no I/O
//! of its own.

use serde_json::Value;
use std::path::Path;

use crate::error::{JsoniumError, Result};

mod runner;

pub use runner::run_plan;


/// Reads the JSON document behind a `{ file = "..." }` source
pub trait DocumentLoader {
    fn load(&self, path: &Path) -> Result<Value>;
}

impl<F> DocumentLoader for F
where
    F: Fn(&Path) -> Result<Value>,
{
    fn load(&self, path: &Path) -> Result<Value> {
        self(path)
    }
}

/// Loader for plans that only use inline and stage sources
///
/// Every file lookup fails with [`JsoniumError::SourceLoadFailed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineOnly;

impl DocumentLoader for InlineOnly {
    fn load(&self, path: &Path) -> Result<Value> {
        Err(JsoniumError::SourceLoadFailed {
            path: path.to_path_buf(),
            reason: "file sources are not available".to_string(),
        })
    }
}

/// Results of every stage of a finished plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    stages: Vec<(String, Vec<Value>)>,
    output: usize,
}

impl PlanOutcome {
    /// Results of the stage called `name`
    pub fn stage(&self, name: &str) -> Option<&[Value]> {
        self.stages
            .iter()
            .find(|(stage, _)| stage == name)
            .map(|(_, results)| results.as_slice())
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|(name, _)| name.as_str())
    }

    pub fn output_stage(&self) -> &str {
        &self.stages[self.output].0
    }

    /// Results of the output stage
    pub fn output(&self) -> &[Value] {
        &self.stages[self.output].1
    }

    pub fn into_output(mut self) -> Vec<Value> {
        self.stages.swap_remove(self.output).1
    }
}
