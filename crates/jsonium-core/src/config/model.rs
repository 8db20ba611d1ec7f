use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::error::{JsoniumError, Result};

/// Plan file schema - a pipeline of generation stages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "stage")]
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default)]
    pub dedup: DedupPolicy,
    /// Stage whose results are printed. Defaults to the last stage.
    #[serde(default)]
    pub stage: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            dedup: DedupPolicy::Structural,
            stage: None,
        }
    }
}

fn default_pretty() -> bool {
    true
}

/// Equality used when removing duplicate results
///
/// `Structural` compares documents recursively and ignores mapping field order.
/// `Serialized` compares compact JSON text, so `{"a":1,"b":2}` and
/// `{"b":2,"a":1}` are kept as two distinct results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DedupPolicy {
    #[default]
    Structural,
    Serialized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    pub name: String,
    #[serde(default)]
    pub paths: Vec<String>,
    pub templates: Source,
    pub combos: Source,
    /// Earlier stages whose results are appended after generation
    #[serde(default)]
    pub concat: Vec<String>,
    /// Top-level key renames, `before = "after"`
    #[serde(default)]
    pub rename: BTreeMap<String, String>,
    #[serde(default)]
    pub unique: bool,
}

/// Where a stage reads its templates or combos from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Source {
    /// Documents written directly in the plan
    Inline(Vec<Value>),
    /// A JSON file holding an array, relative to the plan file
    File { file: PathBuf },
    /// The results of an earlier stage
    Stage { stage: String },
}

impl PlanConfig {
    /// Parse a plan from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let plan: PlanConfig = toml::from_str(content)?;
        Ok(plan)
    }

    /// Check stage names and the output selection
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(JsoniumError::PlanInvalid(
                "plan defines no [[stage]] entries".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for stage in &self.stages {
            if stage.name.trim().is_empty() {
                return Err(JsoniumError::PlanInvalid(
                    "stage name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(stage.name.as_str()) {
                return Err(JsoniumError::StageDuplicate(stage.name.clone()));
            }
        }

        if let Some(output_stage) = &self.output.stage {
            if !seen.contains(output_stage.as_str()) {
                return Err(JsoniumError::StageNotFound {
                    name: output_stage.clone(),
                    referenced_by: "output".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Name of the stage whose results form the plan output
    pub fn output_stage(&self) -> Option<&str> {
        self.output
            .stage
            .as_deref()
            .or_else(|| self.stages.last().map(|s| s.name.as_str()))
    }
}
