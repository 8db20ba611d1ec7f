//! Input loading shared by CLI commands

use anyhow::{Context as _, Result};
use jsonium_core::{DocumentLoader, JsoniumError, PlanConfig};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads JSON files relative to a base directory
#[derive(Debug, Clone)]
pub struct FsLoader {
    base: PathBuf,
}

impl FsLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl DocumentLoader for FsLoader {
    fn load(&self, path: &Path) -> jsonium_core::Result<Value> {
        let full = self.base.join(path);
        let content = fs::read_to_string(&full).map_err(|e| JsoniumError::SourceLoadFailed {
            path: full.clone(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| JsoniumError::SourceLoadFailed {
            path: full,
            reason: e.to_string(),
        })
    }
}

/// Global context for CLI commands
pub struct Context {
    pub loader: FsLoader,
    pub verbose: bool,
}

impl Context {
    /// Create a context that resolves paths against the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn new(verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        Ok(Self {
            loader: FsLoader::new(current_dir),
            verbose,
        })
    }

    /// Read a JSON document given on the command line
    pub fn read_json(&self, path: &Path) -> Result<Value> {
        Ok(self.loader.load(path)?)
    }

    /// Read a JSON file that must hold an array
    pub fn read_array(&self, path: &Path) -> Result<Vec<Value>> {
        match self.read_json(path)? {
            Value::Array(items) => Ok(items),
            _ => anyhow::bail!("'{}' must hold a JSON array", path.display()),
        }
    }

    /// Parse a plan file; its file sources resolve against the plan's directory
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be read or parsed
    pub fn load_plan(&self, path: &Path) -> Result<(PlanConfig, FsLoader)> {
        let plan_path = self.loader.base.join(path);
        let content = fs::read_to_string(&plan_path)
            .with_context(|| format!("Failed to read plan '{}'", path.display()))?;
        let plan = PlanConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse plan '{}'", path.display()))?;

        let plan_dir = plan_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.loader.base.clone());

        Ok((plan, FsLoader::new(plan_dir)))
    }
}
