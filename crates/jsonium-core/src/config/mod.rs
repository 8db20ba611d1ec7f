//! Plan configuration (`*.toml`) and syntax constants

pub mod consts;
mod model;

pub use model::{DedupPolicy, OutputConfig, PlanConfig, Source, StageConfig};
