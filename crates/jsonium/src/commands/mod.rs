//! CLI command implementations

pub mod expand;
pub mod generate;
pub mod run;
