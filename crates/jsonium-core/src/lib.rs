//! Combinatorial template expansion for JSON documents.
//!
//! A [`Generator`] holds a set of template documents. Calling
//! [`Generator::generate`] with a list of path expressions and a list of combos
//! produces one copy of every template per combo, with `{{name}}` placeholders
//! substituted at the locations the path expressions select.
//!
//! ```
//! use jsonium_core::Generator;
//! use serde_json::json;
//!
//! let mut generator = Generator::new(&[json!({"a": "{{f1}} 1"}), json!({"a": "{{f1}} 2"})]);
//! generator.generate(["a"], &[json!({"f1": "d1"}), json!({"f1": "d2"})]);
//!
//! assert_eq!(
//!     generator.results(),
//!     &[
//!         json!({"a": "d1 1"}),
//!         json!({"a": "d2 1"}),
//!         json!({"a": "d1 2"}),
//!         json!({"a": "d2 2"}),
//!     ]
//! );
//! ```

// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod expr;
pub mod generator;
pub mod path;
pub mod plan;

// Re-export commonly used types
pub use config::{DedupPolicy, PlanConfig};
pub use error::{JsoniumError, Result};
pub use expr::PathExpr;
pub use generator::{ComboSource, ConcatSource, Generator};
pub use path::{PathSegment, PathWriteError, ResolvedPath};
pub use plan::{run_plan, DocumentLoader, InlineOnly, PlanOutcome};
