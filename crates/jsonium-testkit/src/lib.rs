//! Test utilities for jsonium
//!
//! This crate provides shared testing utilities used across the jsonium workspace.

use tempfile::TempDir;

pub mod fixtures;

pub use fixtures::{read_json, write_json, write_text};

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test files in one gitignored location that is easy to clean
/// up manually if a test aborts.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use jsonium_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("templates.json");
/// std::fs::write(&file_path, "[]").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
