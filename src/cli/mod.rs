//! CLI support for clove-path
//!
//! Provides programmatic access to the clove-path CLI for embedding in other
//! tools.

mod check;
mod docs;

pub use check::{describe_components, execute_check, CheckOptions, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Path(#[from] crate::PathError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'clove-path docs' to see available categories.")]
    UnknownCategory(String),
}
