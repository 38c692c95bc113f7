//! Validate paths and evaluate them against JSON input

use log::debug;

use super::CliError;
use crate::{Classification, Matches, ValidatedPath};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The path to validate and evaluate
    pub path: String,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// The path is valid
    SyntaxValid(Classification),
    /// A regular path matched; rendered value
    Match(String),
    /// A wildcard path was evaluated; rendered array of matches
    Matches(String),
    /// A regular path matched nothing
    NoMatch,
}

/// Execute a clove-path check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let path = ValidatedPath::parse(&options.path)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(path.classification()));
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: serde_json::Value = serde_json::from_str(json_str)?;
    debug!(
        "evaluating {} path {} against {} document",
        path.classification(),
        path,
        kind_of(&document)
    );

    Ok(match path.select(&document) {
        Matches::Single(Some(value)) => CheckResult::Match(render(value, options.pretty)?),
        Matches::Single(None) => CheckResult::NoMatch,
        Matches::Many(values) => {
            let list = serde_json::Value::Array(values.into_iter().cloned().collect());
            CheckResult::Matches(render(&list, options.pretty)?)
        }
    })
}

fn render(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// One line per component: canonical syntax, then the component itself.
pub fn describe_components(path: &str) -> Result<Vec<String>, CliError> {
    let path = ValidatedPath::parse(path)?;
    Ok(path
        .components()
        .map(|component| format!("{}\t{:?}", component, component))
        .collect())
}
