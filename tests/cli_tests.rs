use clove_path::cli::{
    describe_components, execute_check, get_doc_category, get_docs_overview, CheckOptions,
    CheckResult, CliError,
};
use clove_path::Classification;

fn check(path: &str, input: &str) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        path: path.to_string(),
        input: Some(input.to_string()),
        ..CheckOptions::default()
    })
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_syntax_only() {
    let result = execute_check(&CheckOptions {
        path: "$.a[*]".to_string(),
        syntax_only: true,
        ..CheckOptions::default()
    })
    .unwrap();
    assert_eq!(result, CheckResult::SyntaxValid(Classification::Wildcard));
}

#[test]
fn test_regular_match() {
    let result = check("$.user.name", r#"{"user": {"name": "Alice"}}"#).unwrap();
    assert_eq!(result, CheckResult::Match(r#""Alice""#.to_string()));
}

#[test]
fn test_regular_match_keeps_member_order() {
    let result = check("$.b", r#"{"b": {"z": 1, "a": 2.5}}"#).unwrap();
    assert_eq!(result, CheckResult::Match(r#"{"z":1,"a":2.5}"#.to_string()));
}

#[test]
fn test_numbers_print_as_written() {
    let big = check("$.n", r#"{"n": 18446744073709551615}"#).unwrap();
    assert_eq!(big, CheckResult::Match("18446744073709551615".to_string()));

    let float = check("$.f", r#"{"f": 1.0}"#).unwrap();
    assert_eq!(float, CheckResult::Match("1.0".to_string()));

    let all = check("$.*", r#"{"a": 1e300, "b": -7, "c": 0.5}"#).unwrap();
    assert_eq!(all, CheckResult::Matches("[1e300,-7,0.5]".to_string()));
}

#[test]
fn test_regular_no_match() {
    let result = check("$.user.age", r#"{"user": {}}"#).unwrap();
    assert_eq!(result, CheckResult::NoMatch);
}

#[test]
fn test_wildcard_matches() {
    let result = check("$..id", r#"{"id": 1, "items": [{"id": 2}, {"id": 3}]}"#).unwrap();
    assert_eq!(result, CheckResult::Matches("[1,2,3]".to_string()));

    let empty = check("$[*]", "{}").unwrap();
    assert_eq!(empty, CheckResult::Matches("[]".to_string()));
}

#[test]
fn test_pretty_output() {
    let result = execute_check(&CheckOptions {
        path: "$.*".to_string(),
        input: Some(r#"{"x": 1, "y": [true]}"#.to_string()),
        pretty: true,
        syntax_only: false,
    })
    .unwrap();
    assert_eq!(
        result,
        CheckResult::Matches("[\n  1,\n  [\n    true\n  ]\n]".to_string())
    );
}

#[test]
fn test_invalid_path() {
    let err = check("$.a[", "{}").unwrap_err();
    assert!(matches!(err, CliError::Path(_)));
    assert_eq!(
        err.to_string(),
        "path error near '[' at offset 3: unterminated '['"
    );
}

#[test]
fn test_invalid_json() {
    let err = check("$.a", "{not json").unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON"));
}

#[test]
fn test_missing_input() {
    let err = execute_check(&CheckOptions {
        path: "$".to_string(),
        ..CheckOptions::default()
    })
    .unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

// ============================================================================
// components
// ============================================================================

#[test]
fn test_describe_components() {
    let lines = describe_components("$.a[-1]..*").unwrap();
    assert_eq!(
        lines,
        [
            ".a\tField { key: \"a\", recursive: false }",
            "[#-1]\tIndex { value: 1, from_back: true }",
            "..*\tFieldWildcard { recursive: true }",
        ]
    );
    assert!(describe_components("$.").is_err());
}

// ============================================================================
// docs
// ============================================================================

#[test]
fn test_docs() {
    assert!(get_docs_overview().contains("QUICK REFERENCE"));
    assert!(get_doc_category("indices").unwrap().contains("[#]"));
    assert!(get_doc_category("Wildcards").unwrap().contains("RECURSIVE DESCENT"));
    assert!(matches!(
        get_doc_category("nope"),
        Err(CliError::UnknownCategory(_))
    ));
}
