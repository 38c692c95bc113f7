// tests/parser_tests.rs

use clove_path::{validate, Classification, PathComponent, PathErrorKind, ValidatedPath};

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_regular_paths() {
    let cases = [
        "$",
        "$.a",
        "$.a.b.c",
        "$[0]",
        "$[-1]",
        "$[#-3]",
        "$[#]",
        "$.\"*\"",
        "$.\"a.b\"[2].c",
        "$.a*",
    ];

    for path in cases {
        assert_eq!(validate(path).unwrap(), Classification::Regular, "{}", path);
    }
}

#[test]
fn test_wildcard_paths() {
    let cases = [
        "$.*",
        "$[*]",
        "$.**",
        "$..*",
        "$..a",
        "$..[0]",
        "$.a[*].b",
        "$.a.b..c[0]",
        "$[0][1].*",
    ];

    for path in cases {
        assert_eq!(validate(path).unwrap(), Classification::Wildcard, "{}", path);
    }
}

#[test]
fn test_classification_of_components() {
    let path = ValidatedPath::parse("$.a[1]..b").unwrap();
    let components: Vec<_> = path.components().collect();
    assert_eq!(Classification::of(&components), Classification::Wildcard);
    assert_eq!(Classification::of(&components[..2]), Classification::Regular);
}

#[test]
fn test_validation_is_stable() {
    let paths = ["$.a", "$..a", "$.a[", "$[99999999999999999999]", "$.\"x\\", "$[#]"];
    for path in paths {
        assert_eq!(validate(path), validate(path), "{}", path);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_location_for_unterminated_bracket() {
    let err = validate("$.foo[").unwrap_err();
    assert_eq!(err.kind(), &PathErrorKind::UnterminatedBracket);
    assert_eq!(err.offset(), 5);
    assert_eq!(err.snippet(), "[");
    assert_eq!(
        err.to_string(),
        "path error near '[' at offset 5: unterminated '['"
    );
}

#[test]
fn test_error_snippet_window() {
    let err = validate("$.store.books[first].title").unwrap_err();
    assert_eq!(err.kind(), &PathErrorKind::InvalidIndex('f'));
    assert_eq!(err.offset(), 14);
    assert_eq!(err.snippet(), "first].tit");
}

#[test]
fn test_error_messages() {
    let cases = [
        ("", "path is empty"),
        ("x", "path must start with '$'"),
        ("$.", "'.' must be followed by a member name"),
        ("$[1x]", "invalid character 'x' in array index"),
        ("$[12345678901234567890]", "array index is too large"),
        ("$.\"a\\", "escape sequence is not terminated"),
        ("$.\"a\\t\"", "invalid escape sequence '\\t'"),
    ];

    for (path, reason) in cases {
        let err = validate(path).unwrap_err();
        assert!(
            err.to_string().ends_with(reason),
            "{:?} gave {:?}",
            path,
            err.to_string()
        );
    }
}

#[test]
fn test_adversarial_input_never_panics() {
    let inputs = [
        "$\\",
        "$.\\",
        "$.\"\\",
        "$[[[[",
        "$]]]]",
        "$[#-#]",
        "$[--1]",
        "$[99999999999999999999999999999999]",
        "$......",
        "$.\"\"\"",
        "$.*.*.*.",
        "$\u{0}",
        "$.\u{1F600}[",
    ];

    for path in inputs {
        let _ = validate(path);
    }
}

// ============================================================================
// ValidatedPath
// ============================================================================

#[test]
fn test_validated_path_round_trip() {
    let path: ValidatedPath = "$.a[*]".parse().unwrap();
    assert_eq!(path.as_str(), "$.a[*]");
    assert_eq!(path.to_string(), "$.a[*]");
    assert!(path.is_wildcard());

    let again = ValidatedPath::try_from(path.to_string()).unwrap();
    assert_eq!(again, path);
}

#[test]
fn test_validated_path_rejects_bad_input() {
    assert!(ValidatedPath::parse("$.a.").is_err());
    assert!("nope".parse::<ValidatedPath>().is_err());
}

#[test]
fn test_components_display_canonically() {
    let path = ValidatedPath::parse("$.a.\"b.c\"..d.*.**[3][-1][#][*]..[0]").unwrap();
    let rendered: String = path.components().map(|c| c.to_string()).collect();
    assert_eq!(rendered, ".a.\"b.c\"..d.*..*[3][#-1][#][*]..*[0]");

    // The canonical form lexes back to the same components.
    let canonical = ValidatedPath::parse(&format!("${}", rendered)).unwrap();
    let original: Vec<PathComponent<'static>> =
        path.components().map(PathComponent::into_owned).collect();
    let reparsed: Vec<PathComponent<'static>> =
        canonical.components().map(PathComponent::into_owned).collect();
    assert_eq!(original, reparsed);
}
