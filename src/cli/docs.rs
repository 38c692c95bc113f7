//! Documentation content for the clove-path CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Members,
    Indices,
    Wildcards,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "members" | "member" | "fields" => Some(Self::Members),
            "indices" | "index" | "arrays" => Some(Self::Indices),
            "wildcards" | "wildcard" | "recursive" => Some(Self::Wildcards),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CLOVE PATH DOCUMENTATION

A clove path addresses values inside a JSON document. Every path starts with
$ (the root document) and chains member and element accessors. Regular paths
address at most one value; wildcard paths address any number of values.

DOCUMENTATION CATEGORIES

  members           Member access, quoted names, escapes
  indices           Array indices, counting from the back, [#]
  wildcards         Wildcards, recursive descent, result order
  errors            What makes a path invalid

QUICK REFERENCE

  $                 Root document
  $.name            Member
  $."a.b"           Quoted member
  $[0]              First element
  $[-1]  $[#-1]     Last element
  $[#]              Never matches
  $.*  $[*]         Every member / element
  $..name           Member at any depth
  $..*  $.**        Every descendant

Run 'clove-path doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Members) => Ok(MEMBERS_DOC),
        Some(DocCategory::Indices) => Ok(INDICES_DOC),
        Some(DocCategory::Wildcards) => Ok(WILDCARDS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const MEMBERS_DOC: &str = r#"MEMBERS - Object Member Access

BARE NAMES
  $.name
    Everything up to the next '.' or '[' is the member name.

    Example:
      Input:  {"user": {"name": "Alice"}}
      Path:   $.user.name
      Output: "Alice"

QUOTED NAMES
  $."first name"
    Quote names that contain '.', '[' or start with '*'.
    Inside quotes, \" is a quote and \\ is a backslash. No other escapes.

    Example:
      Input:  {"a.b": 1}
      Path:   $."a.b"
      Output: 1

NOTES
  - Names match exactly and are case-sensitive
  - A member lookup on an array or scalar is no match, not an error
"#;

const INDICES_DOC: &str = r#"INDICES - Array Element Access

FORWARD
  $[2]
    Zero-based element.

FROM THE BACK
  $[-1]   $[#-1]
    Counts from the end: length minus the literal.

    Example:
      Input:  [10, 20, 30]
      Path:   $[-1]
      Output: 30

    $[-0] is the FIRST element, not the last.

NEVER
  $[#]
    Always no match.

NOTES
  - At most 19 digits
  - Out of bounds is no match, not an error
  - An index on an object or scalar is no match
"#;

const WILDCARDS_DOC: &str = r#"WILDCARDS - Multi-Value Paths

MEMBERS AND ELEMENTS
  $.*     Every member value, in document order
  $[*]    Every element, in document order

RECURSIVE DESCENT
  $..name
    'name' on the current node or any node below it.

  $..*    $.**
    Every node strictly below the current node, breadth first.

  $..[0]  $..*.name
    With more path after the descent, the current node is tried too.

    Example:
      Input:  {"a": {"b": 1}}
      Path:   $..*
      Output: [{"b": 1}, 1]
"#;

const ERRORS_DOC: &str = r#"ERRORS - Invalid Paths

Errors report the byte offset and a short snippet of the path:

  path error near '[' at offset 5: unterminated '['

COMMON CAUSES
  - Path does not start with $
  - Trailing '.' or unclosed '['
  - Non-digit inside [...]
  - More than 19 digits in an index
  - Unterminated quote or escape in a quoted name
"#;
