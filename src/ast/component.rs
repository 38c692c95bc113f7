use std::borrow::Cow;
use std::fmt;

/// One step of a path, as produced by the [`Lexer`](crate::lexer::Lexer).
///
/// Components borrow from the path string whenever they can. Only quoted
/// member names that contain escapes allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent<'a> {
    /// Object member access
    ///
    /// # Examples
    /// ```text
    /// $.name          Field { key: "name", recursive: false }
    /// $."first name"  Field { key: "first name", recursive: false }
    /// $..name         Field { key: "name", recursive: true }
    /// ```
    Field { key: Cow<'a, str>, recursive: bool },

    /// Every member of the current object, or with `recursive` the
    /// descendant-or-self axis
    ///
    /// # Examples
    /// ```text
    /// $.*     FieldWildcard { recursive: false }
    /// $.**    FieldWildcard { recursive: true }
    /// $..*    FieldWildcard { recursive: true }
    /// $..[0]  FieldWildcard { recursive: true }, Index { value: 0, .. }
    /// ```
    FieldWildcard { recursive: bool },

    /// Array element access
    ///
    /// # Examples
    /// ```text
    /// $[2]    Index { value: 2, from_back: false }
    /// $[-1]   Index { value: 1, from_back: true }
    /// $[#-1]  Index { value: 1, from_back: true }
    /// ```
    Index { value: u64, from_back: bool },

    /// Every element of the current array (`[*]`)
    IndexWildcard,

    /// `[#]`, which never addresses anything
    IndexNullSentinel,
}

impl PathComponent<'_> {
    /// Whether this component can match more than one value.
    pub fn is_wildcard(&self) -> bool {
        match self {
            PathComponent::Field { recursive, .. } => *recursive,
            PathComponent::FieldWildcard { .. } | PathComponent::IndexWildcard => true,
            PathComponent::Index { .. } | PathComponent::IndexNullSentinel => false,
        }
    }

    pub fn into_owned(self) -> PathComponent<'static> {
        match self {
            PathComponent::Field { key, recursive } => PathComponent::Field {
                key: Cow::Owned(key.into_owned()),
                recursive,
            },
            PathComponent::FieldWildcard { recursive } => PathComponent::FieldWildcard { recursive },
            PathComponent::Index { value, from_back } => PathComponent::Index { value, from_back },
            PathComponent::IndexWildcard => PathComponent::IndexWildcard,
            PathComponent::IndexNullSentinel => PathComponent::IndexNullSentinel,
        }
    }
}

/// Renders the component back in canonical path syntax.
impl fmt::Display for PathComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathComponent::Field { key, recursive } => {
                f.write_str(if *recursive { ".." } else { "." })?;
                if is_bare_key(key) {
                    f.write_str(key)
                } else {
                    f.write_str("\"")?;
                    for ch in key.chars() {
                        if ch == '"' || ch == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{}", ch)?;
                    }
                    f.write_str("\"")
                }
            }
            PathComponent::FieldWildcard { recursive: false } => f.write_str(".*"),
            PathComponent::FieldWildcard { recursive: true } => f.write_str("..*"),
            PathComponent::Index {
                value,
                from_back: false,
            } => write!(f, "[{}]", value),
            PathComponent::Index {
                value,
                from_back: true,
            } => write!(f, "[#-{}]", value),
            PathComponent::IndexWildcard => f.write_str("[*]"),
            PathComponent::IndexNullSentinel => f.write_str("[#]"),
        }
    }
}

// A key that lexes back to itself without quotes.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with(['*', '"'])
        && !key.contains(['.', '[', '\\'])
}
