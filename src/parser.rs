use std::{fmt, str::FromStr};

use log::trace;

use crate::{
    ast::{Classification, PathComponent},
    error::PathError,
    lexer::Lexer,
};

/// Validates a path and classifies it.
///
/// Runs the lexer over the whole string once. The first malformed segment is
/// reported with its byte offset; nothing is allocated for well-formed input
/// beyond unescaped quoted keys.
///
/// # Examples
///
/// ```
/// use clove_path::{validate, Classification};
///
/// assert_eq!(validate("$.a[0]").unwrap(), Classification::Regular);
/// assert_eq!(validate("$.a[*]").unwrap(), Classification::Wildcard);
/// assert!(validate("a.b").is_err());
/// ```
pub fn validate(path: &str) -> Result<Classification, PathError> {
    let mut class = Classification::Regular;
    for component in Lexer::new(path) {
        class = class.merge(&component?);
    }
    trace!("validated path {:?} as {}", path, class);
    Ok(class)
}

/// A path that passed [`validate`], together with its classification.
///
/// This is the only input the evaluator accepts. Components are not stored;
/// they are streamed from the path string again on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedPath {
    source: String,
    classification: Classification,
}

impl ValidatedPath {
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let classification = validate(path)?;
        Ok(ValidatedPath {
            source: path.to_string(),
            classification,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_wildcard(&self) -> bool {
        self.classification.is_wildcard()
    }

    /// A fresh lexer positioned at the start of the path.
    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(&self.source)
    }

    /// The components of the path, in order.
    pub fn components(&self) -> impl Iterator<Item = PathComponent<'_>> {
        self.lexer().map_while(Result::ok)
    }
}

impl FromStr for ValidatedPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatedPath::parse(s)
    }
}

impl TryFrom<String> for ValidatedPath {
    type Error = PathError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        let classification = validate(&source)?;
        Ok(ValidatedPath {
            source,
            classification,
        })
    }
}

impl AsRef<str> for ValidatedPath {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for ValidatedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
