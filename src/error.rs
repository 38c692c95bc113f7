use thiserror::Error;

/// Number of characters shown in an error snippet.
const SNIPPET_CHARS: usize = 10;

/// Why a path was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathErrorKind {
    #[error("path is empty")]
    Empty,

    #[error("path must start with '$'")]
    MissingRoot,

    #[error("path is {len} bytes long, the limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("expected '.' or '[', found '{0}'")]
    UnexpectedChar(char),

    #[error("'.' must be followed by a member name")]
    DanglingDot,

    #[error("member name is empty")]
    EmptyMember,

    #[error("expected '.', '[' or end of path after member, found '{0}'")]
    TrailingCharacters(char),

    #[error("unterminated quoted member name")]
    UnterminatedQuote,

    #[error("escape sequence is not terminated")]
    TrailingEscape,

    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    #[error("unterminated '['")]
    UnterminatedBracket,

    #[error("array index is missing")]
    MissingIndex,

    #[error("invalid character '{0}' in array index")]
    InvalidIndex(char),

    #[error("array index is too large")]
    IndexOverflow,

    #[error("lexer made no progress")]
    NoProgress,
}

/// A malformed path, located by byte offset.
///
/// # Examples
///
/// ```
/// use clove_path::{validate, PathErrorKind};
///
/// let err = validate("$.foo[").unwrap_err();
/// assert_eq!(err.offset(), 5);
/// assert_eq!(err.kind(), &PathErrorKind::UnterminatedBracket);
/// assert_eq!(err.to_string(), "path error near '[' at offset 5: unterminated '['");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("path error near '{snippet}' at offset {offset}: {kind}")]
pub struct PathError {
    kind: PathErrorKind,
    offset: usize,
    snippet: String,
}

impl PathError {
    pub(crate) fn new(kind: PathErrorKind, path: &str, offset: usize) -> Self {
        PathError {
            kind,
            offset,
            snippet: snippet_at(path, offset),
        }
    }

    pub fn kind(&self) -> &PathErrorKind {
        &self.kind
    }

    /// Byte offset into the path string.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A short window of the path starting at the offending byte.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

fn snippet_at(path: &str, offset: usize) -> String {
    let mut start = offset.min(path.len());
    while !path.is_char_boundary(start) {
        start -= 1;
    }
    path[start..].chars().take(SNIPPET_CHARS).collect()
}
