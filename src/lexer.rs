use std::borrow::Cow;

use crate::{
    ast::PathComponent,
    error::{PathError, PathErrorKind},
};

/// Longest digit run accepted inside `[...]`. Any 19-digit number fits a `u64`.
///
/// Indices must also stay below `usize::MAX`. On 64-bit targets the digit
/// limit already guarantees that; on 32-bit targets a literal of
/// 4294967295 or more is rejected as too large.
pub const MAX_INDEX_DIGITS: usize = 19;

/// Longest path accepted, in bytes. Bounds the recursion depth of wildcard
/// evaluation.
pub const MAX_PATH_LEN: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Streaming lexer over a path string.
///
/// Yields one [`PathComponent`] per segment. The root marker is checked on the
/// first call to `next`; the first error ends the stream.
///
/// # Examples
///
/// ```
/// use clove_path::{Lexer, PathComponent};
///
/// let components: Vec<_> = Lexer::new("$.items[-1]").collect::<Result<_, _>>().unwrap();
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[1], PathComponent::Index { value: 1, from_back: true });
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    state: State,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            state: State::Start,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once every component has been produced (or an error ended the
    /// stream).
    pub fn is_finished(&self) -> bool {
        match self.state {
            State::Start => false,
            State::Running => self.position >= self.input.len(),
            State::Done => true,
        }
    }

    fn current_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\0')
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn error(&self, kind: PathErrorKind, offset: usize) -> PathError {
        PathError::new(kind, self.input, offset)
    }

    fn read_root(&mut self) -> Result<(), PathError> {
        if self.input.is_empty() {
            return Err(self.error(PathErrorKind::Empty, 0));
        }
        if self.input.len() > MAX_PATH_LEN {
            return Err(self.error(
                PathErrorKind::TooLong {
                    len: self.input.len(),
                    max: MAX_PATH_LEN,
                },
                0,
            ));
        }
        if self.current_byte() != Some(b'$') {
            return Err(self.error(PathErrorKind::MissingRoot, 0));
        }
        self.advance();
        Ok(())
    }

    /// `.` has already been seen at the current position.
    fn read_member(&mut self) -> Result<PathComponent<'a>, PathError> {
        let dot = self.position;
        self.advance();

        match self.current_byte() {
            None => Err(self.error(PathErrorKind::DanglingDot, dot)),
            Some(b'*') => {
                self.advance();
                let recursive = self.current_byte() == Some(b'*');
                if recursive {
                    self.advance();
                }
                self.expect_member_end()?;
                Ok(PathComponent::FieldWildcard { recursive })
            }
            Some(b'.') => {
                self.advance();
                match self.current_byte() {
                    None => Err(self.error(PathErrorKind::DanglingDot, dot)),
                    Some(b'*') => {
                        self.advance();
                        self.expect_member_end()?;
                        Ok(PathComponent::FieldWildcard { recursive: true })
                    }
                    // `..[` descends, the bracket starts the next segment
                    Some(b'[') => Ok(PathComponent::FieldWildcard { recursive: true }),
                    Some(_) => Ok(PathComponent::Field {
                        key: self.read_key()?,
                        recursive: true,
                    }),
                }
            }
            Some(_) => Ok(PathComponent::Field {
                key: self.read_key()?,
                recursive: false,
            }),
        }
    }

    fn read_key(&mut self) -> Result<Cow<'a, str>, PathError> {
        if self.current_byte() == Some(b'"') {
            let key = self.read_quoted()?;
            self.expect_member_end()?;
            return Ok(key);
        }

        let start = self.position;
        while let Some(b) = self.current_byte() {
            if b == b'.' || b == b'[' {
                break;
            }
            self.advance();
        }

        if self.position == start {
            return Err(self.error(PathErrorKind::EmptyMember, start));
        }
        Ok(Cow::Borrowed(&self.input[start..self.position]))
    }

    fn read_quoted(&mut self) -> Result<Cow<'a, str>, PathError> {
        let open = self.position;
        self.advance(); // opening quote

        let content_start = self.position;
        let mut segment_start = self.position;
        let mut unescaped: Option<String> = None;

        loop {
            match self.current_byte() {
                None => return Err(self.error(PathErrorKind::UnterminatedQuote, open)),
                Some(b'"') => break,
                Some(b'\\') => {
                    let backslash = self.position;
                    self.advance();
                    let escaped = match self.current_byte() {
                        None => return Err(self.error(PathErrorKind::TrailingEscape, backslash)),
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(_) => {
                            let ch = self.char_at(self.position);
                            return Err(self.error(PathErrorKind::InvalidEscape(ch), backslash));
                        }
                    };
                    let buf = unescaped.get_or_insert_with(String::new);
                    buf.push_str(&self.input[segment_start..backslash]);
                    buf.push(escaped);
                    self.advance();
                    segment_start = self.position;
                }
                Some(_) => self.advance(),
            }
        }

        let close = self.position;
        self.advance(); // closing quote

        Ok(match unescaped {
            Some(mut buf) => {
                buf.push_str(&self.input[segment_start..close]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&self.input[content_start..close]),
        })
    }

    fn expect_member_end(&self) -> Result<(), PathError> {
        match self.current_byte() {
            None | Some(b'.') | Some(b'[') => Ok(()),
            Some(_) => Err(self.error(
                PathErrorKind::TrailingCharacters(self.char_at(self.position)),
                self.position,
            )),
        }
    }

    /// `[` has already been seen at the current position.
    fn read_index(&mut self) -> Result<PathComponent<'a>, PathError> {
        let open = self.position;
        self.advance();

        let component = match self.current_byte() {
            None => return Err(self.error(PathErrorKind::UnterminatedBracket, open)),
            Some(b'*') => {
                self.advance();
                PathComponent::IndexWildcard
            }
            Some(b'#') => {
                self.advance();
                match self.current_byte() {
                    Some(b'-') => {
                        self.advance();
                        PathComponent::Index {
                            value: self.read_digits(open)?,
                            from_back: true,
                        }
                    }
                    _ => PathComponent::IndexNullSentinel,
                }
            }
            Some(b'-') => {
                self.advance();
                PathComponent::Index {
                    value: self.read_digits(open)?,
                    from_back: true,
                }
            }
            Some(_) => PathComponent::Index {
                value: self.read_digits(open)?,
                from_back: false,
            },
        };

        match self.current_byte() {
            Some(b']') => {
                self.advance();
                Ok(component)
            }
            None => Err(self.error(PathErrorKind::UnterminatedBracket, open)),
            Some(_) => Err(self.error(
                PathErrorKind::InvalidIndex(self.char_at(self.position)),
                self.position,
            )),
        }
    }

    fn read_digits(&mut self, open: usize) -> Result<u64, PathError> {
        let start = self.position;
        while self.current_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }

        let digits = &self.input[start..self.position];
        if digits.is_empty() {
            return Err(match self.current_byte() {
                None => self.error(PathErrorKind::UnterminatedBracket, open),
                Some(b']') => self.error(PathErrorKind::MissingIndex, start),
                Some(_) => self.error(
                    PathErrorKind::InvalidIndex(self.char_at(start)),
                    start,
                ),
            });
        }
        if digits.len() > MAX_INDEX_DIGITS {
            return Err(self.error(PathErrorKind::IndexOverflow, start));
        }

        let value: u64 = digits
            .parse()
            .map_err(|_| self.error(PathErrorKind::IndexOverflow, start))?;
        if value >= usize::MAX as u64 {
            return Err(self.error(PathErrorKind::IndexOverflow, start));
        }
        Ok(value)
    }

    fn next_component(&mut self) -> Result<Option<PathComponent<'a>>, PathError> {
        if self.state == State::Start {
            self.read_root()?;
            self.state = State::Running;
        }

        let start = self.position;
        let component = match self.current_byte() {
            None => return Ok(None),
            Some(b'.') => self.read_member()?,
            Some(b'[') => self.read_index()?,
            Some(_) => {
                return Err(self.error(PathErrorKind::UnexpectedChar(self.char_at(start)), start));
            }
        };

        // Every component must consume input, otherwise the caller would spin.
        if self.position <= start {
            return Err(self.error(PathErrorKind::NoProgress, start));
        }
        Ok(Some(component))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<PathComponent<'a>, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }
        match self.next_component() {
            Ok(Some(component)) => Some(Ok(component)),
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[test]
fn test_recursive_shortcuts() {
    for path in ["$..*", "$.**"] {
        let mut lexer = Lexer::new(path);
        assert_eq!(
            lexer.next().unwrap().unwrap(),
            PathComponent::FieldWildcard { recursive: true }
        );
        assert!(lexer.next().is_none());
    }
}

#[test]
fn test_descend_before_bracket() {
    let mut lexer = Lexer::new("$..[0]");
    assert_eq!(
        lexer.next().unwrap().unwrap(),
        PathComponent::FieldWildcard { recursive: true }
    );
    assert_eq!(lexer.position(), 3);
    assert_eq!(
        lexer.next().unwrap().unwrap(),
        PathComponent::Index {
            value: 0,
            from_back: false
        }
    );
    assert!(lexer.is_finished());
}

#[cfg(target_pointer_width = "32")]
#[test]
fn test_index_limited_by_pointer_width() {
    let err = Lexer::new("$[4294967295]").find_map(Result::err).unwrap();
    assert_eq!(err.kind(), &PathErrorKind::IndexOverflow);
    assert_eq!(err.offset(), 2);
    assert_eq!(
        Lexer::new("$[4294967294]").next().unwrap().unwrap(),
        PathComponent::Index {
            value: 4_294_967_294,
            from_back: false
        }
    );
}
