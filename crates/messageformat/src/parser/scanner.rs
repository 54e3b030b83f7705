//! Cursor over a template's code points.
//!
//! Positions are 0-based code-point offsets, which is what every
//! [`ParseError`] reports.

use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::one_of;

use super::error::{ParseError, ParseErrorKind};

pub(crate) const ESCAPE: char = '\\';
pub(crate) const OPEN: char = '{';
pub(crate) const CLOSE: char = '}';
pub(crate) const PART: char = ',';
pub(crate) const POUND: char = '#';
pub(crate) const EXTENSION: char = ':';

/// Whitespace between tokens: space, tab, carriage return, newline.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed in variable names and expression kinds.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A cursor over the code points of a template.
///
/// Built-in sub-parsers and registered parse functions share this API.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// The full template being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current code-point offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of code points in the template.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character under the cursor.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Move past the character under the cursor.
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Skip whitespace, returning the first non-whitespace character.
    pub fn skip_whitespace(&mut self) -> Option<char> {
        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                return Some(c);
            }
            self.pos += 1;
        }
        None
    }

    /// An error of `kind` at the current position.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }

    /// The code points in `[start, end)` as a string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Read a variable name or expression kind.
    ///
    /// Leading and trailing whitespace is skipped. Stops on `,` or `}` and
    /// leaves the cursor there, returning the identifier (possibly empty) and
    /// the terminator.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on a character outside `[A-Za-z0-9_]`, or on
    ///   whitespace inside the identifier
    /// - `InvalidExpr` on `{`
    /// - `UnbalancedBraces` if the input ends first
    pub fn read_identifier(&mut self) -> Result<(String, char), ParseError> {
        self.skip_whitespace();
        let first = self.pos;
        let mut last = first;

        while let Some(c) = self.peek() {
            match c {
                PART | CLOSE => return Ok((self.slice(first, last), c)),
                OPEN => return Err(self.error(ParseErrorKind::InvalidExpr)),
                c if is_whitespace(c) => {
                    self.advance();
                    self.skip_whitespace();
                }
                // Only contiguous runs count: a gap means inner whitespace.
                c if is_identifier_char(c) && self.pos == last => {
                    self.advance();
                    last = self.pos;
                }
                _ => return Err(self.error(ParseErrorKind::InvalidFormat)),
            }
        }
        Err(self.error(ParseErrorKind::UnbalancedBraces))
    }

    /// Read a choice name or extension name.
    ///
    /// Any run of non-whitespace, non-structural characters is accepted, so
    /// `=42` and non-ASCII names are valid. Returns the name and the next
    /// significant character (`None` at end of input); the cursor is left on
    /// that character.
    ///
    /// # Errors
    ///
    /// - `MissingChoiceName` if a structural character comes first
    /// - `UnbalancedBraces` if the input ends inside the name
    pub fn read_key(&mut self) -> Result<(String, Option<char>), ParseError> {
        self.skip_whitespace();
        let first = self.pos;

        while let Some(c) = self.peek() {
            match c {
                c if is_whitespace(c) => {
                    let key = self.slice(first, self.pos);
                    let next = self.skip_whitespace();
                    return Ok((key, next));
                }
                EXTENSION | PART | CLOSE | OPEN => {
                    if self.pos == first {
                        return Err(self.error(ParseErrorKind::MissingChoiceName));
                    }
                    return Ok((self.slice(first, self.pos), Some(c)));
                }
                _ => self.advance(),
            }
        }
        Err(self.error(ParseErrorKind::UnbalancedBraces))
    }

    /// Read the value of an `offset:` extension, leaving the cursor on the
    /// whitespace or brace that ends it.
    ///
    /// # Errors
    ///
    /// - `MissingOffsetValue` if no value precedes the terminator
    /// - `BadCast` if the value is not a base-10 integer
    /// - `InvalidOffsetValue` if it is negative
    /// - `UnbalancedBraces` if the input ends first
    pub fn read_offset(&mut self) -> Result<u64, ParseError> {
        self.skip_whitespace();
        let first = self.pos;

        while let Some(c) = self.peek() {
            if is_whitespace(c) || c == OPEN || c == CLOSE {
                if self.pos == first {
                    return Err(self.error(ParseErrorKind::MissingOffsetValue));
                }
                let token = self.slice(first, self.pos);
                let value = signed_integer
                    .parse(token.as_str())
                    .map_err(|_| self.error(ParseErrorKind::BadCast))?;
                return u64::try_from(value)
                    .map_err(|_| self.error(ParseErrorKind::InvalidOffsetValue));
            }
            self.advance();
        }
        Err(self.error(ParseErrorKind::UnbalancedBraces))
    }
}

/// Parse an optionally signed run of ASCII digits.
fn signed_integer(input: &mut &str) -> ModalResult<i64> {
    (opt(one_of(['+', '-'])), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}
