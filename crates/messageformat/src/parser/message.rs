//! Recursive-descent message parser.
//!
//! Parses message templates into a [`ParseTree`]. Handles:
//! - Literal text with `\` escapes and `#` placeholders
//! - `{name}` variables
//! - `plural`, `select`, `selectordinal` and `date` expressions
//! - Expressions of kinds registered in a [`KindRegistry`]
//! - Choice bodies, which are full messages and may nest further expressions

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::ast::{CustomExpr, DateExpr, DateWidth, Node, ParseTree, PluralExpr, SelectExpr, VarExpr};
use super::error::{ParseError, ParseErrorKind};
use super::literal::scan_literal;
use super::scanner::{CLOSE, ESCAPE, EXTENSION, OPEN, PART, Scanner};
use crate::interpreter::KindRegistry;

/// Default limit on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Kinds the parser handles itself.
pub const BUILTIN_KINDS: &[&str] = &["plural", "select", "selectordinal", "date"];

/// Parse a template with the built-in expression kinds.
///
/// # Example
///
/// ```
/// use messageformat::parser::{Node, parse};
///
/// let tree = parse("Hello {name}!").unwrap();
/// assert_eq!(tree.nodes.len(), 3);
/// assert_eq!(tree.nodes[1].kind(), "var");
/// ```
pub fn parse(input: &str) -> Result<ParseTree, ParseError> {
    Parser::new().parse(input)
}

/// Where a message body stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyEnd {
    /// End of input.
    Eof,
    /// An unescaped `}` (the cursor is on it).
    Close,
}

/// A message parser, optionally extended with registered expression kinds.
#[derive(Clone)]
pub struct Parser {
    kinds: Arc<KindRegistry>,
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            kinds: Arc::new(KindRegistry::new()),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that also accepts the kinds in `kinds`.
    pub fn with_kinds(kinds: Arc<KindRegistry>) -> Self {
        Self {
            kinds,
            ..Self::default()
        }
    }

    /// Limit expression nesting to `max_depth` levels.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    /// Every kind name this parser accepts after `{name, `.
    pub fn known_kinds(&self) -> Vec<&str> {
        BUILTIN_KINDS
            .iter()
            .copied()
            .chain(self.kinds.names())
            .collect()
    }

    /// Parse a complete message.
    ///
    /// Stops at the first error; no partial tree is returned.
    pub fn parse(&self, input: &str) -> Result<ParseTree, ParseError> {
        let mut scanner = Scanner::new(input);
        let mut tree = ParseTree::new();

        if self.parse_body(&mut scanner, &mut tree, 0)? == BodyEnd::Close {
            return Err(scanner.error(ParseErrorKind::UnbalancedBraces));
        }

        debug!(nodes = tree.nodes.len(), depth = tree.depth(), "parsed message");
        Ok(tree)
    }

    /// Parse literal runs and expressions into `tree` until the end of input
    /// or an unescaped `}`.
    fn parse_body(
        &self,
        scanner: &mut Scanner<'_>,
        tree: &mut ParseTree,
        depth: usize,
    ) -> Result<BodyEnd, ParseError> {
        let mut start = scanner.pos();
        let mut escaped = false;

        while let Some(c) = scanner.peek() {
            match c {
                ESCAPE => {
                    scanner.advance();
                    escaped = true;
                }
                CLOSE if !escaped => {
                    flush_literal(scanner, tree, start);
                    return Ok(BodyEnd::Close);
                }
                OPEN if !escaped => {
                    flush_literal(scanner, tree, start);
                    if depth >= self.max_depth {
                        return Err(scanner.error(ParseErrorKind::MaxDepthExceeded));
                    }
                    scanner.advance();
                    let node = self.parse_expression(scanner, depth + 1)?;
                    tree.push(node);
                    // Step over the expression's closing brace.
                    scanner.advance();
                    start = scanner.pos();
                    escaped = false;
                }
                _ => {
                    scanner.advance();
                    escaped = false;
                }
            }
        }

        flush_literal(scanner, tree, start);
        Ok(BodyEnd::Eof)
    }

    /// Parse one expression. The cursor starts after its `{` and is left on
    /// its closing `}`.
    fn parse_expression(
        &self,
        scanner: &mut Scanner<'_>,
        depth: usize,
    ) -> Result<Node, ParseError> {
        let (name, terminator) = scanner.read_identifier()?;
        if name.is_empty() {
            return Err(scanner.error(ParseErrorKind::MissingVarName));
        }
        if terminator == CLOSE {
            return Ok(Node::Var(VarExpr { name }));
        }

        scanner.advance();
        let (kind, _) = scanner.read_identifier()?;

        let node = match kind.as_str() {
            "plural" => Node::Plural(self.parse_plural(name, scanner, depth)?),
            "select" => Node::Select(self.parse_select(name, scanner, depth)?),
            "selectordinal" => Node::SelectOrdinal(self.parse_select(name, scanner, depth)?),
            "date" => Node::Date(parse_date(name, scanner)?),
            _ => self.parse_custom(name, kind, scanner)?,
        };

        if scanner.peek() != Some(CLOSE) {
            return Err(scanner.error(ParseErrorKind::UnbalancedBraces));
        }
        Ok(node)
    }

    fn parse_select(
        &self,
        key: String,
        scanner: &mut Scanner<'_>,
        depth: usize,
    ) -> Result<SelectExpr, ParseError> {
        let (choices, _) = self.parse_choices(scanner, depth, false)?;
        Ok(SelectExpr { key, choices })
    }

    fn parse_plural(
        &self,
        key: String,
        scanner: &mut Scanner<'_>,
        depth: usize,
    ) -> Result<PluralExpr, ParseError> {
        let (choices, offset) = self.parse_choices(scanner, depth, true)?;
        Ok(PluralExpr {
            select: SelectExpr { key, choices },
            offset,
        })
    }

    /// Parse `, name{body} name{body} ...` up to the expression's closing
    /// brace. With `allow_offset`, an `offset:N` extension may precede the
    /// first choice.
    fn parse_choices(
        &self,
        scanner: &mut Scanner<'_>,
        depth: usize,
        allow_offset: bool,
    ) -> Result<(BTreeMap<String, ParseTree>, u64), ParseError> {
        if scanner.peek() != Some(PART) {
            return Err(scanner.error(ParseErrorKind::MalformedOption));
        }
        scanner.advance();

        let mut choices = BTreeMap::new();
        let mut offset = None;

        while !scanner.is_at_end() {
            let (mut key, mut next) = scanner.read_key()?;

            if next == Some(EXTENSION) {
                if !allow_offset {
                    return Err(scanner.error(ParseErrorKind::UnexpectedExtension));
                }
                if key != "offset" {
                    return Err(scanner.error(ParseErrorKind::UnsupportedExtension { name: key }));
                }
                if offset.is_some() || !choices.is_empty() {
                    return Err(scanner.error(ParseErrorKind::UnexpectedExtension));
                }
                scanner.advance();
                offset = Some(scanner.read_offset()?);
                (key, next) = scanner
                    .read_key()
                    .map_err(|e| ParseError::new(ParseErrorKind::MissingChoiceName, e.position))?;
            }

            if next != Some(OPEN) {
                return Err(scanner.error(ParseErrorKind::MissingChoiceContent));
            }
            if choices.contains_key(&key) {
                return Err(scanner.error(ParseErrorKind::DuplicateChoice { name: key }));
            }

            let body = self.parse_choice_body(scanner, depth)?;
            choices.insert(key, body);

            if scanner.peek() == Some(CLOSE) {
                break;
            }
        }

        if !choices.contains_key("other") {
            return Err(scanner.error(ParseErrorKind::MissingMandatoryChoice));
        }
        Ok((choices, offset.unwrap_or(0)))
    }

    /// Parse a `{`-delimited choice body, leaving the cursor on the next
    /// significant character.
    fn parse_choice_body(
        &self,
        scanner: &mut Scanner<'_>,
        depth: usize,
    ) -> Result<ParseTree, ParseError> {
        scanner.advance();
        let mut body = ParseTree::new();
        match self.parse_body(scanner, &mut body, depth)? {
            BodyEnd::Close => scanner.advance(),
            BodyEnd::Eof => return Err(scanner.error(ParseErrorKind::UnbalancedBraces)),
        }
        scanner.skip_whitespace();
        Ok(body)
    }

    fn parse_custom(
        &self,
        key: String,
        kind: String,
        scanner: &mut Scanner<'_>,
    ) -> Result<Node, ParseError> {
        let Some(registered) = self.kinds.get(&kind) else {
            return Err(scanner.error(ParseErrorKind::UnknownType { name: kind }));
        };
        let Some(parse_fn) = registered.parse_fn() else {
            return Err(scanner.error(ParseErrorKind::UndefinedParseFunc { name: kind }));
        };
        let payload = parse_fn(&key, scanner)?;
        Ok(Node::Custom(CustomExpr { kind, key, payload }))
    }
}

/// Parse `, short` (or medium, long, full).
fn parse_date(key: String, scanner: &mut Scanner<'_>) -> Result<DateExpr, ParseError> {
    if scanner.peek() != Some(PART) {
        return Err(scanner.error(ParseErrorKind::MalformedOption));
    }
    scanner.advance();

    let (width, _) = scanner.read_identifier()?;
    let width = width
        .parse::<DateWidth>()
        .map_err(|()| scanner.error(ParseErrorKind::InvalidDateFormat))?;
    Ok(DateExpr { key, width })
}

/// Add the literal text in `[start, cursor)` to `tree`.
fn flush_literal(scanner: &Scanner<'_>, tree: &mut ParseTree, start: usize) {
    if scanner.pos() > start {
        let parts = scan_literal(scanner.chars(), start, scanner.pos());
        if !parts.is_empty() {
            tree.push(Node::Literal(parts));
        }
    }
}
