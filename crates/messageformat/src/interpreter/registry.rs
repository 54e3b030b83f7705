//! Registry of user-defined expression kinds.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::Args;
use crate::interpreter::{ConfigError, FormatError};
use crate::parser::{CustomExpr, CustomPayload, ParseError, Scanner};

/// Parses the rest of a `{key, kind ...}` expression.
///
/// Receives the variable name and a scanner positioned just after the kind
/// name. Must leave the scanner on the expression's closing `}`.
pub type ParseFn =
    Arc<dyn Fn(&str, &mut Scanner<'_>) -> Result<CustomPayload, ParseError> + Send + Sync>;

/// Formats a parsed custom expression, appending to the output buffer.
pub type FormatFn =
    Arc<dyn Fn(&CustomExpr, &Args, &mut String) -> Result<(), FormatError> + Send + Sync>;

/// Wrap a closure as a [`ParseFn`].
pub fn parse_fn<F>(f: F) -> ParseFn
where
    F: Fn(&str, &mut Scanner<'_>) -> Result<CustomPayload, ParseError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`FormatFn`].
pub fn format_fn<F>(f: F) -> FormatFn
where
    F: Fn(&CustomExpr, &Args, &mut String) -> Result<(), FormatError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Kind names that can never be registered.
pub const RESERVED_KINDS: &[&str] = &["literal", "var", "plural", "select", "selectordinal", "date"];

/// The functions registered for one kind.
///
/// Either half may be missing; the parser or formatter reports it when the
/// kind is actually used.
#[derive(Clone, Default)]
pub struct RegisteredKind {
    parse: Option<ParseFn>,
    format: Option<FormatFn>,
}

impl RegisteredKind {
    pub fn parse_fn(&self) -> Option<&ParseFn> {
        self.parse.as_ref()
    }

    pub fn format_fn(&self) -> Option<&FormatFn> {
        self.format.as_ref()
    }
}

/// Expression kinds beyond the built-in ones, shared by a [`Parser`] and a
/// [`Formatter`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use messageformat::interpreter::{KindRegistry, format_fn, parse_fn};
/// use messageformat::parser::{CustomPayload, Parser};
/// use messageformat::{Formatter, params};
///
/// let parse = parse_fn(|_key, scanner| {
///     scanner.skip_whitespace();
///     let payload: CustomPayload = Arc::new(());
///     Ok(payload)
/// });
/// let format = format_fn(|expr, _args, out| {
///     out.push_str(&expr.key.to_uppercase());
///     Ok(())
/// });
///
/// let mut kinds = KindRegistry::new();
/// kinds.register("upper", Some(parse), Some(format)).unwrap();
/// let kinds = Arc::new(kinds);
///
/// let tree = Parser::with_kinds(kinds.clone()).parse("{name, upper}").unwrap();
/// let formatter = Formatter::builder().kinds(kinds).build().unwrap();
/// assert_eq!(formatter.format_map(&tree, &params! {}).unwrap(), "NAME");
/// ```
///
/// [`Parser`]: crate::parser::Parser
/// [`Formatter`]: crate::Formatter
#[derive(Clone, Default)]
pub struct KindRegistry {
    kinds: HashMap<String, RegisteredKind>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind.
    ///
    /// # Errors
    ///
    /// `ParserAlreadyRegistered` if `name` is built in or already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parse: Option<ParseFn>,
        format: Option<FormatFn>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if RESERVED_KINDS.contains(&name.as_str()) || self.kinds.contains_key(&name) {
            return Err(ConfigError::ParserAlreadyRegistered { name });
        }
        self.kinds.insert(name, RegisteredKind { parse, format });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredKind> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Registered kind names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("KindRegistry").field("kinds", &names).finish()
    }
}
