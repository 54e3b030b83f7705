//! A compiled template bundled with its formatter.

use std::sync::Arc;

use crate::Args;
use crate::interpreter::{CategorySelector, ConfigError, FormatError, Formatter};
use crate::parser::{ParseError, ParseTree, Parser};

/// A parsed template and the formatter it renders with.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use messageformat::{CategorySelector, Message, Number, params};
///
/// let mut message = Message::new("{N, plural, one{1} other{2}}").unwrap();
/// assert_eq!(message.format_map(&params! { "N" => 1 }).unwrap(), "1");
///
/// let always_other: Arc<dyn CategorySelector> = Arc::new(|_: &Number, _: bool| "other");
/// message.set_plural_function(Some(always_other)).unwrap();
/// assert_eq!(message.format_map(&params! { "N" => 1 }).unwrap(), "2");
/// ```
#[derive(Debug)]
pub struct Message {
    tree: ParseTree,
    formatter: Formatter,
}

impl Message {
    /// Parse `input` with the built-in kinds and English rules.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        Ok(Self {
            tree: Parser::new().parse(input)?,
            formatter: Formatter::default(),
        })
    }

    /// Bundle an existing tree with a formatter.
    pub fn from_parts(tree: ParseTree, formatter: Formatter) -> Self {
        Self { tree, formatter }
    }

    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn formatter_mut(&mut self) -> &mut Formatter {
        &mut self.formatter
    }

    /// Format with no arguments.
    pub fn format(&self) -> Result<String, FormatError> {
        self.formatter.format(&self.tree)
    }

    pub fn format_map(&self, args: &Args) -> Result<String, FormatError> {
        self.formatter.format_map(&self.tree, args)
    }

    /// See [`Formatter::set_culture`].
    pub fn set_culture(&mut self, culture: impl Into<String>) -> Result<(), ConfigError> {
        self.formatter.set_culture(culture)
    }

    /// See [`Formatter::set_plural_function`].
    pub fn set_plural_function(
        &mut self,
        selector: Option<Arc<dyn CategorySelector>>,
    ) -> Result<(), ConfigError> {
        self.formatter.set_plural_function(selector)
    }
}
