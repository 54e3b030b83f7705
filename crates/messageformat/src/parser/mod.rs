//! Message template parser.
//!
//! This module turns a template string into a [`ParseTree`] of typed
//! expressions. The tree is public so it can be inspected by external tooling
//! and serialized.

pub mod ast;
pub mod error;
mod literal;
mod message;
mod scanner;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind, compute_suggestions};
pub use message::{BUILTIN_KINDS, DEFAULT_MAX_DEPTH, Parser, parse};
pub use scanner::{Scanner, is_identifier_char, is_whitespace};
