//! Miette diagnostic wrapper for message parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use messageformat::parser::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a template that failed to parse.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(messageformat::syntax))]
pub struct MessageDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl MessageDiagnostic {
    /// Create a diagnostic for `template`, shown under `name`.
    ///
    /// `known_kinds` feeds the "did you mean" hint for unknown kinds.
    pub fn from_parse_error(
        name: impl Into<String>,
        template: &str,
        err: &ParseError,
        known_kinds: &[&str],
    ) -> Self {
        let (offset, len) = byte_span(template, err.position);
        MessageDiagnostic {
            src: NamedSource::new(name.into(), template.to_string()),
            span: (offset, len).into(),
            message: err.kind.to_string(),
            help: err.help(known_kinds),
        }
    }
}

/// Convert a code-point position to a byte offset and the byte length of the
/// character there. Positions at or past the end point just after the text.
pub fn byte_span(text: &str, position: usize) -> (usize, usize) {
    match text.char_indices().nth(position) {
        Some((offset, c)) => (offset, c.len_utf8()),
        None => (text.len(), 0),
    }
}
