//! Parse error types for message templates.

use thiserror::Error;

/// Why parsing stopped.
///
/// The display form of each variant is the reason code reported inside a
/// [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An expression was opened but never closed, or closed twice.
    #[error("UnbalancedBraces")]
    UnbalancedBraces,

    /// `{}` or `{ , ...}`: the expression has no variable name.
    #[error("MissingVarName")]
    MissingVarName,

    /// A character outside `[A-Za-z0-9_]`, or whitespace inside an identifier.
    #[error("InvalidFormat")]
    InvalidFormat,

    /// A `{` where an identifier was expected.
    #[error("InvalidExpr")]
    InvalidExpr,

    /// The expression kind is neither built in nor registered.
    #[error("UnknownType: `{name}`")]
    UnknownType { name: String },

    /// The kind is registered without a parse function.
    #[error("UndefinedParseFunc: `{name}`")]
    UndefinedParseFunc { name: String },

    /// A choice expression with nothing after its kind.
    #[error("MalformedOption")]
    MalformedOption,

    /// A choice body without a name in front of it.
    #[error("MissingChoiceName")]
    MissingChoiceName,

    /// A choice name not followed by a `{`-delimited body.
    #[error("MissingChoiceContent")]
    MissingChoiceContent,

    /// No `other` choice.
    #[error("MissingMandatoryChoice")]
    MissingMandatoryChoice,

    /// The same choice name appears twice in one expression.
    #[error("DuplicateChoice: `{name}`")]
    DuplicateChoice { name: String },

    /// A `name:` extension outside a plural, or after its first choice.
    #[error("UnexpectedExtension")]
    UnexpectedExtension,

    /// A plural extension other than `offset`.
    #[error("UnsupportedExtension: `{name}`")]
    UnsupportedExtension { name: String },

    /// `offset:` with no value.
    #[error("MissingOffsetValue")]
    MissingOffsetValue,

    /// A negative offset.
    #[error("InvalidOffsetValue")]
    InvalidOffsetValue,

    /// An offset that is not a base-10 integer.
    #[error("BadCast")]
    BadCast,

    /// A date width other than short, medium, long or full.
    #[error("InvalidDateFormat")]
    InvalidDateFormat,

    /// Expressions nested deeper than the parser allows.
    #[error("MaxDepthExceeded")]
    MaxDepthExceeded,

    /// An error raised by a registered parse function.
    #[error("{0}")]
    Custom(String),
}

/// A parse failure with the 0-based code-point offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ParseError: `{kind}` at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// A "did you mean" hint, when one can be computed.
    ///
    /// Only `UnknownType` errors carry one. Pass the kinds the parser knows,
    /// e.g. [`Parser::known_kinds`](crate::parser::Parser::known_kinds).
    pub fn help(&self, known_kinds: &[&str]) -> Option<String> {
        let ParseErrorKind::UnknownType { name } = &self.kind else {
            return None;
        };
        let suggestions = compute_suggestions(name, known_kinds);
        if suggestions.is_empty() {
            None
        } else {
            Some(format!("did you mean: {}?", suggestions.join(", ")))
        }
    }
}

/// Names from `available` within a small edit distance of `name`, closest
/// first. Comparison ignores ASCII case.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let lowered = name.to_ascii_lowercase();
    let max_distance = if lowered.len() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(&lowered, candidate), *candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, candidate)| (*distance, *candidate));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
