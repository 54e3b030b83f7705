//! Error types for formatting and formatter configuration.

use thiserror::Error;

/// An error that occurred while formatting a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The bound value's type does not fit the expression.
    #[error("InvalidArgType: expected {expected}, got {actual}")]
    InvalidArgType {
        expected: &'static str,
        actual: String,
    },

    /// A plural or selectordinal was formatted with no category selector.
    #[error("UndefinedPluralFunc")]
    UndefinedPluralFunc,

    /// A custom node whose kind is not registered with the formatter.
    #[error("UnknownType: `{name}`")]
    UnknownType { name: String },

    /// The kind is registered without a format function.
    #[error("UndefinedFormatFunc: `{name}`")]
    UndefinedFormatFunc { name: String },

    /// The tree nests deeper than the formatter allows.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,

    /// An error raised by a registered format function.
    #[error("{0}")]
    Custom(String),
}

/// An error that occurred while configuring a formatter or registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The kind name is built in or already registered.
    #[error("ParserAlreadyRegistered: `{name}`")]
    ParserAlreadyRegistered { name: String },

    /// An attempt to unset the category selector.
    #[error("PluralFunctionRequired")]
    PluralFunctionRequired,

    /// No plural rules exist for this locale identifier.
    #[error("unknown culture '{name}'{}", format_suggestions(suggestions))]
    UnknownCulture {
        name: String,
        suggestions: Vec<String>,
    },

    /// No date formatter exists for this locale identifier.
    #[error("unknown date locale '{name}'")]
    UnknownDateLocale { name: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}
