//! Evaluation context for tracking state during recursive formatting.

use crate::Args;
use crate::interpreter::FormatError;
use crate::interpreter::coerce::{self, Booleans};
use crate::parser::DEFAULT_MAX_DEPTH;
use crate::types::Value;

/// State carried through one formatting walk.
///
/// The context tracks:
/// - Arguments available during formatting
/// - The boolean rendering policy
/// - Choice nesting depth, bounded by `max_depth`
pub struct EvalContext<'a> {
    args: &'a Args,
    booleans: Booleans,
    depth: usize,
    max_depth: usize,
}

impl<'a> EvalContext<'a> {
    /// Create a context with the default depth limit.
    pub fn new(args: &'a Args) -> Self {
        Self::with_max_depth(args, DEFAULT_MAX_DEPTH)
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(args: &'a Args, max_depth: usize) -> Self {
        Self {
            args,
            booleans: Booleans::default(),
            depth: 0,
            max_depth,
        }
    }

    /// Set the boolean rendering policy.
    pub fn with_booleans(mut self, booleans: Booleans) -> Self {
        self.booleans = booleans;
        self
    }

    pub fn args(&self) -> &'a Args {
        self.args
    }

    /// Get an argument, treating `Null` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.args.get(key).filter(|value| !value.is_null())
    }

    /// The string form of an argument; `""` when absent or null.
    pub fn string(&self, key: &str) -> Result<String, FormatError> {
        coerce::to_string(self.args, key, self.booleans)
    }

    /// The string form of a value under this context's boolean policy.
    pub fn render(&self, value: &Value) -> Result<String, FormatError> {
        coerce::value_to_string(value, self.booleans)
    }

    /// Enter a choice body.
    ///
    /// Returns `MaxDepthExceeded` once `max_depth` bodies are open.
    pub fn enter(&mut self) -> Result<(), FormatError> {
        if self.depth >= self.max_depth {
            return Err(FormatError::MaxDepthExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a choice body.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
