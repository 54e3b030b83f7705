//! Public parse tree types for message templates.
//!
//! These types are public to enable external tooling (linters, extractors,
//! etc.). A tree is built once by the parser and is immutable afterwards.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A parsed message: expression nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseTree {
    pub nodes: Vec<Node>,
}

impl ParseTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, merging adjacent literals.
    pub fn push(&mut self, node: Node) {
        if let Node::Literal(parts) = node {
            if let Some(Node::Literal(prev)) = self.nodes.last_mut() {
                prev.extend(parts);
                return;
            }
            self.nodes.push(Node::Literal(parts));
        } else {
            self.nodes.push(node);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nesting depth: 0 for a tree of literals and variables.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Select(select) | Node::SelectOrdinal(select) => 1 + select.depth(),
                Node::Plural(plural) => 1 + plural.select.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

/// One expression in a parse tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "expr", rename_all = "lowercase")]
pub enum Node {
    /// Literal text with `#` placeholders.
    Literal(Vec<LiteralPart>),
    /// `{name}`
    Var(VarExpr),
    /// `{name, select, a{..} other{..}}`
    Select(SelectExpr),
    /// `{name, selectordinal, one{..} other{..}}`
    SelectOrdinal(SelectExpr),
    /// `{name, plural, offset:1 =0{..} one{..} other{..}}`
    Plural(PluralExpr),
    /// `{name, date, short}`
    Date(DateExpr),
    /// An expression of a registered kind.
    Custom(CustomExpr),
}

impl Node {
    /// The expression kind name as written in templates.
    pub fn kind(&self) -> &str {
        match self {
            Node::Literal(_) => "literal",
            Node::Var(_) => "var",
            Node::Select(_) => "select",
            Node::SelectOrdinal(_) => "selectordinal",
            Node::Plural(_) => "plural",
            Node::Date(_) => "date",
            Node::Custom(custom) => &custom.kind,
        }
    }
}

/// A segment of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralPart {
    Text(String),
    /// An unescaped `#`: the enclosing choice's value goes here.
    Pound,
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarExpr {
    pub name: String,
}

/// A set of named alternatives keyed by an argument.
///
/// Shared by `select` and `selectordinal`. Always contains `other`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectExpr {
    pub key: String,
    pub choices: BTreeMap<String, ParseTree>,
}

impl SelectExpr {
    /// The choice body for `name`, if any.
    pub fn choice(&self, name: &str) -> Option<&ParseTree> {
        self.choices.get(name)
    }

    /// The `choice` for `name`, or the mandatory `other` choice.
    pub fn choice_or_other(&self, name: &str) -> Option<&ParseTree> {
        self.choices.get(name).or_else(|| self.choices.get("other"))
    }

    /// The `other` choice.
    pub fn other(&self) -> Option<&ParseTree> {
        self.choices.get("other")
    }

    fn depth(&self) -> usize {
        self.choices.values().map(ParseTree::depth).max().unwrap_or(0)
    }
}

/// A plural expression: select semantics plus an offset and `=N` choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluralExpr {
    pub select: SelectExpr,
    pub offset: u64,
}

/// A date expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateExpr {
    pub key: String,
    pub width: DateWidth,
}

/// Rendering width of a date expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateWidth {
    Short,
    Medium,
    Long,
    Full,
}

impl DateWidth {
    pub fn as_str(self) -> &'static str {
        match self {
            DateWidth::Short => "short",
            DateWidth::Medium => "medium",
            DateWidth::Long => "long",
            DateWidth::Full => "full",
        }
    }
}

impl FromStr for DateWidth {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(DateWidth::Short),
            "medium" => Ok(DateWidth::Medium),
            "long" => Ok(DateWidth::Long),
            "full" => Ok(DateWidth::Full),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DateWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque payload produced by a registered parse function.
pub type CustomPayload = Arc<dyn Any + Send + Sync>;

/// An expression of a registered kind.
#[derive(Clone)]
pub struct CustomExpr {
    pub kind: String,
    pub key: String,
    pub payload: CustomPayload,
}

impl CustomExpr {
    /// Borrow the payload as a concrete type.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomExpr")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomExpr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.key == other.key && Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl Serialize for CustomExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CustomExpr", 2)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("key", &self.key)?;
        state.end()
    }
}
