//! Parse tree evaluation.
//!
//! Walks a [`ParseTree`] depth-first, left to right. A "pound" string is
//! threaded through the walk: the value the nearest enclosing choice is using,
//! substituted for `#` placeholders inside that choice.

use tracing::trace;

use crate::interpreter::coerce::to_number;
use crate::interpreter::{EvalContext, FormatError, Formatter};
use crate::parser::ast::{
    CustomExpr, DateExpr, LiteralPart, Node, ParseTree, PluralExpr, SelectExpr,
};
use crate::types::Value;

/// Format `tree` into `out`.
///
/// `pound` is the substitution for `#`; empty means none is in scope and `#`
/// is emitted as is.
///
/// # Errors
///
/// Stops at the first failing expression. `out` then holds partial output.
pub fn eval_tree(
    tree: &ParseTree,
    formatter: &Formatter,
    ctx: &mut EvalContext<'_>,
    pound: &str,
    out: &mut String,
) -> Result<(), FormatError> {
    for node in &tree.nodes {
        match node {
            Node::Literal(parts) => eval_literal(parts, pound, out),
            Node::Var(var) => out.push_str(&ctx.string(&var.name)?),
            Node::Select(select) => eval_select(select, formatter, ctx, out)?,
            Node::SelectOrdinal(select) => eval_ordinal(select, formatter, ctx, out)?,
            Node::Plural(plural) => eval_plural(plural, formatter, ctx, out)?,
            Node::Date(date) => eval_date(date, formatter, ctx, out)?,
            Node::Custom(custom) => eval_custom(custom, formatter, ctx, out)?,
        }
    }
    Ok(())
}

fn eval_literal(parts: &[LiteralPart], pound: &str, out: &mut String) {
    for part in parts {
        match part {
            LiteralPart::Text(text) => out.push_str(text),
            LiteralPart::Pound if pound.is_empty() => out.push('#'),
            LiteralPart::Pound => out.push_str(pound),
        }
    }
}

/// Format one choice body with its own pound value.
fn eval_choice(
    choice: Option<&ParseTree>,
    formatter: &Formatter,
    ctx: &mut EvalContext<'_>,
    pound: &str,
    out: &mut String,
) -> Result<(), FormatError> {
    // A parsed tree always has `other`; a hand-built one may not.
    let Some(choice) = choice else {
        return Ok(());
    };
    ctx.enter()?;
    eval_tree(choice, formatter, ctx, pound, out)?;
    ctx.leave();
    Ok(())
}

fn eval_select(
    select: &SelectExpr,
    formatter: &Formatter,
    ctx: &mut EvalContext<'_>,
    out: &mut String,
) -> Result<(), FormatError> {
    let value = ctx.string(&select.key)?;
    let matched = select.choice(&value).is_some();
    trace!(kind = "select", key = %select.key, %value, matched, "resolved choice");
    eval_choice(select.choice_or_other(&value), formatter, ctx, &value, out)
}

fn eval_ordinal(
    select: &SelectExpr,
    formatter: &Formatter,
    ctx: &mut EvalContext<'_>,
    out: &mut String,
) -> Result<(), FormatError> {
    let Some(value) = ctx.get(&select.key) else {
        trace!(kind = "selectordinal", key = %select.key, "absent, using other");
        return eval_choice(select.other(), formatter, ctx, "", out);
    };

    let number = to_number(value)?;
    let selector = formatter
        .selector()
        .ok_or(FormatError::UndefinedPluralFunc)?;
    let category = selector.category(&number, true);
    trace!(kind = "selectordinal", key = %select.key, %number, %category, "resolved choice");

    let pound = ctx.render(value)?;
    eval_choice(select.choice_or_other(&category), formatter, ctx, &pound, out)
}

fn eval_plural(
    plural: &PluralExpr,
    formatter: &Formatter,
    ctx: &mut EvalContext<'_>,
    out: &mut String,
) -> Result<(), FormatError> {
    let select = &plural.select;
    let Some(value) = ctx.get(&select.key) else {
        trace!(kind = "plural", key = %select.key, "absent, using other");
        return eval_choice(select.other(), formatter, ctx, "", out);
    };

    let exact = match value {
        Value::Number(n) => format!("={n}"),
        Value::String(s) => format!("={s}"),
        _ => {
            return Err(FormatError::InvalidArgType {
                expected: "number",
                actual: value.type_name().to_string(),
            });
        }
    };
    let plain = ctx.render(value)?;

    if let Some(choice) = select.choice(&exact) {
        trace!(kind = "plural", key = %select.key, choice = %exact, "exact match");
        return eval_choice(Some(choice), formatter, ctx, &plain, out);
    }

    let number = to_number(value)?;
    let adjusted = number.minus(plural.offset);
    let selector = formatter
        .selector()
        .ok_or(FormatError::UndefinedPluralFunc)?;
    let category = selector.category(&adjusted, false);
    trace!(kind = "plural", key = %select.key, %adjusted, %category, "resolved choice");

    let pound = if plural.offset == 0 {
        plain
    } else {
        adjusted.to_string()
    };
    eval_choice(select.choice_or_other(&category), formatter, ctx, &pound, out)
}

fn eval_date(
    date: &DateExpr,
    formatter: &Formatter,
    ctx: &EvalContext<'_>,
    out: &mut String,
) -> Result<(), FormatError> {
    match ctx.args().get(&date.key) {
        Some(Value::DateTime(timestamp)) => {
            out.push_str(&formatter.dates().format(timestamp, date.width));
            Ok(())
        }
        other => Err(FormatError::InvalidArgType {
            expected: "datetime",
            actual: other.map_or("absent", Value::type_name).to_string(),
        }),
    }
}

fn eval_custom(
    custom: &CustomExpr,
    formatter: &Formatter,
    ctx: &EvalContext<'_>,
    out: &mut String,
) -> Result<(), FormatError> {
    let registered = formatter
        .kinds()
        .get(&custom.kind)
        .ok_or_else(|| FormatError::UnknownType {
            name: custom.kind.clone(),
        })?;
    let format = registered
        .format_fn()
        .ok_or_else(|| FormatError::UndefinedFormatFunc {
            name: custom.kind.clone(),
        })?;
    format(custom, ctx.args(), out)
}
