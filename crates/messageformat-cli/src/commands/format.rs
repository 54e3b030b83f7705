//! Implementation of the `mf format` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use messageformat::parser::Parser;
use messageformat::{Args, Booleans, Formatter, Value};
use miette::{miette, IntoDiagnostic, WrapErr};
use serde::Serialize;
use tracing::debug;

use crate::output::MessageDiagnostic;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Message template to format
    #[arg(short, long)]
    pub message: String,

    /// Arguments in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// JSON file with an object of arguments
    #[arg(long)]
    pub args: Option<PathBuf>,

    /// Culture for plural rules (e.g., en, de, ru)
    #[arg(long, env = "MF_CULTURE", default_value = "en")]
    pub culture: String,

    /// Locale for date expressions (en or de)
    #[arg(long, env = "MF_DATE_LOCALE", default_value = "en")]
    pub date_locale: String,

    /// How boolean arguments render as text
    #[arg(long = "bool", value_enum, default_value_t = BoolMode::Reject)]
    pub booleans: BoolMode,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Command-line spelling of [`Booleans`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BoolMode {
    Reject,
    Render,
}

impl From<BoolMode> for Booleans {
    fn from(mode: BoolMode) -> Self {
        match mode {
            BoolMode::Reject => Booleans::Reject,
            BoolMode::Render => Booleans::Render,
        }
    }
}

/// JSON output for format results.
#[derive(Serialize)]
pub struct FormatResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((key.to_string(), value.to_string()))
}

/// Type a command-line value: integers, finite floats, `true`/`false`,
/// `YYYY-MM-DD` dates and `YYYY-MM-DDTHH:MM:SS` timestamps. Anything else
/// stays a string.
pub fn parse_param_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Value::from(date);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Value::from(timestamp);
    }
    Value::from(raw)
}

/// Read an arguments file: a JSON object of named values.
fn load_args(path: &Path) -> miette::Result<Args> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot read arguments file {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid JSON in {}", path.display()))?;
    match Value::from(json) {
        Value::Map(entries) => Ok(entries.into_iter().collect()),
        other => Err(miette!(
            "Arguments file {} must hold an object, found {}",
            path.display(),
            other.type_name()
        )),
    }
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let mut values = match &args.args {
        Some(path) => load_args(path)?,
        None => Args::new(),
    };
    // Command-line parameters override the file.
    for (key, raw) in args.params {
        values.insert(key, parse_param_value(&raw));
    }

    let formatter = Formatter::builder()
        .culture(args.culture)
        .date_locale(args.date_locale)
        .booleans(args.booleans.into())
        .build()
        .into_diagnostic()?;
    debug!(?formatter, arguments = values.len(), "formatting message");

    let parser = Parser::new();
    let tree = match parser.parse(&args.message) {
        Ok(tree) => tree,
        Err(err) => {
            if args.json {
                let output = serde_json::json!({
                    "error": err.to_string(),
                    "position": err.position,
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
                return Ok(exitcode::DATAERR);
            }
            let diagnostic = MessageDiagnostic::from_parse_error(
                "<message>",
                &args.message,
                &err,
                &parser.known_kinds(),
            );
            return Err(diagnostic.into());
        }
    };

    match formatter.format_map(&tree, &values) {
        Ok(result) => {
            if args.json {
                let output = FormatResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Format error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
