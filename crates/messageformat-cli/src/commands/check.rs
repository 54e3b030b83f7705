//! Implementation of the `mf check` command.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use messageformat::parser::Parser;
use miette::{IntoDiagnostic, Report, WrapErr};
use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;
use tracing::debug;

use crate::output::table::{format_check_table, FileSummary};
use crate::output::MessageDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A catalog file that is not an object of templates.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("catalog must be a JSON object")]
    NotAnObject,

    #[error("message '{id}' is not a string")]
    NotAString { id: String },
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    messages: usize,
    errors: Vec<MessageError>,
}

/// JSON output for one template that failed to parse.
#[derive(Debug, Serialize)]
struct MessageError {
    id: String,
    error: String,
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

/// Load a catalog: a JSON object whose leaves are templates.
///
/// Nested objects flatten into dotted ids, so `{"a": {"b": "x"}}` yields the
/// message `a.b`.
pub fn load_catalog(content: &str) -> Result<BTreeMap<String, String>, CatalogError> {
    let json: Json =
        serde_json::from_str(content).map_err(|e| CatalogError::Json(e.to_string()))?;
    if !json.is_object() {
        return Err(CatalogError::NotAnObject);
    }
    let mut catalog = BTreeMap::new();
    flatten("", json, &mut catalog)?;
    Ok(catalog)
}

fn flatten(prefix: &str, value: Json, out: &mut BTreeMap<String, String>) -> Result<(), CatalogError> {
    match value {
        Json::String(template) => {
            out.insert(prefix.to_string(), template);
            Ok(())
        }
        Json::Object(entries) => {
            for (key, value) in entries {
                let id = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&id, value, out)?;
            }
            Ok(())
        }
        _ => Err(CatalogError::NotAString {
            id: prefix.to_string(),
        }),
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let parser = Parser::new();
    let known_kinds = parser.known_kinds();
    let mut summaries = Vec::new();
    let mut reports = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot read {}", path.display()))?;
        let catalog = load_catalog(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot load catalog {}", path.display()))?;
        debug!(file = %path.display(), messages = catalog.len(), "checking catalog");

        let mut errors = Vec::new();
        for (id, template) in &catalog {
            if let Err(err) = parser.parse(template) {
                if !args.json {
                    let diagnostic = MessageDiagnostic::from_parse_error(
                        format!("{}#{}", path.display(), id),
                        template,
                        &err,
                        &known_kinds,
                    );
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                errors.push(MessageError {
                    id: id.clone(),
                    error: err.kind.to_string(),
                    position: err.position,
                    help: err.help(&known_kinds),
                });
            }
        }

        summaries.push(FileSummary {
            file: path.display().to_string(),
            messages: catalog.len(),
            errors: errors.len(),
        });
        reports.push(FileReport {
            file: path.display().to_string(),
            messages: catalog.len(),
            errors,
        });
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", format_check_table(&summaries));
    }

    if reports.iter().any(|report| !report.errors.is_empty()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn test_load_flat_catalog() {
        let catalog = load_catalog(r#"{"hello": "Hello {NAME}!", "bye": "Bye"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["hello"], "Hello {NAME}!");
    }

    #[test]
    fn test_load_nested_catalog() {
        let catalog =
            load_catalog(r#"{"inbox": {"count": "{N, plural, other{#}}", "empty": "none"}}"#)
                .unwrap();
        let ids: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["inbox.count", "inbox.empty"]);
    }

    #[test]
    fn test_load_catalog_errors() {
        assert_eq!(load_catalog("[]"), Err(CatalogError::NotAnObject));
        assert_eq!(
            load_catalog(r#"{"a": {"b": 3}}"#),
            Err(CatalogError::NotAString { id: "a.b".into() })
        );
        assert!(matches!(load_catalog("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_check_valid_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.json");
        write(&path, r#"{"files": "{N, plural, one{# file} other{# files}}"}"#).unwrap();

        let code = run_check(CheckArgs {
            files: vec![path],
            json: true,
        })
        .unwrap();
        assert_eq!(code, exitcode::OK);
    }

    #[test]
    fn test_check_reports_broken_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("de.json");
        write(&path, r#"{"ok": "Hallo", "broken": "{N, plural, one{#}}"}"#).unwrap();

        let code = run_check(CheckArgs {
            files: vec![path],
            json: true,
        })
        .unwrap();
        assert_eq!(code, exitcode::DATAERR);
    }

    #[test]
    fn test_check_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = run_check(CheckArgs {
            files: vec![dir.path().join("missing.json")],
            json: true,
        });
        assert!(result.is_err());
    }
}
