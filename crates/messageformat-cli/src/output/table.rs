//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Check results for a single catalog file.
pub struct FileSummary {
    /// Path of the catalog as given on the command line.
    pub file: String,
    /// Number of templates in the catalog.
    pub messages: usize,
    /// Number of templates that failed to parse.
    pub errors: usize,
}

/// Format check results as an ASCII table.
pub fn format_check_table(summaries: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Messages", "Errors"]);

    for summary in summaries {
        table.add_row(vec![
            summary.file.clone(),
            summary.messages.to_string(),
            summary.errors.to_string(),
        ]);
    }

    table
}
