//! Table formatting for PRD listings
//!
//! One renderer shared by `list`, `search` and the reports, so every
//! command prints PRDs the same way in every output format.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;
use crate::core::entity::{Priority, Status};
use crate::entities::prd::Prd;

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// PRD id (cyan)
    Id(String),
    /// Plain text, truncated to the column
    Text(String),
    /// Status with color coding
    Status(Status),
    /// Priority with color coding
    Priority(Priority),
    /// Completion percentage with color coding
    Percent(u8),
    /// Tags as comma-separated
    Tags(Vec<String>),
}

impl CellValue {
    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => format!("{:<width$}", style(id).cyan(), width = width),
            CellValue::Text(s) => {
                format!("{:<width$}", truncate_str(s, width.saturating_sub(2)), width = width)
            }
            CellValue::Status(status) => {
                let s = status.to_string();
                let styled = match status {
                    Status::Draft => style(s).dim(),
                    Status::InReview => style(s).yellow(),
                    Status::Approved => style(s).green(),
                    Status::InDevelopment => style(s).blue(),
                    Status::Testing => style(s).magenta(),
                    Status::Implemented => style(s).cyan().bold(),
                    Status::Archived => style(s).red().dim(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Priority(priority) => {
                let s = priority.to_string();
                let styled = match priority {
                    Priority::Low => style(s).dim(),
                    Priority::Medium => style(s).white(),
                    Priority::High => style(s).yellow(),
                    Priority::Critical => style(s).red().bold(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Percent(pct) => {
                let s = format!("{}%", pct);
                let styled = match pct {
                    100 => style(s).green().bold(),
                    50..=99 => style(s).yellow(),
                    _ => style(s).dim(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Tags(_) => {
                format!("{:<width$}", truncate_str(&self.plain(), width.saturating_sub(2)), width = width)
            }
        }
    }

    /// Unstyled text for CSV and Markdown
    pub fn plain(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) => s.clone(),
            CellValue::Status(s) => s.to_string(),
            CellValue::Priority(p) => p.to_string(),
            CellValue::Percent(p) => format!("{}%", p),
            CellValue::Tags(tags) => tags.join(","),
        }
    }
}

/// Column definitions: header and width
const COLUMNS: &[(&str, usize)] = &[
    ("ID", 24),
    ("TITLE", 32),
    ("STATUS", 15),
    ("PRIORITY", 10),
    ("DONE", 6),
    ("AUTHOR", 18),
    ("TAGS", 24),
];

fn row(prd: &Prd) -> Vec<CellValue> {
    vec![
        CellValue::Id(prd.id.to_string()),
        CellValue::Text(prd.title.clone()),
        CellValue::Status(prd.status),
        CellValue::Priority(prd.priority),
        CellValue::Percent(prd.completion_percentage),
        CellValue::Text(prd.author.clone()),
        CellValue::Tags(prd.tags.clone()),
    ]
}

/// Render PRDs in the requested format
///
/// `Auto` is treated as TSV. The summary line only appears in TSV output.
pub fn render_prds(prds: &[&Prd], format: OutputFormat, show_summary: bool) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(prds).into_diagnostic()?);
            out.push('\n');
        }
        OutputFormat::Yaml => {
            out.push_str(&serde_yml::to_string(&prds).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for prd in prds {
                out.push_str(prd.id.as_str());
                out.push('\n');
            }
        }
        OutputFormat::Csv => {
            let header: Vec<String> = COLUMNS.iter().map(|(h, _)| h.to_lowercase()).collect();
            out.push_str(&header.join(","));
            out.push('\n');
            for prd in prds {
                let cells: Vec<String> = row(prd).iter().map(|c| escape_csv(&c.plain())).collect();
                out.push_str(&cells.join(","));
                out.push('\n');
            }
        }
        OutputFormat::Md => {
            let header: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();
            out.push_str(&format!("| {} |\n", header.join(" | ")));
            out.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
            for prd in prds {
                let cells: Vec<String> = row(prd)
                    .iter()
                    .map(|c| c.plain().replace('|', "\\|"))
                    .collect();
                out.push_str(&format!("| {} |\n", cells.join(" | ")));
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            let total: usize = COLUMNS.iter().map(|(_, w)| w + 1).sum();
            let header: Vec<String> = COLUMNS
                .iter()
                .map(|(h, w)| format!("{:<width$}", style(h).bold(), width = *w))
                .collect();
            out.push_str(header.join(" ").trim_end());
            out.push('\n');
            out.push_str(&"-".repeat(total));
            out.push('\n');
            for prd in prds {
                let cells: Vec<String> = row(prd)
                    .iter()
                    .zip(COLUMNS)
                    .map(|(c, (_, w))| c.format_tsv(*w))
                    .collect();
                out.push_str(cells.join(" ").trim_end());
                out.push('\n');
            }
            if show_summary {
                out.push('\n');
                out.push_str(&format!("{} PRD(s) found\n", style(prds.len()).cyan()));
            }
        }
    }
    Ok(out)
}
