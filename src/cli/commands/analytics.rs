//! `prdm analytics` command - Aggregate statistics

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::analytics::Analytics;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct AnalyticsArgs {
    /// Number of tags to list in the tag table
    #[arg(long, default_value = "10")]
    pub top_tags: usize,
}

pub fn run(args: AnalyticsArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let config = Config::load();
    let analytics = manager.analytics();

    match resolve_format(global, &config, OutputFormat::Json) {
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(&analytics).into_diagnostic()?),
        OutputFormat::Tsv | OutputFormat::Md => print!("{}", render_tables(&analytics, args.top_tags)),
        _ => println!("{}", serde_json::to_string_pretty(&analytics).into_diagnostic()?),
    }
    Ok(())
}

/// Markdown tables for each count map
fn render_tables(analytics: &Analytics, top_tags: usize) -> String {
    let mut output = String::new();

    let mut summary = Builder::default();
    summary.push_record(["Metric", "Value"]);
    summary.push_record(["Total PRDs".to_string(), analytics.total_count.to_string()]);
    summary.push_record([
        "Average Completion".to_string(),
        format!("{:.1}%", analytics.average_completion),
    ]);
    summary.push_record([
        "Last Updated".to_string(),
        analytics.last_updated.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    ]);
    output.push_str(&summary.build().with(Style::markdown()).to_string());

    let sections = [
        ("Status", "Count", analytics.status_counts.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>()),
        ("Priority", "Count", analytics.priority_counts.iter().map(|(k, v)| (k.as_str(), *v)).collect()),
        ("Author", "PRDs", analytics.ranked_authors(usize::MAX)),
        ("Tag", "PRDs", analytics.ranked_tags(top_tags)),
    ];
    for (key, value, rows) in sections {
        if rows.is_empty() {
            continue;
        }
        let mut table = Builder::default();
        table.push_record([key, value]);
        for (k, v) in rows {
            table.push_record([k.to_string(), v.to_string()]);
        }
        output.push_str("\n\n");
        output.push_str(&table.build().with(Style::markdown()).to_string());
    }
    output.push('\n');
    output
}
