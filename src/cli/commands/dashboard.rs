//! `prdm dashboard` command - PRD dashboard

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::{Priority, Status};
use crate::core::manager::PrdManager;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// Number of top authors and recent PRDs to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let config = Config::load();
    let limit = args.limit.unwrap_or_else(|| config.dashboard_limit());

    match resolve_format(global, &config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            let analytics = manager.analytics();
            let recent: Vec<_> = manager.recently_updated(limit);
            let status = serde_json::json!({
                "analytics": analytics,
                "topAuthors": analytics
                    .ranked_authors(limit)
                    .iter()
                    .map(|(author, count)| serde_json::json!({ "author": author, "count": count }))
                    .collect::<Vec<_>>(),
                "recent": recent,
            });
            println!("{}", serde_json::to_string_pretty(&status).into_diagnostic()?);
        }
        _ => print!("{}", render_dashboard(&manager, limit)),
    }

    Ok(())
}

/// Render the human-readable dashboard
///
/// Distributions follow lifecycle / priority order and skip absent values.
/// Authors are ranked by count with ties broken alphabetically.
pub fn render_dashboard(manager: &PrdManager, limit: usize) -> String {
    let width = 60;
    let analytics = manager.analytics();
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(width)));
    out.push_str(&format!("{}\n", style("PRD MANAGEMENT SYSTEM - DASHBOARD").bold()));
    out.push_str(&format!("{}\n", "=".repeat(width)));
    out.push_str(&format!("Total PRDs: {}\n", analytics.total_count));
    out.push_str(&format!("Average Completion: {:.1}%\n", analytics.average_completion));

    out.push_str("\nStatus Distribution:\n");
    for status in Status::all() {
        if let Some(count) = analytics.status_counts.get(status.as_str()) {
            out.push_str(&format!("  {} {}: {}\n", status.icon(), status, count));
        }
    }

    out.push_str("\nPriority Distribution:\n");
    for priority in Priority::all() {
        if let Some(count) = analytics.priority_counts.get(priority.as_str()) {
            out.push_str(&format!("  {}: {}\n", priority, count));
        }
    }

    out.push_str("\nTop Authors:\n");
    for (author, count) in analytics.ranked_authors(limit) {
        out.push_str(&format!("  {}: {} PRDs\n", author, count));
    }

    out.push_str("\nRecent PRDs:\n");
    for prd in manager.recently_updated(limit) {
        out.push_str(&format!("  {}\n", prd));
    }

    out
}
