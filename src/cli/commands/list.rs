//! `prdm list` command - List PRDs with filtering

use console::style;
use miette::Result;

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::table::render_prds;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::{Priority, Status};
use crate::core::Config;
use crate::entities::prd::Prd;

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status (draft, in-review, approved, in-development, testing, implemented, archived)
    #[arg(long, short = 's')]
    pub status: Option<Status>,

    /// Filter by priority (low/medium/high/critical)
    #[arg(long, short = 'p')]
    pub priority: Option<Priority>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by author (exact match)
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Only PRDs needing attention (stalled or critical drafts)
    #[arg(long)]
    pub attention: bool,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let config = Config::load();

    let mut prds: Vec<&Prd> = match (args.attention, args.status) {
        (true, _) => manager.needing_attention(),
        (false, Some(status)) => manager.by_status(status),
        (false, None) => manager.records().iter().collect(),
    };
    filter(&mut prds, &args);

    if args.count {
        println!("{}", prds.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    if prds.is_empty() && matches!(format, OutputFormat::Tsv) {
        println!("No PRDs found.");
        println!();
        println!("Create one with: {}", style("prdm new --title <TITLE>").yellow());
        return Ok(());
    }

    print!("{}", render_prds(&prds, format, !global.quiet)?);
    Ok(())
}

/// Apply the field filters and the limit in place
fn filter(prds: &mut Vec<&Prd>, args: &ListArgs) {
    if let Some(status) = args.status {
        prds.retain(|p| p.status == status);
    }
    if let Some(priority) = args.priority {
        prds.retain(|p| p.priority == priority);
    }
    if let Some(ref tag) = args.tag {
        prds.retain(|p| p.has_tag(tag));
    }
    if let Some(ref author) = args.author {
        prds.retain(|p| p.author == *author);
    }
    if let Some(limit) = args.limit {
        prds.truncate(limit);
    }
}
