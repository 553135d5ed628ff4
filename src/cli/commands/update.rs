//! `prdm update` command - Mutate a PRD

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{load_manager, resolve_format, save_snapshot};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::{Priority, Status};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// PRD id
    pub id: String,

    /// New status
    #[arg(long, short = 's')]
    pub status: Option<Status>,

    /// New priority
    #[arg(long, short = 'p')]
    pub priority: Option<Priority>,

    /// Completion percentage (clamped to 0-100)
    #[arg(long, short = 'c', allow_hyphen_values = true)]
    pub completion: Option<i64>,

    /// Tags to add (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tag: Vec<String>,

    /// Write the resulting snapshot to this file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
}

pub fn run(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let mut manager = load_manager(global)?;
    let config = Config::load();
    let id = args.id.trim();

    if args.status.is_none() && args.priority.is_none() && args.completion.is_none() && args.tag.is_empty() {
        return Err(miette::miette!(
            "Nothing to update. Use --status, --priority, --completion or --tag"
        ));
    }

    if let Some(status) = args.status {
        manager.update_status(id, status).into_diagnostic()?;
    }
    if let Some(priority) = args.priority {
        manager.update_priority(id, priority).into_diagnostic()?;
    }
    if let Some(value) = args.completion {
        manager.update_completion(id, value).into_diagnostic()?;
    }
    for tag in &args.tag {
        if !manager.add_tag(id, tag).into_diagnostic()? && !global.quiet {
            eprintln!("{} Tag '{}' skipped (empty or already present)", style("!").yellow(), tag.trim());
        }
    }

    if let Some(ref path) = args.save {
        save_snapshot(&manager, path, global)?;
    }

    let prd = manager
        .get(id)
        .ok_or_else(|| miette::miette!("No PRD found with id '{}'", id))?;

    match resolve_format(global, &config, OutputFormat::Tsv) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(prd).into_diagnostic()?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(prd).into_diagnostic()?),
        OutputFormat::Id => println!("{}", prd.id),
        _ => println!("{} Updated {}", style("✓").green(), prd),
    }

    Ok(())
}
