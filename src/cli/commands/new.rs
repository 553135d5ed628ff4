//! `prdm new` command - Create a PRD

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{load_manager, resolve_format, save_snapshot};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Priority;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Title
    #[arg(long, short = 't')]
    pub title: String,

    /// Description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Author (default: config author, then login name)
    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// Priority (low/medium/high/critical)
    #[arg(long, short = 'p', default_value = "medium")]
    pub priority: Priority,

    /// Tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Write the resulting snapshot to this file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let mut manager = load_manager(global)?;
    let config = Config::load();

    let author = args.author.unwrap_or_else(|| config.author());
    let id = manager.create_record(args.title, args.description, author);
    let id = id.as_str();

    if args.priority != Priority::default() {
        manager.update_priority(id, args.priority).into_diagnostic()?;
    }
    for tag in &args.tags {
        manager.add_tag(id, tag).into_diagnostic()?;
    }

    if let Some(ref path) = args.save {
        save_snapshot(&manager, path, global)?;
    }

    let prd = manager
        .get(id)
        .ok_or_else(|| miette::miette!("PRD {} vanished after creation", id))?;

    match resolve_format(global, &config, OutputFormat::Tsv) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(prd).into_diagnostic()?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(prd).into_diagnostic()?),
        OutputFormat::Id => println!("{}", prd.id),
        _ => {
            println!("{} Created PRD {}", style("✓").green(), style(prd.id.as_str()).cyan());
            if !global.quiet {
                println!("   {}", style(prd.to_string()).dim());
            }
        }
    }

    Ok(())
}
