//! `prdm show` command - Show a single PRD

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::prd::Prd;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// PRD id (e.g. PRD-1718000000000-1234)
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let config = Config::load();

    let prd = manager
        .get(args.id.trim())
        .ok_or_else(|| miette::miette!("No PRD found with id '{}'", args.id))?;

    match resolve_format(global, &config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(prd).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(prd).into_diagnostic()?);
        }
        OutputFormat::Id => println!("{}", prd.id),
        _ => print_details(prd),
    }

    Ok(())
}

/// Human-readable detail view
pub fn print_details(prd: &Prd) {
    println!("{} {}", prd.status.icon(), style(&prd.title).bold());
    println!("{}", style(prd.id.as_str()).cyan());
    println!();
    println!("{:<12} {}", style("Author:").dim(), prd.author);
    println!("{:<12} {}", style("Status:").dim(), prd.status);
    println!("{:<12} {}", style("Priority:").dim(), prd.priority);
    println!("{:<12} {}", style("Progress:").dim(), prd.progress_description());
    if !prd.tags.is_empty() {
        println!("{:<12} {}", style("Tags:").dim(), prd.tags.join(", "));
    }
    println!(
        "{:<12} {}",
        style("Created:").dim(),
        prd.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "{:<12} {}",
        style("Updated:").dim(),
        prd.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if !prd.description.is_empty() {
        println!();
        println!("{}", prd.description);
    }
}
