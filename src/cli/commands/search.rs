//! `prdm search` command - Search PRDs
//!
//! Case-insensitive substring match against title, description and tags.

use console::style;
use miette::Result;

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::table::render_prds;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search term (empty matches everything)
    pub query: String,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let config = Config::load();

    let mut results = manager.search(&args.query);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    if format == OutputFormat::Tsv {
        if results.is_empty() {
            println!("No results found for '{}'.", style(&args.query).yellow());
            return Ok(());
        }
        if !global.quiet {
            println!(
                "{} results for '{}':",
                style(results.len()).cyan(),
                style(&args.query).yellow()
            );
            println!();
        }
    }

    print!("{}", render_prds(&results, format, false)?);
    Ok(())
}
