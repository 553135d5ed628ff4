//! `prdm export` command - JSON snapshot export

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{load_manager, save_snapshot};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;

    match args.output {
        Some(path) => save_snapshot(&manager, &path, global),
        None => {
            let json = manager.export_json().into_diagnostic()?;
            println!("{}", json);
            if global.verbose {
                eprintln!(
                    "{} Exported {} PRD(s), {} characters",
                    style("✓").green(),
                    manager.len(),
                    json.len()
                );
            }
            Ok(())
        }
    }
}
