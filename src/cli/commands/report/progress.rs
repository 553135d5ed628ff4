//! Status progress report

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::load_manager;
use crate::cli::GlobalOpts;
use crate::core::manager::PrdManager;

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct ProgressArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ProgressArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    write_output(&render(&manager), args.output)
}

fn render(manager: &PrdManager) -> String {
    let mut output = String::new();
    output.push_str("# Status Progress Report\n\n");

    let mut table = Builder::default();
    table.push_record(["Status", "PRDs", "Avg Completion"]);
    for (status, avg) in manager.status_progress() {
        table.push_record([
            format!("{} {}", status.icon(), status),
            manager.by_status(status).len().to_string(),
            format!("{:.1}%", avg),
        ]);
    }
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push('\n');
    output
}
