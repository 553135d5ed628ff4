//! Completion statistics report

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_manager, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct CompletionArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    let stats = manager.completion_stats();

    let content = match resolve_format(global, &Config::load(), OutputFormat::Md) {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&stats).into_diagnostic()?;
            json.push('\n');
            json
        }
        _ => {
            let mut output = String::from("# Completion Statistics\n\n");
            let mut table = Builder::default();
            table.push_record(["PRDs", "Min", "Max", "Average"]);
            table.push_record([
                manager.len().to_string(),
                format!("{}%", stats.min),
                format!("{}%", stats.max),
                format!("{:.1}%", stats.average),
            ]);
            output.push_str(&table.build().with(Style::markdown()).to_string());
            output.push('\n');
            output
        }
    };

    write_output(&content, args.output)
}
