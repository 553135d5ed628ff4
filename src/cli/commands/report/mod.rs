//! `prdm report` command - Generate PRD reports

mod attention;
mod completion;
mod progress;

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::GlobalOpts;

pub use attention::AttentionArgs;
pub use completion::CompletionArgs;
pub use progress::ProgressArgs;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// PRDs that look stalled (slow development/testing, critical drafts)
    Attention(AttentionArgs),

    /// Average completion for every status
    Progress(ProgressArgs),

    /// Minimum, maximum and average completion
    Completion(CompletionArgs),
}

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Attention(args) => attention::run(args, global),
        ReportCommands::Progress(args) => progress::run(args, global),
        ReportCommands::Completion(args) => completion::run(args, global),
    }
}

pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
