//! Needs-attention report

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_manager, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::manager::PrdManager;
use crate::entities::prd::Prd;

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct AttentionArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: AttentionArgs, global: &GlobalOpts) -> Result<()> {
    let manager = load_manager(global)?;
    write_output(&render(&manager), args.output)
}

fn render(manager: &PrdManager) -> String {
    let flagged: Vec<(&Prd, &str)> = manager
        .needing_attention()
        .into_iter()
        .filter_map(|prd| prd.attention_reason().map(|reason| (prd, reason)))
        .collect();

    let mut output = String::new();
    output.push_str("# PRDs Needing Attention\n\n");

    if flagged.is_empty() {
        output.push_str("Nothing needs attention.\n");
        return output;
    }

    let mut table = Builder::default();
    table.push_record(["ID", "Title", "Status", "Priority", "Done", "Reason"]);
    for (prd, reason) in &flagged {
        table.push_record([
            prd.id.to_string(),
            truncate_str(&prd.title, 30),
            prd.status.to_string(),
            prd.priority.to_string(),
            format!("{}%", prd.completion_percentage),
            reason.to_string(),
        ]);
    }
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push_str(&format!("\n\n{} PRD(s) flagged\n", flagged.len()));
    output
}
