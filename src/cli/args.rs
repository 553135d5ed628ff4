//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    analytics::AnalyticsArgs, completions::CompletionsArgs, dashboard::DashboardArgs,
    demo::DemoArgs, export::ExportArgs, list::ListArgs, new::NewArgs, report::ReportCommands,
    search::SearchArgs, show::ShowArgs, update::UpdateArgs,
};

#[derive(Parser)]
#[command(name = "prdm")]
#[command(author, version, about = "PRD Manager")]
#[command(long_about = "Create, filter, search and summarize Product Requirements Documents held in memory, with JSON snapshots and a console dashboard.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Load PRDs from an exported JSON snapshot instead of the sample data
    #[arg(long, short = 'i', global = true, value_name = "FILE", conflicts_with = "empty")]
    pub input: Option<PathBuf>,

    /// Start with no PRDs
    #[arg(long, global = true)]
    pub empty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the PRD dashboard
    Dashboard(DashboardArgs),

    /// List PRDs with filtering
    List(ListArgs),

    /// Show a PRD's details
    Show(ShowArgs),

    /// Search titles, descriptions and tags
    Search(SearchArgs),

    /// Create a new PRD
    New(NewArgs),

    /// Change status, priority, completion or tags of a PRD
    Update(UpdateArgs),

    /// Print aggregate statistics
    Analytics(AnalyticsArgs),

    /// Export all PRDs as a JSON snapshot
    Export(ExportArgs),

    /// Generate reports (attention, progress, completion)
    #[command(subcommand)]
    Report(ReportCommands),

    /// Run the guided demonstration
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
