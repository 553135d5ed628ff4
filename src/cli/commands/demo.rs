//! `prdm demo` command - Guided walkthrough over the sample data

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::dashboard::render_dashboard;
use crate::cli::GlobalOpts;
use crate::core::entity::Status;
use crate::core::sample::sample_manager;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Term used for the search step
    #[arg(long, default_value = "authentication")]
    pub search: String,
}

pub fn run(args: DemoArgs, _global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let manager = sample_manager().into_diagnostic()?;
    let rule = "=".repeat(60);

    println!(
        "{}",
        style(format!("PRD Manager v{}", env!("CARGO_PKG_VERSION"))).bold()
    );
    println!();
    print!("{}", render_dashboard(&manager, config.dashboard_limit()));

    println!();
    println!("{}", rule);
    println!("{}", style("DEMO OPERATIONS").bold());
    println!("{}", rule);

    println!();
    println!("Searching for '{}' related PRDs:", style(&args.search).yellow());
    for prd in manager.search(&args.search) {
        println!("  Found: {}", prd);
    }

    let drafts = manager.by_status(Status::Draft);
    println!();
    println!("Draft PRDs ({}):", drafts.len());
    for prd in drafts {
        println!("  {}", prd);
    }

    let analytics = manager.analytics();
    let analytics_json = serde_json::to_string_pretty(&analytics).into_diagnostic()?;
    println!();
    println!("Analytics Summary:");
    println!(
        "Last updated: {}",
        analytics.last_updated.format("%Y-%m-%d %H:%M:%S")
    );
    println!("Analytics data size: {} bytes", analytics_json.len());

    println!();
    println!("Exporting PRD data to JSON...");
    let json = manager.export_json().into_diagnostic()?;
    println!("Export completed. JSON length: {} characters", json.len());

    println!();
    println!("{} Demonstration completed!", style("✓").green());
    Ok(())
}
