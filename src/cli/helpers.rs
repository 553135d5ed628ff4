//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::Path;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::manager::PrdManager;
use crate::core::sample::sample_manager;
use crate::core::Config;

/// Build the working set for a command
///
/// `--input` loads a snapshot, `--empty` starts blank, otherwise the
/// built-in sample data is used.
pub fn load_manager(global: &GlobalOpts) -> Result<PrdManager> {
    if global.empty {
        return Ok(PrdManager::new());
    }

    match &global.input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
            let mut manager = PrdManager::new();
            manager
                .import_json(&json)
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid snapshot {}", path.display()))?;
            Ok(manager)
        }
        None => sample_manager().into_diagnostic(),
    }
}

/// Write the full collection as a JSON snapshot
pub fn save_snapshot(manager: &PrdManager, path: &Path, global: &GlobalOpts) -> Result<()> {
    let json = manager.export_json().into_diagnostic()?;
    std::fs::write(path, json)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write snapshot {}", path.display()))?;
    if !global.quiet {
        eprintln!(
            "{} Saved {} PRD(s) to {}",
            style("✓").green(),
            manager.len(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}

/// Resolve `auto` against the configured default, then the command default
pub fn resolve_format(global: &GlobalOpts, config: &Config, fallback: OutputFormat) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    config
        .default_format
        .as_deref()
        .and_then(|f| OutputFormat::from_str(f, true).ok())
        .filter(|f| *f != OutputFormat::Auto)
        .unwrap_or(fallback)
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
