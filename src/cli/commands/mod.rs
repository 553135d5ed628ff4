//! CLI command implementations

pub mod analytics;
pub mod completions;
pub mod dashboard;
pub mod demo;
pub mod export;
pub mod list;
pub mod new;
pub mod report;
pub mod search;
pub mod show;
pub mod update;
