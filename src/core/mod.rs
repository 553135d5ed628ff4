//! Core module - fundamental types and the PRD store

pub mod analytics;
pub mod config;
pub mod entity;
pub mod identity;
pub mod logging;
pub mod manager;
pub mod sample;

pub use analytics::{Analytics, CompletionStats};
pub use config::Config;
pub use entity::{Priority, Status};
pub use identity::{IdParseError, PrdId};
pub use manager::{ManagerError, PrdManager};
