//! PRDM: PRD Manager
//!
//! An in-memory toolkit for managing Product Requirements Documents:
//! create, update, filter, search and summarize records, with JSON
//! snapshots and a console dashboard.

pub mod cli;
pub mod core;
pub mod entities;
