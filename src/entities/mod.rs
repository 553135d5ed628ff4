//! Entity type definitions
//!
//! - [`Prd`] - Product Requirements Document with status, priority,
//!   completion and tags

pub mod prd;

pub use prd::Prd;
