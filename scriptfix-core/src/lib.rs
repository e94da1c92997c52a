//! Embeddable core library for scriptfix.
//!
//! Provides a clap-free, I/O-abstracted entry point for the repair pass.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`FileSource`](ports::FileSource) - list candidate files and read them
//! - [`WritePort`](ports::WritePort) - replace repaired files and write report artifacts
//!
//! The [`adapters`] module provides filesystem-backed and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_repair`](pipeline::run_repair) - one repair pass + report
//! - [`write_report_artifacts`](pipeline::write_report_artifacts) - persist the report

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the rule table so embedders don't need scriptfix-edit directly.
pub use scriptfix_edit::{DefectRule, RepairedContent, builtin_rules, repair};
