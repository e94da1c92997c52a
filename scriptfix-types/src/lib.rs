//! Shared DTOs (schemas-as-code) for the scriptfix workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod defect;
pub mod report;

/// Schema identifiers.
pub mod schema {
    pub const SCRIPTFIX_REPORT_V1: &str = "scriptfix.report.v1";
}
