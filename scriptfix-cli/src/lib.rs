//! Library half of the `scriptfix` binary: config loading and the defect
//! registry behind `explain` / `list-defects`.

pub mod config;
pub mod explain;
