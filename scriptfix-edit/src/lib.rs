//! Repair engine for scriptfix.
//!
//! Responsibilities:
//! - Hold the defect rule table ([`rules`]).
//! - Apply it to a file's content, counting what was removed.
//! - Generate a unified diff preview and content fingerprints.

pub mod error;
pub mod rules;

pub use error::RepairError;
pub use rules::{DefectRule, MalformedUrlRule, RuleOutcome, StrayFenceRule, builtin_rules};

use camino::Utf8Path;
use diffy::PatchFormatter;
use scriptfix_types::defect::DefectCounts;
use sha2::{Digest, Sha256};

/// Content after every rule has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairedContent {
    pub content: String,
    pub defects: DefectCounts,
    changed: bool,
}

impl RepairedContent {
    /// Whether the output differs from the input.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Apply `rules` in table order. Deterministic for a given table.
pub fn repair_content(content: &str, rules: &[Box<dyn DefectRule>]) -> RepairedContent {
    let mut current = content.to_string();
    let mut defects = DefectCounts::default();

    for rule in rules {
        let outcome = rule.apply(&current);
        if outcome.hits > 0 {
            defects.add(rule.kind(), outcome.hits);
        }
        current = outcome.content;
    }

    let changed = current != content;
    RepairedContent {
        content: current,
        defects,
        changed,
    }
}

/// [`repair_content`] with [`builtin_rules`].
pub fn repair(content: &str) -> RepairedContent {
    repair_content(content, &builtin_rules())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Unified diff for one file; empty when nothing changed.
pub fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    let formatter = PatchFormatter::new();

    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    let body = formatter.fmt_patch(&patch).to_string();
    // diffy repeats its own ---/+++ header; keep only the hunks.
    let hunks = body
        .split_once("\n@@")
        .map(|(_, rest)| format!("@@{rest}"))
        .unwrap_or(body);
    out.push_str(&hunks);
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}
