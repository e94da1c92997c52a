//! Built-in defect rules.
//!
//! Each rule targets one [`DefectKind`] and is pure: it takes the full file
//! content and returns the repaired content plus how many defects it removed.

use regex::{NoExpand, Regex};
use scriptfix_types::defect::DefectKind;
use std::sync::LazyLock;

/// Markdown code fence marker.
pub const FENCE_MARKER: &str = "```";

/// Base URL the generator was pointed at.
pub const BASE_URL: &str = "http://localhost:3000/";

/// Known bad literals, most specific first. The quoted forms must run before
/// the bare form because they contain it.
const KNOWN_BAD_LITERALS: &[(&str, &str)] = &[
    (
        r#""http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync"""#,
        r#""http://localhost:3000/""#,
    ),
    (
        r#"'http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync"'"#,
        "'http://localhost:3000/'",
    ),
    (
        r#""http://localhost:3000/C:/Users/Vaibhav/Workspace/Mind-Sync""#,
        r#""http://localhost:3000/""#,
    ),
    (
        r#"http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync""#,
        "http://localhost:3000/",
    ),
];

// Base URL, an opening quote, a drive-letter path on the same line, a closing quote.
static URL_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{}["'][A-Za-z]:[/\\][^"'\r\n]*["']"#,
        regex::escape(BASE_URL)
    ))
    .expect("static url fallback pattern")
});

/// Result of running one rule over a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub content: String,
    pub hits: u64,
}

/// One entry of the defect pattern table.
pub trait DefectRule: Send + Sync {
    fn kind(&self) -> DefectKind;
    fn apply(&self, content: &str) -> RuleOutcome;
}

/// The rule table, in application order.
pub fn builtin_rules() -> Vec<Box<dyn DefectRule>> {
    vec![Box::new(StrayFenceRule), Box::new(MalformedUrlRule)]
}

/// Drops every line containing [`FENCE_MARKER`], terminator included.
pub struct StrayFenceRule;

impl DefectRule for StrayFenceRule {
    fn kind(&self) -> DefectKind {
        DefectKind::StrayFence
    }

    fn apply(&self, content: &str) -> RuleOutcome {
        let mut out = String::with_capacity(content.len());
        let mut hits = 0;
        for line in content.split_inclusive('\n') {
            if line.contains(FENCE_MARKER) {
                hits += 1;
                continue;
            }
            out.push_str(line);
        }
        RuleOutcome { content: out, hits }
    }
}

/// Cuts a filesystem path glued onto the quoted base URL.
pub struct MalformedUrlRule;

impl MalformedUrlRule {
    fn round(text: &str) -> RuleOutcome {
        let mut out = text.to_string();
        let mut hits = 0u64;

        for (bad, good) in KNOWN_BAD_LITERALS {
            let n = out.matches(bad).count() as u64;
            if n > 0 {
                out = out.replace(bad, good);
                hits += n;
            }
        }

        // Only what the literals left behind can still match here.
        let n = URL_FALLBACK.find_iter(&out).count() as u64;
        if n > 0 {
            tracing::debug!(occurrences = n, "url fallback pattern matched");
            out = URL_FALLBACK.replace_all(&out, NoExpand(BASE_URL)).into_owned();
            hits += n;
        }

        RuleOutcome { content: out, hits }
    }
}

impl DefectRule for MalformedUrlRule {
    fn kind(&self) -> DefectKind {
        DefectKind::MalformedUrl
    }

    fn apply(&self, content: &str) -> RuleOutcome {
        let mut current = RuleOutcome {
            content: content.to_string(),
            hits: 0,
        };
        // Every replacement shortens the buffer, so this reaches a fixpoint.
        loop {
            let next = Self::round(&current.content);
            if next.hits == 0 {
                return current;
            }
            current = RuleOutcome {
                content: next.content,
                hits: current.hits + next.hits,
            };
        }
    }
}
