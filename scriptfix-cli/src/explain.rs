//! Defect explanations for the `scriptfix explain` command.
//!
//! Each entry describes one corruption the repair pass removes, what it looks
//! like in a generated script, and how to fix it by hand.

use scriptfix_types::defect::DefectKind;

/// Information about a defect scriptfix repairs.
#[derive(Debug, Clone)]
pub struct DefectExplanation {
    /// Short key for the defect (user-facing, e.g., "malformed-url").
    pub key: &'static str,
    /// The defect kind this entry documents.
    pub kind: DefectKind,
    /// Human-readable title.
    pub title: &'static str,
    /// Detailed description of what the repair does.
    pub description: &'static str,
    /// Before/after samples of the repair.
    pub examples: &'static [DefectExample],
    /// Manual remediation when the pass can't run.
    pub remediation: &'static str,
}

/// A single before/after sample.
#[derive(Debug, Clone)]
pub struct DefectExample {
    pub before: &'static str,
    pub after: &'static str,
}

/// Registry of all repairable defects.
pub static DEFECT_REGISTRY: &[DefectExplanation] = &[
    DefectExplanation {
        key: "malformed-url",
        kind: DefectKind::MalformedUrl,
        title: "Malformed URL Literal",
        description: r#"The script generator sometimes glues the absolute path of the project
workspace onto the application base URL, producing a string literal that
neither Python nor the browser can use:

    "http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync""

scriptfix replaces every known corrupted form with the bare base URL
"http://localhost:3000/". Known literals are matched exactly, in a fixed
order. A bounded fallback then catches the same corruption with a different
drive letter or path: the base URL, a quote, a drive-letter path on a single
line, and a closing quote.

Each replacement is counted as one URL fix."#,
        examples: &[
            DefectExample {
                before: r#"nav = "http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync"""#,
                after: r#"nav = "http://localhost:3000/""#,
            },
            DefectExample {
                before: r#"page.goto('http://localhost:3000/'C:/Users/Vaibhav/Workspace/Mind-Sync'')"#,
                after: r#"page.goto('http://localhost:3000/')"#,
            },
        ],
        remediation: r#"Search the generated scripts for the base URL followed by a quote and a
drive letter, and delete everything from that quote up to the quote that
closes the original literal. Regenerating the script with the workspace path
set correctly also avoids the corruption."#,
    },
    DefectExplanation {
        key: "stray-fence",
        kind: DefectKind::StrayFence,
        title: "Stray Markdown Fence",
        description: r#"Generated scripts are sometimes written out with the markdown code fence
that wrapped them in the generator's response, e.g. a leading "```python"
line and a trailing "```" line. These lines are syntax errors in every
target language.

scriptfix removes every line containing the "```" marker, together with its
line terminator. All other lines keep their exact bytes, including CRLF
endings.

Each removed line is counted as one Markdown line removed."#,
        examples: &[DefectExample {
            before: "```python\nimport asyncio\n```\n",
            after: "import asyncio\n",
        }],
        remediation: r#"Delete the first and last lines of the script if they start with "```".
Check that no string literal in the script legitimately contains "```";
scriptfix would remove such a line as well."#,
    },
];

/// Look up a defect by key or id.
///
/// Supports:
/// - Exact key match (e.g., "malformed-url")
/// - Defect id match (e.g., "url.malformed_literal")
/// - Case-insensitive matching, with underscores read as hyphens
pub fn lookup_defect(query: &str) -> Option<&'static DefectExplanation> {
    let query_lower = query.to_lowercase();
    let query_normalized = query_lower.replace('_', "-");

    DEFECT_REGISTRY.iter().find(|d| {
        d.key == query_normalized
            || d.kind.id() == query_lower
            || d.kind.id().replace('_', "-") == query_normalized
    })
}

/// List all available defect keys.
pub fn list_defect_keys() -> Vec<&'static str> {
    DEFECT_REGISTRY.iter().map(|d| d.key).collect()
}
