//! Property-based tests for the repair engine.
//!
//! These tests verify key invariants:
//! - Idempotency: repairing repaired content changes nothing
//! - Fence removal completeness: no fence survives, line count drops by exactly the fence lines
//! - Non-interference: content without either defect is returned byte-identical
//! - Determinism: same input, same output

use scriptfix_edit::{repair, rules::FENCE_MARKER};
use proptest::prelude::*;

/// Lines a generated test script may contain, corrupted or not.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex(r#"[a-zA-Z0-9 =(),.:/"'_-]{0,40}"#).unwrap(),
        Just(r#"    await page.goto("http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync"", wait_until="commit")"#.to_string()),
        Just(r#"    await page.goto('http://localhost:3000/"C:/Users/Vaibhav/Workspace/Mind-Sync"')"#.to_string()),
        Just(r#"url = "http://localhost:3000/C:/Users/Vaibhav/Workspace/Mind-Sync""#.to_string()),
        Just(r#"url = "http://localhost:3000/'E:\proj\web'""#.to_string()),
        Just(r#"    await page.goto("http://localhost:3000/")"#.to_string()),
        Just("```python".to_string()),
        Just("```".to_string()),
        Just("  # ``` leftover".to_string()),
    ]
}

fn arb_script() -> impl Strategy<Value = String> {
    (prop::collection::vec(arb_line(), 0..20), any::<bool>(), any::<bool>()).prop_map(
        |(lines, crlf, trailing)| {
            let sep = if crlf { "\r\n" } else { "\n" };
            let mut text = lines.join(sep);
            if trailing && !text.is_empty() {
                text.push_str(sep);
            }
            text
        },
    )
}

fn arb_clean_script() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex(r#"[a-zA-Z0-9 =(),.:/"'_-]{0,40}"#).unwrap(),
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
    .prop_filter("no defect anchors", |s| {
        !s.contains("localhost") && !s.contains(FENCE_MARKER)
    })
}

proptest! {
    #[test]
    fn repair_is_idempotent(script in arb_script()) {
        let once = repair(&script);
        let twice = repair(&once.content);
        prop_assert!(!twice.changed());
        prop_assert!(twice.defects.is_empty());
        prop_assert_eq!(twice.content, once.content);
    }

    #[test]
    fn fence_lines_are_removed_exactly(script in arb_script()) {
        let fence_lines = script.lines().filter(|l| l.contains(FENCE_MARKER)).count();
        let out = repair(&script);

        prop_assert!(out.content.lines().all(|l| !l.contains(FENCE_MARKER)));
        prop_assert_eq!(out.content.lines().count(), script.lines().count() - fence_lines);
        prop_assert_eq!(out.defects.stray_fence, fence_lines as u64);
    }

    #[test]
    fn no_corrupt_url_survives(script in arb_script()) {
        let out = repair(&script);
        prop_assert!(!out.content.contains("Mind-Sync"));
        prop_assert!(!out.content.contains(r"E:\proj"));
    }

    #[test]
    fn clean_content_is_byte_identical(script in arb_clean_script()) {
        let out = repair(&script);
        prop_assert!(!out.changed());
        prop_assert!(out.defects.is_empty());
        prop_assert_eq!(out.content, script);
    }

    #[test]
    fn repair_is_deterministic(script in arb_script()) {
        prop_assert_eq!(repair(&script), repair(&script));
    }
}
