//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production crates.
//! The script bodies below are shared by the step definitions.

/// A generated script with one glued-path URL and one fence line.
pub const CORRUPTED_SCRIPT: &str = concat!(
    "```python\n",
    "nav = \"http://localhost:3000/\"C:/Users/Vaibhav/Workspace/Mind-Sync\"\"\n",
);

/// What [`CORRUPTED_SCRIPT`] looks like after one pass.
pub const REPAIRED_SCRIPT: &str = "nav = \"http://localhost:3000/\"\n";

/// A script with nothing to repair, CRLF endings included.
pub const CLEAN_SCRIPT: &str = "import asyncio\r\nnav = \"http://localhost:3000/\"\r\n";

/// Bytes that are not valid UTF-8.
pub const UNREADABLE_BYTES: &[u8] = &[0x66, 0x6f, 0xff, 0xfe, 0x0a];
