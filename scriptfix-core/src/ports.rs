//! Port traits abstracting all I/O away from the pipeline.

use crate::settings::RepairSettings;
use camino::{Utf8Path, Utf8PathBuf};

/// Source of candidate files and their text.
pub trait FileSource {
    /// Files matching the settings' directory and extension filter, in a stable order.
    fn candidates(&self, settings: &RepairSettings) -> anyhow::Result<Vec<Utf8PathBuf>>;
    fn read_text(&self, path: &Utf8Path) -> anyhow::Result<String>;
}

/// File-system write operations.
pub trait WritePort {
    /// Replace an existing file. Either the new content lands or the old content stays.
    fn replace_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
