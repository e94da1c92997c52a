//! Default filesystem-backed port implementations.

use crate::ports::{FileSource, WritePort};
use crate::settings::RepairSettings;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use glob::glob;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use tracing::debug;

/// Scans a directory on disk with `glob`.
#[derive(Debug, Clone, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn candidates(&self, settings: &RepairSettings) -> anyhow::Result<Vec<Utf8PathBuf>> {
        let pattern = settings.glob_pattern();
        debug!(pattern = %pattern, "scanning for candidate files");

        let mut out = Vec::new();
        for entry in glob(&pattern).with_context(|| format!("glob {}", pattern))? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
            if !path.is_file() {
                continue;
            }
            let utf8 = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| anyhow::anyhow!("non UTF-8 path: {}", p.display()))?;
            out.push(utf8);
        }

        // Deterministic order matters.
        out.sort();
        Ok(out)
    }

    fn read_text(&self, path: &Utf8Path) -> anyhow::Result<String> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).with_context(|| format!("decode {} as UTF-8", path))
    }
}

/// Filesystem write operations.
///
/// `replace_file` stages the new content in a temp file next to the target
/// and renames it over the target, so a failed write never leaves a
/// truncated file behind.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn replace_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        let meta = fs::metadata(path)?;
        let perms = meta.permissions();
        if perms.readonly() {
            anyhow::bail!("{} is read-only", path);
        }

        let dir = match path.parent() {
            Some(p) if !p.as_str().is_empty() => p,
            _ => Utf8Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir))?;
        tmp.write_all(contents)
            .with_context(|| format!("stage new content for {}", path))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("flush staged content for {}", path))?;
        tmp.as_file()
            .set_permissions(perms)
            .with_context(|| format!("copy permissions onto staged {}", path))?;
        tmp.persist(path)
            .map_err(|e| anyhow::anyhow!("replace {}: {}", path, e.error))?;
        Ok(())
    }

    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}

/// In-memory file store for embedding and testing.
///
/// Implements both ports. Candidates are the stored paths whose parent is
/// the settings directory and whose name matches the extension filter,
/// sorted by path. Reads and writes can be made to fail per path.
#[derive(Debug, Default)]
pub struct InMemoryFiles {
    files: RefCell<BTreeMap<Utf8PathBuf, Vec<u8>>>,
    fail_read: BTreeSet<Utf8PathBuf>,
    fail_write: BTreeSet<Utf8PathBuf>,
    writes: RefCell<Vec<Utf8PathBuf>>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    pub fn fail_read(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.fail_read.insert(path.into());
        self
    }

    pub fn fail_write(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.fail_write.insert(path.into());
        self
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Utf8Path::new(path)).cloned()
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.contents(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Every path written so far, in order.
    pub fn writes(&self) -> Vec<Utf8PathBuf> {
        self.writes.borrow().clone()
    }
}

impl FileSource for InMemoryFiles {
    fn candidates(&self, settings: &RepairSettings) -> anyhow::Result<Vec<Utf8PathBuf>> {
        let pattern = glob::Pattern::new(&settings.file_pattern())
            .with_context(|| format!("invalid extension filter {}", settings.extension))?;
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(settings.directory.as_path()))
            .filter(|p| p.file_name().is_some_and(|name| pattern.matches(name)))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Utf8Path) -> anyhow::Result<String> {
        if self.fail_read.contains(path) {
            anyhow::bail!("permission denied");
        }
        let bytes = self
            .files
            .borrow()
            .get(path)
            .cloned()
            .with_context(|| format!("no such file {}", path))?;
        String::from_utf8(bytes).with_context(|| format!("decode {} as UTF-8", path))
    }
}

impl WritePort for InMemoryFiles {
    fn replace_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if self.fail_write.contains(path) {
            anyhow::bail!("{} is read-only", path);
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        self.replace_file(path, contents)
    }

    fn create_dir_all(&self, _path: &Utf8Path) -> anyhow::Result<()> {
        Ok(())
    }
}
