//! Error types for scriptfix-edit.
//!
//! Per-file failures are values, not control flow: the pipeline records them
//! in the run report and moves on to the next file.

use camino::{Utf8Path, Utf8PathBuf};
use scriptfix_types::report::FileErrorKind;
use std::fmt;
use thiserror::Error;

/// A failure attached to a single file.
#[derive(Debug, Error)]
pub enum RepairError {
    /// The file could not be opened or decoded as UTF-8.
    #[error("read error: {path}: {message}")]
    Read { path: Utf8PathBuf, message: String },

    /// The repaired content could not be persisted; the file is unchanged.
    #[error("write error: {path}: {message}")]
    Write { path: Utf8PathBuf, message: String },
}

impl RepairError {
    pub fn read(path: &Utf8Path, message: impl fmt::Display) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn write(path: &Utf8Path, message: impl fmt::Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> FileErrorKind {
        match self {
            RepairError::Read { .. } => FileErrorKind::ReadError,
            RepairError::Write { .. } => FileErrorKind::WriteError,
        }
    }

    pub fn path(&self) -> &Utf8Path {
        match self {
            RepairError::Read { path, .. } | RepairError::Write { path, .. } => path,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RepairError::Read { message, .. } | RepairError::Write { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RepairError;
    use camino::Utf8Path;
    use scriptfix_types::report::FileErrorKind;

    #[test]
    fn read_error_reports_kind_and_path() {
        let err = RepairError::read(Utf8Path::new("t/a.py"), "invalid utf-8");
        assert_eq!(err.kind(), FileErrorKind::ReadError);
        assert_eq!(err.path(), Utf8Path::new("t/a.py"));
        assert_eq!(err.message(), "invalid utf-8");
        assert!(err.to_string().contains("read error"));
        assert!(err.to_string().contains("t/a.py"));
    }

    #[test]
    fn write_error_reports_kind() {
        let err = RepairError::write(Utf8Path::new("t/b.py"), "read-only");
        assert_eq!(err.kind(), FileErrorKind::WriteError);
        assert!(err.to_string().contains("write error"));
    }
}
