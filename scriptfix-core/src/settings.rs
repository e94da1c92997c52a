//! Clap-free settings for the repair pass.

use camino::Utf8PathBuf;

pub const DEFAULT_DIRECTORY: &str = "testsprite_tests";
pub const DEFAULT_EXTENSION: &str = "*";

/// Configuration threaded through one repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairSettings {
    /// Directory to scan (non-recursive).
    pub directory: Utf8PathBuf,
    /// Suffix filter: `*` for every file, `.py`/`py`/`*.py` for one extension.
    pub extension: String,
    /// Compute repairs and a patch without writing.
    pub dry_run: bool,
}

impl Default for RepairSettings {
    fn default() -> Self {
        Self {
            directory: Utf8PathBuf::from(DEFAULT_DIRECTORY),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl RepairSettings {
    /// File-name glob derived from [`Self::extension`].
    pub fn file_pattern(&self) -> String {
        let ext = self.extension.trim();
        if ext.is_empty() {
            DEFAULT_EXTENSION.to_string()
        } else if ext.starts_with('*') {
            ext.to_string()
        } else if ext.starts_with('.') {
            format!("*{ext}")
        } else {
            format!("*.{ext}")
        }
    }

    /// Full glob: escaped directory joined with [`Self::file_pattern`].
    pub fn glob_pattern(&self) -> String {
        let dir = glob::Pattern::escape(self.directory.as_str());
        format!("{}/{}", dir.trim_end_matches('/'), self.file_pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ext(ext: &str) -> RepairSettings {
        RepairSettings {
            extension: ext.to_string(),
            ..RepairSettings::default()
        }
    }

    #[test]
    fn extension_forms_normalize_to_suffix_glob() {
        assert_eq!(with_ext(".py").file_pattern(), "*.py");
        assert_eq!(with_ext("py").file_pattern(), "*.py");
        assert_eq!(with_ext("*.py").file_pattern(), "*.py");
        assert_eq!(with_ext("*").file_pattern(), "*");
        assert_eq!(with_ext("").file_pattern(), "*");
    }

    #[test]
    fn glob_pattern_escapes_directory() {
        let settings = RepairSettings {
            directory: Utf8PathBuf::from("runs/[2026]/"),
            extension: ".py".to_string(),
            dry_run: false,
        };
        assert_eq!(settings.glob_pattern(), "runs/[[]2026[]]/*.py");
    }

    #[test]
    fn defaults() {
        let s = RepairSettings::default();
        assert_eq!(s.directory.as_str(), DEFAULT_DIRECTORY);
        assert_eq!(s.glob_pattern(), "testsprite_tests/*");
        assert!(!s.dry_run);
    }
}
