//! Configuration file loading for scriptfix.
//!
//! Discovers and loads `scriptfix.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use scriptfix_core::settings::{DEFAULT_DIRECTORY, DEFAULT_EXTENSION, RepairSettings};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "scriptfix.toml";

/// Top-level configuration from scriptfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptfixConfig {
    /// Which files the pass looks at.
    pub scan: ScanConfig,

    /// Where report artifacts go.
    pub report: ReportConfig,
}

/// Scan section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory to scan (non-recursive).
    pub dir: Option<Utf8PathBuf>,

    /// Extension filter, e.g. ".py" or "*.py".
    pub ext: Option<String>,
}

/// Report section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Write report.json, report.md and patch.diff here.
    pub out_dir: Option<Utf8PathBuf>,
}

/// Discover the scriptfix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a scriptfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ScriptfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ScriptfixConfig> {
    let config: ScriptfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load an explicit config path, or discover one in `dir`, or fall back to defaults.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<ScriptfixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(ScriptfixConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub settings: RepairSettings,
    pub out_dir: Option<Utf8PathBuf>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: ScriptfixConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: ScriptfixConfig) -> Self {
        Self { config }
    }

    /// CLI values win over the file, the file wins over built-in defaults.
    pub fn merge_run_args(
        self,
        cli_dir: Option<Utf8PathBuf>,
        cli_ext: Option<String>,
        cli_out_dir: Option<Utf8PathBuf>,
        dry_run: bool,
    ) -> MergedConfig {
        let directory = cli_dir
            .or(self.config.scan.dir)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DIRECTORY));
        let extension = cli_ext
            .or(self.config.scan.ext)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        MergedConfig {
            settings: RepairSettings {
                directory,
                extension,
                dry_run,
            },
            out_dir: cli_out_dir.or(self.config.report.out_dir),
        }
    }
}
