use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{ScanOptions, prune::DEFAULT_BACKUP_SUFFIX};

pub const CONFIG_FILE_NAME: &str = ".lctrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Baseline table, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    /// Target tables, relative to the config file.
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    /// Glob patterns matched against paths relative to the source root.
    /// Defaults to SwiftGen output, which declares every key's symbol.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_symbol_prefix")]
    pub symbol_prefix: String,
    #[serde(default = "default_match_literal_keys")]
    pub match_literal_keys: bool,
    #[serde(default)]
    pub fail_on_extra: bool,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    ["swift", "m", "mm", "h"].map(String::from).to_vec()
}

fn default_exclude_dirs() -> Vec<String> {
    ["Pods", "build", "DerivedData", ".git", "Carthage", ".build"]
        .map(String::from)
        .to_vec()
}

fn default_ignores() -> Vec<String> {
    ["**/Strings.swift", "**/L10n.swift"].map(String::from).to_vec()
}

fn default_symbol_prefix() -> String {
    "L10n".to_string()
}

fn default_match_literal_keys() -> bool {
    true
}

fn default_backup_suffix() -> String {
    DEFAULT_BACKUP_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseline: None,
            targets: Vec::new(),
            source_root: default_source_root(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            ignores: default_ignores(),
            symbol_prefix: default_symbol_prefix(),
            match_literal_keys: default_match_literal_keys(),
            fail_on_extra: false,
            backup_suffix: default_backup_suffix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// backup suffix could not form a sibling file name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.backup_suffix.is_empty()
            || self.backup_suffix.contains('/')
            || self.backup_suffix.contains('\\')
        {
            anyhow::bail!(
                "Invalid 'backupSuffix': \"{}\" (must be a non-empty file name suffix)",
                self.backup_suffix
            );
        }

        for ext in &self.extensions {
            if ext.starts_with('.') {
                anyhow::bail!(
                    "Invalid entry in 'extensions': \"{}\" (omit the leading dot)",
                    ext
                );
            }
        }

        Ok(())
    }

    /// Scanner options from this config. Patterns must have been validated.
    pub fn scan_options(&self) -> Result<ScanOptions> {
        let ignores = self
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ScanOptions {
            extensions: self.extensions.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            ignores,
            match_literals: self.match_literal_keys,
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory config-relative paths resolve against. The start directory
    /// when no file was found.
    pub base_dir: PathBuf,
    /// The file the config came from, if any.
    pub path: Option<PathBuf>,
}

/// Load the config, either from `explicit` or by walking up from `start_dir`.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let found = match explicit {
        Some(path) => {
            let path = start_dir.join(path);
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path)
        }
        None => find_config_file(start_dir),
    };

    match found {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                base_dir,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            path: None,
        }),
    }
}
