//! Per-invocation command context: loaded configuration plus path resolution.
//!
//! Config-file paths resolve against the config file's directory; paths given
//! on the command line resolve against the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::helper::{display_path, resolve};
use crate::cli::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

pub struct CommandContext {
    pub config: Config,
    /// Directory of the config file, or `cwd` when none was found.
    pub config_dir: PathBuf,
    pub cwd: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Self::with_cwd(common, cwd)
    }

    pub fn with_cwd(common: &CommonArgs, cwd: PathBuf) -> Result<Self> {
        let loaded = load_config(&cwd, common.config.as_deref())?;
        if let Some(path) = &loaded.path {
            debug!(config = %path.display(), "using config file");
        }
        Ok(Self {
            config: loaded.config,
            config_dir: loaded.base_dir,
            cwd,
            verbose: common.verbose,
        })
    }

    /// The baseline table: command line first, then config.
    pub fn baseline(&self, cli: Option<&Path>) -> Result<PathBuf> {
        match (cli, &self.config.baseline) {
            (Some(path), _) => Ok(resolve(&self.cwd, path)),
            (None, Some(path)) => Ok(resolve(&self.config_dir, path)),
            (None, None) => anyhow::bail!(
                "No baseline table given. Pass it as an argument or set \"baseline\" in {}",
                CONFIG_FILE_NAME
            ),
        }
    }

    /// Target tables: command line if any were given, otherwise config.
    pub fn targets(&self, cli: &[PathBuf]) -> Vec<PathBuf> {
        if cli.is_empty() {
            self.config
                .targets
                .iter()
                .map(|t| resolve(&self.config_dir, t))
                .collect()
        } else {
            cli.iter().map(|t| resolve(&self.cwd, t)).collect()
        }
    }

    pub fn source_root(&self, cli: Option<&Path>) -> PathBuf {
        match cli {
            Some(path) => resolve(&self.cwd, path),
            None => resolve(&self.config_dir, &self.config.source_root),
        }
    }

    /// Path as shown in reports.
    pub fn display(&self, path: &Path) -> String {
        display_path(path, &self.cwd)
    }
}
