use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    init_in(&cwd)
}

/// Write the default configuration into `dir`. Never overwrites.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(path = %config_path.display(), "created config");

    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        true,
    ))
}
