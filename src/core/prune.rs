//! Prune executor: remove unused entries from a table file.
//!
//! Destructive runs follow a fixed order:
//! 1. re-read the file and make sure it still matches the parsed table
//! 2. write a backup next to it and verify it byte-for-byte
//! 3. write the pruned table to a sibling temp file and rename it over the
//!    original
//!
//! Any failure before step 3's rename leaves the original untouched.

use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use super::error::{LctError, LctResult};
use super::table::ResourceTable;

pub const DEFAULT_BACKUP_SUFFIX: &str = "backup";

#[derive(Debug, Clone)]
pub struct PruneOptions {
    /// Compute the report only; never touch the filesystem.
    pub dry_run: bool,
    /// The caller obtained explicit approval for a destructive run.
    pub confirmed: bool,
    /// Backup file is `<file name>.<suffix>` in the same directory.
    pub backup_suffix: String,
}

impl PruneOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            confirmed: false,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }

    pub fn apply_confirmed() -> Self {
        Self {
            dry_run: false,
            confirmed: true,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

/// What a prune removed or would remove. Identical for dry and real runs,
/// apart from `backup_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport {
    /// Removed keys in table order.
    pub removed: Vec<String>,
    pub kept: usize,
    pub dry_run: bool,
    /// Set when a backup was written.
    pub backup_path: Option<PathBuf>,
}

impl PruneReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Remove every entry whose key is in `unused` from `table`'s file.
pub fn prune(
    table: &ResourceTable,
    unused: &HashSet<String>,
    options: &PruneOptions,
) -> LctResult<PruneReport> {
    let removed: Vec<String> = table
        .keys()
        .filter(|key| unused.contains(*key))
        .map(str::to_string)
        .collect();
    let mut report = PruneReport {
        kept: table.len() - removed.len(),
        removed,
        dry_run: options.dry_run,
        backup_path: None,
    };

    if options.dry_run {
        return Ok(report);
    }
    if !options.confirmed {
        return Err(LctError::NotConfirmed);
    }
    if report.removed.is_empty() {
        debug!(path = %table.path, "nothing to prune");
        return Ok(report);
    }

    let path = Path::new(&table.path);
    let original = fs::read(path).map_err(|source| LctError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if original != table.render().as_bytes() {
        return Err(LctError::StaleTable {
            path: path.to_path_buf(),
        });
    }

    let backup = backup_path(path, &options.backup_suffix);
    write_backup(&backup, &original)?;
    debug!(backup = %backup.display(), "backup written");

    let removed_keys: HashSet<&str> = report.removed.iter().map(String::as_str).collect();
    let pruned = table.render_without(&removed_keys);
    replace_file(path, pruned.as_bytes())?;

    info!(
        path = %path.display(),
        removed = report.removed.len(),
        kept = report.kept,
        "pruned table"
    );
    report.backup_path = Some(backup);
    Ok(report)
}

/// `Localizable.strings` -> `Localizable.strings.<suffix>` in the same directory.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    sibling_with_suffix(path, suffix)
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

fn write_backup(backup: &Path, original: &[u8]) -> LctResult<()> {
    let failure = |reason: String| LctError::BackupFailure {
        path: backup.to_path_buf(),
        reason,
    };
    fs::write(backup, original).map_err(|e| failure(e.to_string()))?;
    let written = fs::read(backup).map_err(|e| failure(e.to_string()))?;
    if written != original {
        return Err(failure("backup content does not match the original".to_string()));
    }
    Ok(())
}

fn replace_file(path: &Path, content: &[u8]) -> LctResult<()> {
    let tmp = sibling_with_suffix(path, "lct-tmp");
    let write_err = |source| LctError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}
