use std::path::{Path, PathBuf};

use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, exit_on_errors: bool) -> CommandResult {
    issues.sort();

    let load_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_) | Issue::ReadError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        load_error_count,
    }
}

/// Path as shown to the user: relative to `cwd` when below it.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    let shown = path.strip_prefix(cwd).unwrap_or(path);
    if shown.as_os_str().is_empty() {
        ".".to_string()
    } else {
        shown.to_string_lossy().into_owned()
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
