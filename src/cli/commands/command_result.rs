use std::path::PathBuf;

use crate::core::PruneReport;
use crate::issues::{Issue, UnusedKeyIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

/// Per-target line of the check summary.
#[derive(Debug)]
pub struct TargetSummary {
    pub path: String,
    /// `None` when the target could not be loaded.
    pub key_count: Option<usize>,
    pub missing_count: usize,
    pub extra_count: usize,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub baseline: String,
    pub baseline_key_count: usize,
    pub targets: Vec<TargetSummary>,
    pub fail_on_extra: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub table: String,
    pub source_root: String,
    pub files_scanned: usize,
    /// Source paths that could not be read. Any of them blocks deletion.
    pub skipped_paths: usize,
    pub total_keys: usize,
    pub used_by_symbol: usize,
    pub used_by_literal: usize,
    pub usage_rate: f64,
    pub unused_issues: Vec<UnusedKeyIssue>,
    pub prune: PruneReport,
    pub is_apply: bool,
    /// The destructive run was declined at the prompt.
    pub aborted: bool,
    /// The unused entries were already listed before the prompt.
    pub preview_shown: bool,
    pub report_file: Option<PathBuf>,
    pub symbol_prefix: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lct commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, only load errors affect the exit code.
    pub exit_on_errors: bool,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
    /// Number of tables that failed to read or parse.
    pub load_error_count: usize,
}
