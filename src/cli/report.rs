//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lct to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CleanSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::key_to_symbol;
use crate::issues::{Issue, Report, Severity, UnusedKeyIssue};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, followed by a problem count.
///
/// Issues are sorted by file and line first.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print the entries a cleanup removes (or would remove).
///
/// With `symbol_prefix` set, each line also shows the generated symbol.
pub fn print_unused_preview(issues: &[UnusedKeyIssue], symbol_prefix: Option<&str>) {
    print_unused_preview_to(issues, symbol_prefix, &mut io::stdout().lock());
}

pub fn print_unused_preview_to<W: Write>(
    issues: &[UnusedKeyIssue],
    symbol_prefix: Option<&str>,
    writer: &mut W,
) {
    let Some(first) = issues.first() else {
        return;
    };

    let key_width = issues
        .iter()
        .map(|i| UnicodeWidthStr::width(i.context.key.as_str()))
        .max()
        .unwrap_or(0);
    let line_width = issues
        .iter()
        .map(|i| i.context.location.line.to_string().len())
        .max()
        .unwrap_or(1);

    let _ = writeln!(
        writer,
        "{} {}",
        "Unused entries in".bold(),
        first.context.location.file_path.bold()
    );
    for issue in issues {
        let key = &issue.context.key;
        let padding = key_width - UnicodeWidthStr::width(key.as_str());
        let _ = write!(
            writer,
            "  {:>lw$} {} {}{:pad$} = \"{}\"",
            issue.context.location.line.to_string().blue(),
            "|".blue(),
            key.red(),
            "",
            issue.context.value.dimmed(),
            lw = line_width,
            pad = padding
        );
        if let Some(prefix) = symbol_prefix {
            let _ = write!(
                writer,
                "  {}",
                key_to_symbol(key).with_prefix(prefix).dimmed().cyan()
            );
        }
        let _ = writeln!(writer);
    }
    let _ = writeln!(writer);
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_to(result, verbose, &mut stdout);
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            report_to(&result.issues, writer);
            print_check_to(summary, result, writer);
        }
        CommandSummary::Clean(summary) => {
            report_to(&result.issues, writer);
            print_clean_to(summary, verbose, writer);
        }
        CommandSummary::Init(summary) => {
            print_init_to(summary, writer);
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let loc = issue.location();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let message = if issue.quoted() {
        format!("\"{}\"", issue.message())
    } else {
        issue.message()
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message,
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    if loc.line() > 0 {
        let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), loc.file_path(), loc.line());
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path());
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
    let _ = writeln!(writer);
}

fn print_check_to<W: Write>(summary: &CheckSummary, result: &CommandResult, writer: &mut W) {
    if summary.baseline_key_count == 0 {
        let _ = writeln!(
            writer,
            "{} baseline {} has no entries",
            "warning:".bold().yellow(),
            summary.baseline
        );
    }

    let _ = writeln!(
        writer,
        "{} ({} keys)",
        summary.baseline.bold(),
        summary.baseline_key_count
    );
    for target in &summary.targets {
        match target.key_count {
            Some(key_count) => {
                let missing = format!("{} missing", target.missing_count);
                let extra = format!("{} extra", target.extra_count);
                let _ = writeln!(
                    writer,
                    "  {} {} ({} keys): {}, {}",
                    "-".dimmed(),
                    target.path,
                    key_count,
                    if target.missing_count > 0 {
                        missing.red()
                    } else {
                        missing.normal()
                    },
                    if target.extra_count > 0 {
                        extra.yellow()
                    } else {
                        extra.normal()
                    }
                );
            }
            None => {
                let _ = writeln!(
                    writer,
                    "  {} {}: {}",
                    "-".dimmed(),
                    target.path,
                    "could not be loaded".red()
                );
            }
        }
    }

    if result.error_count == 0 && result.load_error_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} target(s) against {} ({} keys) - no missing keys",
                summary.targets.len(),
                summary.baseline,
                summary.baseline_key_count
            )
            .green()
        );
    }
}

fn print_clean_to<W: Write>(summary: &CleanSummary, verbose: bool, writer: &mut W) {
    if !summary.preview_shown && !summary.unused_issues.is_empty() {
        let prefix = verbose.then_some(summary.symbol_prefix.as_str());
        print_unused_preview_to(&summary.unused_issues, prefix, writer);
    }

    let _ = writeln!(
        writer,
        "Scanned {} source file(s) under {}",
        summary.files_scanned, summary.source_root
    );
    let used = summary.used_by_symbol + summary.used_by_literal;
    let _ = writeln!(
        writer,
        "  {} keys, {} used ({} via {}.*, {} via string literal), {} unused ({:.1}% in use)",
        summary.total_keys,
        used,
        summary.used_by_symbol,
        summary.symbol_prefix,
        summary.used_by_literal,
        summary.total_keys - used,
        summary.usage_rate
    );
    if summary.used_by_literal > 0 {
        let _ = writeln!(
            writer,
            "   {} {} {} key(s) are looked up by string literal; migrate them to {}.*",
            "=".blue(),
            "hint:".bold().cyan(),
            summary.used_by_literal,
            summary.symbol_prefix
        );
    }
    let prune = &summary.prune;
    if prune.removed_count() == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No unused keys in {}", summary.table).green()
        );
    } else if summary.skipped_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} key(s) from {}: {} path(s) under {} could not be read.",
            "Not deleting".red().bold(),
            prune.removed_count(),
            summary.table,
            summary.skipped_paths,
            summary.source_root
        );
    } else if summary.aborted {
        let _ = writeln!(writer, "{} no files were changed.", "Aborted;".yellow().bold());
    } else if prune.dry_run {
        let _ = writeln!(
            writer,
            "{} {} key(s) from {}.",
            "Would delete".yellow().bold(),
            prune.removed_count(),
            summary.table
        );
        let _ = writeln!(writer, "Run with {} to delete these keys.", "--apply".cyan());
    } else {
        let _ = writeln!(
            writer,
            "{} {} key(s) from {} ({} kept).",
            "Deleted".green().bold(),
            prune.removed_count(),
            summary.table,
            prune.kept
        );
        if let Some(backup) = &prune.backup_path {
            let _ = writeln!(writer, "  - backup: {}", backup.display());
        }
    }

    if let Some(report_file) = &summary.report_file {
        let _ = writeln!(writer, "Report written to {}", report_file.display());
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
