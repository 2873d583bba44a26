use std::{
    collections::HashSet,
    fmt::Write as _,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::CleanCommand, prompt::confirm, report::print_unused_preview};
use super::{
    CleanSummary, CommandResult, CommandSummary, context::CommandContext,
    helper::{finish, resolve},
};
use crate::{
    core::{PruneOptions, ResourceTable, UsageKind, UsageReport, find_unused, prune},
    issues::{Issue, ReadErrorIssue, UnusedKeyIssue},
    rules::{collision::check_symbol_collisions, unused::check_unused_keys},
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.args.common)?;
    let stdin = io::stdin();
    clean_with(&ctx, cmd, &mut stdin.lock(), &mut io::stderr())
}

/// Run the cleanup workflow. A destructive run asks on `output` and reads the
/// answer from `input` unless `--yes` was given.
pub fn clean_with<R: BufRead, W: Write>(
    ctx: &CommandContext,
    cmd: CleanCommand,
    input: &mut R,
    output: &mut W,
) -> Result<CommandResult> {
    let args = &cmd.args;

    let table_path = ctx.baseline(cmd.table.as_deref())?;
    let source_root = ctx.source_root(args.source_root.as_deref());
    if !source_root.is_dir() {
        anyhow::bail!("Source root is not a directory: {}", ctx.display(&source_root));
    }

    let mut options = ctx.config.scan_options()?;
    if !args.extensions.is_empty() {
        options.extensions = args
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
    }
    if !args.exclude_dirs.is_empty() {
        options.exclude_dirs = args.exclude_dirs.clone();
    }

    // The table keeps its resolved path for pruning; reports show `shown`.
    let shown = ctx.display(&table_path);
    let table = ResourceTable::load(&table_path)
        .with_context(|| format!("Failed to load {}", shown))?;

    let usage = find_unused(&table, &source_root, &options);
    debug!(
        files = usage.files_scanned,
        used = usage.used.len(),
        unused = usage.unused.len(),
        "scan finished"
    );

    let mut unused_issues = check_unused_keys(&table, &usage);
    for issue in &mut unused_issues {
        issue.context.location.file_path = shown.clone();
    }
    let unused: HashSet<String> = usage.unused.iter().cloned().collect();

    // A key referenced only from an unreadable file would look unused.
    let incomplete = !usage.skipped.is_empty();
    let mut issues: Vec<Issue> = usage
        .skipped
        .iter()
        .map(|path| {
            Issue::ReadError(ReadErrorIssue {
                file_path: ctx.display(path),
                error: "source path could not be read; refusing to delete keys".to_string(),
            })
        })
        .collect();

    let mut preview_shown = false;
    let mut aborted = false;
    let confirmed = if incomplete {
        false
    } else if !args.apply || unused.is_empty() || args.yes {
        args.apply
    } else {
        print_unused_preview(
            &unused_issues,
            ctx.verbose.then_some(ctx.config.symbol_prefix.as_str()),
        );
        preview_shown = true;
        let question = format!(
            "Delete {} unused key(s) from {}? A backup is written first.",
            unused.len(),
            shown
        );
        let yes = confirm(input, output, &question).context("Failed to read confirmation")?;
        aborted = !yes;
        yes
    };

    let prune_options = PruneOptions {
        dry_run: !args.apply || aborted || incomplete,
        confirmed,
        backup_suffix: ctx.config.backup_suffix.clone(),
    };
    let mut pruned = prune(&table, &unused, &prune_options)
        .with_context(|| format!("Failed to prune {}", shown))?;
    pruned.backup_path = pruned
        .backup_path
        .map(|backup| PathBuf::from(ctx.display(&backup)));

    let source_root_display = ctx.display(&source_root);
    let report_file = match &args.report {
        Some(path) => {
            let path = resolve(&ctx.cwd, path);
            let content = render_cleanup_report(
                &shown,
                &source_root_display,
                &usage,
                &unused_issues,
                &ctx.config.symbol_prefix,
            );
            write_report_file(&path, &content)?;
            Some(PathBuf::from(ctx.display(&path)))
        }
        None => None,
    };

    issues.extend(check_symbol_collisions(&table).into_iter().map(|mut issue| {
        issue.location.file_path = shown.clone();
        Issue::SymbolCollision(issue)
    }));

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            table: shown,
            source_root: source_root_display,
            files_scanned: usage.files_scanned,
            skipped_paths: usage.skipped.len(),
            total_keys: usage.total(),
            used_by_symbol: usage.used_by(UsageKind::Symbol),
            used_by_literal: usage.used_by(UsageKind::Literal),
            usage_rate: usage.usage_rate(),
            unused_issues,
            prune: pruned,
            is_apply: args.apply,
            aborted,
            preview_shown,
            report_file,
            symbol_prefix: ctx.config.symbol_prefix.clone(),
        }),
        issues,
        false,
    ))
}

fn write_report_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Plain-text cleanup report: statistics and the unused entries.
pub fn render_cleanup_report(
    table_path: &str,
    source_root: &str,
    usage: &UsageReport,
    unused: &[UnusedKeyIssue],
    symbol_prefix: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Localization cleanup report");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out);
    let _ = writeln!(out, "Table: {}", table_path);
    let _ = writeln!(out, "Source root: {}", source_root);
    let _ = writeln!(out, "Files scanned: {}", usage.files_scanned);
    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics");
    let _ = writeln!(out, "{}", "-".repeat(20));
    let _ = writeln!(out, "Total keys: {}", usage.total());
    let _ = writeln!(out, "Used keys: {}", usage.used.len());
    let _ = writeln!(
        out,
        "  - generated symbols ({}.*): {}",
        symbol_prefix,
        usage.used_by(UsageKind::Symbol)
    );
    let _ = writeln!(
        out,
        "  - string literals: {}",
        usage.used_by(UsageKind::Literal)
    );
    let _ = writeln!(out, "Unused keys: {}", usage.unused.len());
    let _ = writeln!(out, "Usage rate: {:.1}%", usage.usage_rate());
    let _ = writeln!(out);

    if unused.is_empty() {
        let _ = writeln!(out, "No unused entries found.");
    } else {
        let _ = writeln!(out, "Unused entries");
        let _ = writeln!(out, "{}", "=".repeat(30));
        for issue in unused {
            let _ = writeln!(
                out,
                "\"{}\" = \"{}\";",
                issue.context.key, issue.context.value
            );
        }
    }
    out
}
