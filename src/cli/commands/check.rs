use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandResult, CommandSummary, TargetSummary, context::CommandContext,
    helper::finish,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{DiffedTarget, ResourceTable, diff_targets},
    issues::Issue,
    rules::{
        collision::check_symbol_collisions, extra::check_extra_keys, load_error_issue,
        missing::check_missing_keys,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.args.common)?;
    check_with(&ctx, cmd)
}

pub fn check_with(ctx: &CommandContext, cmd: CheckCommand) -> Result<CommandResult> {
    let fail_on_extra = cmd.args.fail_on_extra || ctx.config.fail_on_extra;

    let baseline_path = ctx.baseline(cmd.baseline.as_deref())?;
    let targets = ctx.targets(&cmd.targets);
    if targets.is_empty() {
        anyhow::bail!(
            "No target tables given. Pass them after the baseline or set \"targets\" in {}",
            CONFIG_FILE_NAME
        );
    }

    let mut baseline = ResourceTable::load(&baseline_path)
        .with_context(|| format!("Failed to load baseline {}", ctx.display(&baseline_path)))?;
    baseline.path = ctx.display(&baseline_path);
    debug!(baseline = %baseline.path, targets = targets.len(), "checking tables");

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(
        check_symbol_collisions(&baseline)
            .into_iter()
            .map(Issue::SymbolCollision),
    );

    let mut summaries = Vec::with_capacity(targets.len());
    for target in diff_targets(&baseline, &targets) {
        let target_path = ctx.display(&target.path);
        let key_count = target.key_count();
        match target.outcome {
            Ok(DiffedTarget { mut table, result }) => {
                table.path = target_path.clone();
                let missing = check_missing_keys(&baseline, &target_path, &result);
                let extra = check_extra_keys(&table, &baseline.path, &result, fail_on_extra);
                summaries.push(TargetSummary {
                    path: target_path,
                    key_count,
                    missing_count: missing.len(),
                    extra_count: extra.len(),
                });
                issues.extend(missing.into_iter().map(Issue::MissingKey));
                issues.extend(extra.into_iter().map(Issue::ExtraKey));
            }
            Err(err) => {
                issues.push(load_error_issue(&target_path, err)?);
                summaries.push(TargetSummary {
                    path: target_path,
                    key_count: None,
                    missing_count: 0,
                    extra_count: 0,
                });
            }
        }
    }

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            baseline: baseline.path.clone(),
            baseline_key_count: baseline.len(),
            targets: summaries,
            fail_on_extra,
        }),
        issues,
        true,
    ))
}
