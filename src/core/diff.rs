//! Baseline/target key comparison.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use super::error::LctError;
use super::table::ResourceTable;

/// Keys present on one side only. Each list keeps the file order of the table
/// it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// In the baseline, absent from the target.
    pub missing_in_target: Vec<String>,
    /// In the target, absent from the baseline.
    pub extra_in_target: Vec<String>,
}

impl DiffResult {
    pub fn is_clean(&self) -> bool {
        self.missing_in_target.is_empty() && self.extra_in_target.is_empty()
    }
}

/// Compare by exact key equality. No normalization or case folding.
pub fn diff(baseline: &ResourceTable, target: &ResourceTable) -> DiffResult {
    DiffResult {
        missing_in_target: baseline
            .keys()
            .filter(|key| !target.contains_key(key))
            .map(str::to_string)
            .collect(),
        extra_in_target: target
            .keys()
            .filter(|key| !baseline.contains_key(key))
            .map(str::to_string)
            .collect(),
    }
}

/// A target that loaded and was compared.
#[derive(Debug)]
pub struct DiffedTarget {
    pub table: ResourceTable,
    pub result: DiffResult,
}

/// Outcome of comparing one target against the baseline.
#[derive(Debug)]
pub struct TargetDiff {
    pub path: PathBuf,
    pub outcome: Result<DiffedTarget, LctError>,
}

impl TargetDiff {
    /// Number of keys in the target, when it could be loaded.
    pub fn key_count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(|t| t.table.len())
    }
}

/// Load and diff every target. A target that fails to load is recorded in its
/// own [`TargetDiff`] and does not stop the others. Results come back in the
/// order the targets were given.
pub fn diff_targets(baseline: &ResourceTable, targets: &[PathBuf]) -> Vec<TargetDiff> {
    targets
        .par_iter()
        .map(|path| TargetDiff {
            path: path.clone(),
            outcome: diff_target(baseline, path),
        })
        .collect()
}

fn diff_target(baseline: &ResourceTable, path: &Path) -> Result<DiffedTarget, LctError> {
    let table = ResourceTable::load(path)?;
    let result = diff(baseline, &table);
    debug!(
        target = %path.display(),
        missing = result.missing_in_target.len(),
        extra = result.extra_in_target.len(),
        "diffed target"
    );
    Ok(DiffedTarget { table, result })
}
