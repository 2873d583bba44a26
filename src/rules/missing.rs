//! Missing key detection rule.
//!
//! Detects keys that are defined in the baseline table but absent from a
//! target table.

use crate::{
    core::{DiffResult, EntryContext, ResourceTable},
    issues::MissingKeyIssue,
};

/// Turn a diff's `missing_in_target` into issues located at the baseline
/// entries, in baseline order.
///
/// # Arguments
/// * `baseline` - The baseline table the diff was computed against
/// * `target` - Display path of the target
/// * `result` - Diff of `baseline` against the target
pub fn check_missing_keys(
    baseline: &ResourceTable,
    target: &str,
    result: &DiffResult,
) -> Vec<MissingKeyIssue> {
    result
        .missing_in_target
        .iter()
        .filter_map(|key| baseline.get(key))
        .map(|entry| MissingKeyIssue {
            context: EntryContext::from_entry(&baseline.path, entry),
            target: target.to_string(),
        })
        .collect()
}
