//! Unused key detection rule.
//!
//! Detects keys whose generated symbol tail (or literal key) never appears in
//! the scanned source tree.

use crate::{
    core::{EntryContext, ResourceTable, UsageReport, symbol_tail},
    issues::UnusedKeyIssue,
};

/// Build issues for the unused keys of `report`, sorted by key.
pub fn check_unused_keys(table: &ResourceTable, report: &UsageReport) -> Vec<UnusedKeyIssue> {
    report
        .unused
        .iter()
        .filter_map(|key| table.get(key))
        .map(|entry| UnusedKeyIssue {
            context: EntryContext::from_entry(&table.path, entry),
            tail: symbol_tail(&entry.key),
        })
        .collect()
}
