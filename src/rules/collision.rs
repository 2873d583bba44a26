//! Symbol collision detection rule.
//!
//! Two keys that map to the same tail identifier cannot be told apart by the
//! usage scanner; two keys that map to the same full symbol break generated
//! code. Both are surfaced as warnings.

use crate::{
    core::{EntryLocation, ResourceTable, find_collisions},
    issues::SymbolCollisionIssue,
};

pub fn check_symbol_collisions(table: &ResourceTable) -> Vec<SymbolCollisionIssue> {
    find_collisions(table)
        .into_iter()
        .map(|collision| {
            let line = collision
                .keys
                .first()
                .and_then(|key| table.get(key))
                .map(|entry| entry.line())
                .unwrap_or(0);
            SymbolCollisionIssue {
                location: EntryLocation::new(&table.path, line),
                kind: collision.kind,
                symbol: collision.symbol,
                keys: collision.keys,
            }
        })
        .collect()
}
