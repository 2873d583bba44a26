//! Mapping from resource keys to generated-code symbol names.
//!
//! Code generators such as SwiftGen turn `futuresrecords.header.amount_usdt`
//! into `L10n.Futuresrecords.Header.amountUsdt`:
//!
//! - every segment but the last gets its first character upper-cased and is
//!   otherwise left alone (`flashexchange` -> `Flashexchange`)
//! - the last segment is converted from snake_case to lowerCamelCase when it
//!   contains underscores, and left untouched otherwise
//!
//! Source code only needs to contain the final component (the *tail*) for a
//! usage to be detected, so [`symbol_tail`] is what the usage scanner matches.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use super::table::ResourceTable;

/// Separator between the components of a generated symbol path.
pub const NAMESPACE_SEPARATOR: &str = ".";

/// A generated-code reference derived from a key. Never stored; recompute with
/// [`key_to_symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolName {
    components: Vec<String>,
}

impl SymbolName {
    /// The final path component, e.g. `amountUsdt`.
    pub fn tail(&self) -> &str {
        self.components.last().map(String::as_str).unwrap_or_default()
    }

    /// Render with a host namespace in front, e.g. `L10n.Common.ok`.
    pub fn with_prefix(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.to_string()
        } else {
            format!("{}{}{}", prefix, NAMESPACE_SEPARATOR, self)
        }
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join(NAMESPACE_SEPARATOR))
    }
}

pub fn key_to_symbol(key: &str) -> SymbolName {
    let segments: Vec<&str> = key.split('.').collect();
    let last = segments.len() - 1;
    let components = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last {
                last_segment(segment)
            } else {
                capitalize_first(segment)
            }
        })
        .collect();
    SymbolName { components }
}

/// The identifier source code will contain for `key`.
pub fn symbol_tail(key: &str) -> String {
    let last = key.rsplit('.').next().unwrap_or(key);
    last_segment(last)
}

fn last_segment(segment: &str) -> String {
    if !segment.contains('_') {
        return segment.to_string();
    }
    let mut fragments = segment.split('_');
    let mut out = fragments.next().unwrap_or_default().to_lowercase();
    for fragment in fragments {
        let mut chars = fragment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How two or more keys collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollisionKind {
    /// Different symbol paths sharing the same tail. The usage scanner cannot
    /// tell these keys apart.
    Tail,
    /// The full symbol path is identical. The generated code itself is broken.
    Symbol,
}

/// Keys of one table whose symbols cannot be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCollision {
    pub kind: CollisionKind,
    /// The shared tail or the shared full path, depending on `kind`.
    pub symbol: String,
    /// Colliding keys in file order.
    pub keys: Vec<String>,
}

/// Find groups of keys sharing a symbol, sorted by symbol.
///
/// A tail group is only reported when its keys span at least two distinct
/// symbol paths; keys with an identical full path are reported separately as
/// [`CollisionKind::Symbol`].
pub fn find_collisions(table: &ResourceTable) -> Vec<SymbolCollision> {
    let mut by_symbol: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut by_tail: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for key in table.keys() {
        let symbol = key_to_symbol(key);
        by_tail
            .entry(symbol.tail().to_string())
            .or_default()
            .push(key.to_string());
        by_symbol
            .entry(symbol.to_string())
            .or_default()
            .push(key.to_string());
    }

    let mut collisions: Vec<SymbolCollision> = by_symbol
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(symbol, keys)| SymbolCollision {
            kind: CollisionKind::Symbol,
            symbol,
            keys,
        })
        .collect();

    collisions.extend(
        by_tail
            .into_iter()
            .filter(|(_, keys)| {
                let paths: HashSet<String> =
                    keys.iter().map(|k| key_to_symbol(k).to_string()).collect();
                paths.len() > 1
            })
            .map(|(tail, keys)| SymbolCollision {
                kind: CollisionKind::Tail,
                symbol: tail,
                keys,
            }),
    );

    collisions.sort_by(|a, b| a.symbol.cmp(&b.symbol).then(a.kind.cmp(&b.kind)));
    collisions
}
