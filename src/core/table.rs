use std::{
    collections::{HashMap, HashSet},
    fs,
    ops::RangeInclusive,
    path::Path,
};

use tracing::debug;

use super::error::{LctError, LctResult};
use super::parsers::strings::parse_strings_bytes;

/// One `"key" = "value";` assignment of a `.strings` table.
///
/// `value` is the payload between the quotes exactly as written, escape
/// sequences included. `leading_comments` and the assignment line are kept as
/// raw text (line terminators included) so the entry can be written back
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub key: String,
    pub value: String,
    pub leading_comments: Vec<String>,
    /// 1-based span from the first leading comment line to the assignment line.
    pub lines: RangeInclusive<usize>,
    raw: String,
}

impl ResourceEntry {
    pub(crate) fn new(
        key: String,
        value: String,
        leading_comments: Vec<String>,
        lines: RangeInclusive<usize>,
        raw: String,
    ) -> Self {
        Self {
            key,
            value,
            leading_comments,
            lines,
            raw,
        }
    }

    /// Line of the assignment itself (1-based).
    pub fn line(&self) -> usize {
        *self.lines.end()
    }

    fn write_to(&self, out: &mut String) {
        for comment in &self.leading_comments {
            out.push_str(comment);
        }
        out.push_str(&self.raw);
    }
}

/// A piece of a table in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableItem {
    Entry(ResourceEntry),
    /// Blank lines and comments not attached to an entry (section markers).
    Trivia(String),
}

/// The parsed form of one `.strings` file.
///
/// Built fresh for each invocation; nothing is cached between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTable {
    pub path: String,
    items: Vec<TableItem>,
    index: HashMap<String, usize>,
}

impl ResourceTable {
    pub(crate) fn from_items(path: impl Into<String>, items: Vec<TableItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                TableItem::Entry(entry) => Some((entry.key.clone(), i)),
                TableItem::Trivia(_) => None,
            })
            .collect();
        Self {
            path: path.into(),
            items,
            index,
        }
    }

    /// Read and parse a table from disk.
    pub fn load(path: &Path) -> LctResult<Self> {
        let bytes = fs::read(path).map_err(|source| LctError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = parse_strings_bytes(&path.to_string_lossy(), &bytes)?;
        debug!(path = %path.display(), keys = table.len(), "parsed table");
        Ok(table)
    }

    pub fn items(&self) -> &[TableItem] {
        &self.items
    }

    /// Entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.items.iter().filter_map(|item| match item {
            TableItem::Entry(entry) => Some(entry),
            TableItem::Trivia(_) => None,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|e| e.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&ResourceEntry> {
        match self.index.get(key).map(|&i| &self.items[i]) {
            Some(TableItem::Entry(entry)) => Some(entry),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Serialize back to text. Reproduces the parsed bytes exactly.
    pub fn render(&self) -> String {
        self.render_without(&HashSet::new())
    }

    /// Serialize, dropping the entries (and their leading comments) whose key
    /// is in `removed`. Trivia is always kept in place.
    pub fn render_without(&self, removed: &HashSet<&str>) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                TableItem::Entry(entry) => {
                    if !removed.contains(entry.key.as_str()) {
                        entry.write_to(&mut out);
                    }
                }
                TableItem::Trivia(text) => out.push_str(text),
            }
        }
        out
    }
}
