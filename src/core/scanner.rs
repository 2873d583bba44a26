//! Usage scanner: which keys of a table are referenced by a source tree.
//!
//! Matching is lexical. Each source file is split into identifier tokens
//! (`[A-Za-z0-9_]+` runs) and a key counts as used when its symbol tail equals
//! one of those tokens, so `name` is found in `L10n.Market.name` but not in
//! `username` or `rename`.
//!
//! Only the tail is compared. Two keys whose tails coincide (`market.name` and
//! `trade.name`) cannot be told apart: if `name` appears anywhere, both are
//! considered used. Callers should surface [`find_collisions`] results so users
//! know where this applies.
//!
//! [`find_collisions`]: super::symbol::find_collisions

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use glob::Pattern;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::symbol::symbol_tail;
use super::table::ResourceTable;

static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

static STRING_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\\n]|\\.)*)""#).unwrap());

/// Where to look and what to skip.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions to visit, without the leading dot.
    pub extensions: Vec<String>,
    /// Directory names skipped wherever they appear below the root.
    pub exclude_dirs: Vec<String>,
    /// Glob patterns matched against paths relative to the root.
    pub ignores: Vec<Pattern>,
    /// Also count a key as used when it appears as a `"key"` string literal.
    pub match_literals: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: ["swift", "m", "mm", "h"].map(String::from).to_vec(),
            exclude_dirs: ["Pods", "build", "DerivedData", ".git", "Carthage", ".build"]
                .map(String::from)
                .to_vec(),
            ignores: Vec::new(),
            match_literals: true,
        }
    }
}

/// How a used key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UsageKind {
    /// Through its generated symbol tail.
    Symbol,
    /// As a quoted string literal, e.g. `NSLocalizedString("key", ...)`.
    Literal,
}

/// Occurrence counts gathered during one scan. Discarded afterwards.
#[derive(Debug, Default)]
pub struct UsageIndex {
    /// Tail identifier -> number of occurrences.
    pub symbols: HashMap<String, usize>,
    /// Keys seen as string literals.
    pub literals: HashSet<String>,
}

impl UsageIndex {
    fn merge(mut self, other: UsageIndex) -> UsageIndex {
        for (tail, count) in other.symbols {
            *self.symbols.entry(tail).or_default() += count;
        }
        self.literals.extend(other.literals);
        self
    }

    pub fn symbol_count(&self, tail: &str) -> usize {
        self.symbols.get(tail).copied().unwrap_or(0)
    }
}

/// Result of scanning a source tree against a table.
#[derive(Debug, Default)]
pub struct UsageReport {
    /// Keys never referenced, sorted by key.
    pub unused: Vec<String>,
    /// Referenced keys with how they were found, in table order.
    pub used: Vec<(String, UsageKind)>,
    pub files_scanned: usize,
    /// Files or directories that could not be read.
    pub skipped: Vec<PathBuf>,
}

impl UsageReport {
    pub fn total(&self) -> usize {
        self.used.len() + self.unused.len()
    }

    pub fn used_by(&self, kind: UsageKind) -> usize {
        self.used.iter().filter(|(_, k)| *k == kind).count()
    }

    /// Share of keys in use, as a percentage. 100 for an empty table.
    pub fn usage_rate(&self) -> f64 {
        if self.total() == 0 {
            100.0
        } else {
            self.used.len() as f64 * 100.0 / self.total() as f64
        }
    }
}

/// Find the keys of `table` that no file under `source_root` references.
pub fn find_unused(table: &ResourceTable, source_root: &Path, options: &ScanOptions) -> UsageReport {
    let tails: HashSet<String> = table.keys().map(symbol_tail).collect();
    let keys: HashSet<&str> = table.keys().collect();

    let (files, mut skipped) = collect_source_files(source_root, options);
    debug!(
        root = %source_root.display(),
        files = files.len(),
        tails = tails.len(),
        "scanning source tree"
    );

    let results: Vec<Result<UsageIndex, PathBuf>> = files
        .par_iter()
        .map(|path| match fs::read(path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                Ok(scan_text(&text, &tails, &keys, options.match_literals))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read source file");
                Err(path.clone())
            }
        })
        .collect();

    let mut index = UsageIndex::default();
    let mut files_scanned = 0;
    for result in results {
        match result {
            Ok(file_index) => {
                index = index.merge(file_index);
                files_scanned += 1;
            }
            Err(path) => skipped.push(path),
        }
    }

    let mut report = classify(table, &index);
    report.files_scanned = files_scanned;
    skipped.sort();
    report.skipped = skipped;
    report
}

/// Split a table into used and unused keys according to `index`.
pub fn classify(table: &ResourceTable, index: &UsageIndex) -> UsageReport {
    let mut report = UsageReport::default();
    for key in table.keys() {
        if index.symbol_count(&symbol_tail(key)) > 0 {
            report.used.push((key.to_string(), UsageKind::Symbol));
        } else if index.literals.contains(key) {
            report.used.push((key.to_string(), UsageKind::Literal));
        } else {
            report.unused.push(key.to_string());
        }
    }
    report.unused.sort();
    report
}

/// Count tail tokens and key literals in one file's text.
pub fn scan_text(
    text: &str,
    tails: &HashSet<String>,
    keys: &HashSet<&str>,
    match_literals: bool,
) -> UsageIndex {
    let mut index = UsageIndex::default();
    for token in IDENT_RE.find_iter(text) {
        let token = token.as_str();
        if tails.contains(token) {
            *index.symbols.entry(token.to_string()).or_default() += 1;
        }
    }
    if match_literals {
        for caps in STRING_LITERAL_RE.captures_iter(text) {
            let literal = &caps[1];
            if keys.contains(literal) {
                index.literals.insert(literal.to_string());
            }
        }
    }
    index
}

/// Walk `root` collecting files with an allowed extension. Symlinks are
/// followed; a link loop or a dangling link lands in the second list along
/// with every other path that could not be visited.
pub fn collect_source_files(root: &Path, options: &ScanOptions) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, &options.exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "cannot access path");
                if let Some(path) = e.path() {
                    skipped.push(path.to_path_buf());
                }
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, &options.extensions) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if options.ignores.iter().any(|p| p.matches_path(relative)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    (files, skipped)
}

fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|d| d == name))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
