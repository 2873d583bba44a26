//! Issue types for localization consistency results.
//!
//! Each issue is self-contained with everything the reporter needs to display
//! it: location, message, severity, rule and optional note/hint.

use enum_dispatch::enum_dispatch;

use crate::core::{CollisionKind, EntryContext, EntryLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ExtraKey,
    UnusedKey,
    SymbolCollision,
    ParseError,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ExtraKey => write!(f, "extra-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::SymbolCollision => write!(f, "symbol-collision"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types - Table Entries (EntryContext)
// ============================================================

/// Key defined in the baseline but absent from a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    /// The baseline entry.
    pub context: EntryContext,
    /// Path of the target the key is missing from.
    pub target: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key defined in a target but absent from the baseline.
///
/// A warning by default; an error when the check is configured to fail on
/// extra keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraKeyIssue {
    /// The target entry.
    pub context: EntryContext,
    /// Path of the baseline.
    pub baseline: String,
    pub severity: Severity,
}

impl ExtraKeyIssue {
    pub fn rule() -> Rule {
        Rule::ExtraKey
    }
}

/// Key whose symbol tail never appears in the scanned sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub context: EntryContext,
    /// Tail identifier that was searched for.
    pub tail: String,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// Keys of one table that map to the same tail or symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCollisionIssue {
    /// Location of the first colliding key.
    pub location: EntryLocation,
    pub kind: CollisionKind,
    pub symbol: String,
    pub keys: Vec<String>,
}

impl SymbolCollisionIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SymbolCollision
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Table could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: usize,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// A table or a source path could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A localization issue found during a check or cleanup.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    ExtraKey(ExtraKeyIssue),
    UnusedKey(UnusedKeyIssue),
    SymbolCollision(SymbolCollisionIssue),
    ParseError(ParseErrorIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A line in a table file.
    Entry(&'a EntryLocation),
    /// File-level only, with an optional line.
    File { path: &'a str, line: usize },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Entry(loc) => &loc.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Entry(loc) => loc.line,
            ReportLocation::File { line, .. } => *line,
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, symbol, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Whether `message()` is a key and should be shown quoted.
    fn quoted(&self) -> bool {
        true
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context.location)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in {}", self.target))
    }
}

impl Report for ExtraKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context.location)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("not in baseline {}", self.baseline))
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context.location)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\") no usage of `{}`", self.context.value, self.tail))
    }
}

impl Report for SymbolCollisionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.location)
    }

    fn message(&self) -> String {
        self.symbol.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let keys: Vec<String> = self.keys.iter().map(|k| format!("\"{}\"", k)).collect();
        let what = match self.kind {
            CollisionKind::Tail => "share the tail",
            CollisionKind::Symbol => "generate the same symbol",
        };
        Some(format!("{} {} `{}`", keys.join(", "), what, self.symbol))
    }

    fn hint(&self) -> Option<String> {
        match self.kind {
            CollisionKind::Tail => Some(
                "usage of any of these keys marks all of them as used; rename one to tell them apart"
                    .to_string(),
            ),
            CollisionKind::Symbol => {
                Some("generated code cannot hold both keys; rename one of them".to_string())
            }
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn quoted(&self) -> bool {
        false
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: 0,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn quoted(&self) -> bool {
        false
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let a = self.location();
        let b = other.location();
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
            .then_with(|| self.details().cmp(&other.details()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
