//! Error types for the localization core.
//!
//! Every failure the core can produce is an [`LctError`]. Parse failures carry
//! the file path and the 1-based line number of the offending line.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Why a line of a `.strings` table could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnterminatedKey,
    UnterminatedValue,
    /// A backslash with nothing after it.
    MalformedEscape,
    DuplicateKey {
        key: String,
        first_line: usize,
    },
    EmptyKey,
    ExpectedAssignment,
    ExpectedValue,
    ExpectedTerminator,
    UnexpectedContent(String),
    UnterminatedComment,
    InvalidUtf8,
    UnrecognizedLine,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnterminatedKey => write!(f, "unterminated quoted key"),
            ParseErrorKind::UnterminatedValue => write!(f, "unterminated quoted value"),
            ParseErrorKind::MalformedEscape => write!(f, "malformed escape sequence"),
            ParseErrorKind::DuplicateKey { key, first_line } => {
                write!(f, "duplicate key \"{}\" (first defined on line {})", key, first_line)
            }
            ParseErrorKind::EmptyKey => write!(f, "empty key"),
            ParseErrorKind::ExpectedAssignment => write!(f, "expected '=' after key"),
            ParseErrorKind::ExpectedValue => write!(f, "expected a quoted value after '='"),
            ParseErrorKind::ExpectedTerminator => write!(f, "expected ';' after value"),
            ParseErrorKind::UnexpectedContent(rest) => {
                write!(f, "unexpected content after ';': {}", rest)
            }
            ParseErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            ParseErrorKind::InvalidUtf8 => write!(f, "file is not valid UTF-8"),
            ParseErrorKind::UnrecognizedLine => {
                write!(f, "expected a comment or a \"key\" = \"value\"; line")
            }
        }
    }
}

/// A malformed table. The whole parse is aborted on the first bad line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}:{line}: {kind}")]
pub struct ParseError {
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(path: impl Into<String>, line: usize, kind: ParseErrorKind) -> Self {
        Self {
            path: path.into(),
            line,
            kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum LctError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The original file is guaranteed untouched when this is returned.
    #[error("could not write backup {}: {reason}", path.display())]
    BackupFailure { path: PathBuf, reason: String },

    #[error("{} changed on disk since it was parsed; re-run the command", path.display())]
    StaleTable { path: PathBuf },

    #[error("destructive prune requires explicit confirmation")]
    NotConfirmed,
}

pub type LctResult<T> = std::result::Result<T, LctError>;
