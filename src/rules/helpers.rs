use crate::{
    core::LctError,
    issues::{Issue, ParseErrorIssue, ReadErrorIssue},
};

/// Convert a per-file load failure into a reportable issue located at
/// `file_path`.
///
/// Only parse and read failures are per-file; anything else is returned
/// unchanged for the caller to propagate.
pub fn load_error_issue(file_path: &str, err: LctError) -> Result<Issue, LctError> {
    match err {
        LctError::Parse(e) => Ok(Issue::ParseError(ParseErrorIssue {
            file_path: file_path.to_string(),
            line: e.line,
            error: e.kind.to_string(),
        })),
        LctError::Read { source, .. } => Ok(Issue::ReadError(ReadErrorIssue {
            file_path: file_path.to_string(),
            error: source.to_string(),
        })),
        other => Err(other),
    }
}
