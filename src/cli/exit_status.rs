use std::process::ExitCode;

/// Process exit status of an `lct` run.
///
/// - `Success` (0): nothing blocking was found. Warnings (extra keys without
///   `failOnExtra`, symbol collisions) and unused keys reported by `clean` do
///   not change the status.
/// - `Failure` (1): `check` found missing keys, or extra keys with `failOnExtra`.
/// - `Error` (2): a table or source path could not be read or parsed, or the
///   run itself failed (config, backup, write).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Consistency errors in a command that fails on them.
    Failure,
    /// Load or I/O failure; results may be incomplete.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
