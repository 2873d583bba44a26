use super::{commands::CommandResult, exit_status::ExitStatus};

/// Tables that failed to load make the run an error; found issues only fail
/// commands that opted into it.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.load_error_count > 0 {
        ExitStatus::Error
    } else if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
