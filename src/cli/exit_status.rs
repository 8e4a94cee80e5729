use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// command line tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command ran but the operation failed (failed or timed-out generation)
/// - `Error` (2): Command failed due to an error (missing API key, unreachable API, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command ran but the operation failed (failed or timed-out generation).
    Failure,
    /// Command failed due to an error (missing API key, unreachable API, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
