use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, the key or text was found or written
/// - `Failure` (1): Command completed but the key was taken or nothing matched
/// - `Error` (2): Command failed (bad config, unreadable JSON, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Key already taken, or no translation matched.
    Failure,
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
