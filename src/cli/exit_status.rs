use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every input parsed
/// - `Failure` (1): at least one input failed to parse, or had trailing
///   input under `--deny-trailing`
/// - `Error` (2): the command itself failed (bad config, unreadable file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_failures(failed: usize) -> Self {
        if failed == 0 {
            Self::Success
        } else {
            Self::Failure
        }
    }
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
