use crate::ast::Node;
use crate::cli::exit_status::ExitStatus;
use crate::config::OutputFormat;
use crate::diagnostics::{Diagnostic, DiagnosticKind, ParseError};
use crate::trace::TraceEvent;

/// Everything produced by parsing one input.
#[derive(Debug)]
pub struct ParseOutcome {
    pub input: String,
    pub result: Result<Node, ParseError>,
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Empty unless tracing was enabled.
    pub trace: Vec<TraceEvent>,
}

impl ParseOutcome {
    pub fn has_trailing_input(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::TrailingInput)
    }
}

#[derive(Debug)]
pub struct ParseSummary {
    pub outcomes: Vec<ParseOutcome>,
    pub format: OutputFormat,
    pub deny_trailing: bool,
    pub verbose: bool,
}

impl ParseSummary {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn trailing_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok() && o.has_trailing_input())
            .count()
    }

    /// Inputs that count against the exit status.
    pub fn rejected_count(&self) -> usize {
        if self.deny_trailing {
            self.failed_count() + self.trailing_count()
        } else {
            self.failed_count()
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandResult {
    Parse(ParseSummary),
    Init(InitSummary),
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Parse(summary) => ExitStatus::from_failures(summary.rejected_count()),
            Self::Init(summary) if summary.created => ExitStatus::Success,
            Self::Init(_) => ExitStatus::Failure,
        }
    }
}
