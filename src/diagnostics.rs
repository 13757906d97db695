//! Diagnostics emitted while parsing.
//!
//! Diagnostics travel on a side channel (a [`DiagnosticSink`]) and are purely
//! advisory: whether a parse succeeded is decided by the return value of
//! [`crate::parse_with`] alone.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Shown in place of the unconsumed input when the cursor is at the end.
pub const END_OF_FILE: &str = "<end-of-file>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A parameter block was opened but never closed with `}`.
    MissingTerminator,
    /// A parameter name is missing or is not an identifier.
    MalformedKey,
    /// A value starting with `"` is not a complete string literal.
    MalformedStringLiteral,
    /// Parameter blocks nested deeper than the parser allows.
    NestingTooDeep,
    /// The top-level expression did not consume the whole input.
    /// Reported, but the parse still succeeds.
    TrailingInput,
}

impl DiagnosticKind {
    pub fn is_fatal(self) -> bool {
        !matches!(self, Self::TrailingInput)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingTerminator => "missing-terminator",
            Self::MalformedKey => "malformed-key",
            Self::MalformedStringLiteral => "malformed-string-literal",
            Self::NestingTooDeep => "nesting-too-deep",
            Self::TrailingInput => "trailing-input",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message tied to a byte offset in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset where the problem was detected.
    pub offset: usize,
    pub message: String,
    /// Unconsumed input at `offset`, `None` at end of input.
    pub remainder: Option<String>,
}

impl Diagnostic {
    pub fn remainder_or_eof(&self) -> &str {
        self.remainder.as_deref().unwrap_or(END_OF_FILE)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[0:{}]: {}", self.offset, self.message)?;
        write!(f, "Current location is: '{}'", self.remainder_or_eof())
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects every diagnostic in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Discards diagnostics.
impl DiagnosticSink for () {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// A failed parse. The matching [`Diagnostic`] has already been sent to the
/// sink by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: DiagnosticKind,
    pub offset: usize,
}
