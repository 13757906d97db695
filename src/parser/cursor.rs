//! Forward-only scan position over the input.

use regex::{Captures, Regex};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, ParseError};

/// A regex that only ever matches at the start of the text it is given.
///
/// Applied to [`Cursor::remainder`], this makes every match start exactly at
/// the cursor position. Nothing later in the input is ever searched.
#[derive(Debug)]
pub(crate) struct Pattern(Regex);

impl Pattern {
    /// Compile `source` wrapped as `^(?:source)`.
    ///
    /// Only used for the grammar's fixed patterns, which are known to be valid.
    pub(crate) fn new(source: &str) -> Self {
        Self(Regex::new(&format!("^(?:{})", source)).unwrap())
    }
}

pub(crate) struct Cursor<'src, 'sink> {
    text: &'src str,
    /// Byte offset, always on a char boundary and never past `text.len()`.
    position: usize,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'sink> Cursor<'src, 'sink> {
    pub(crate) fn new(text: &'src str, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Self {
            text,
            position: 0,
            sink,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position == self.text.len()
    }

    pub(crate) fn remainder(&self) -> &'src str {
        &self.text[self.position..]
    }

    /// Match `pattern` at the current position. On a match the cursor moves
    /// past the matched text; otherwise it stays where it was.
    pub(crate) fn try_match(&mut self, pattern: &Pattern) -> Option<Captures<'src>> {
        let captures = pattern.0.captures(self.remainder())?;
        let matched = captures.get(0)?;
        if matched.start() != 0 {
            return None;
        }
        self.position += matched.end();
        Some(captures)
    }

    /// [`Self::try_match`] for patterns that only consume filler.
    pub(crate) fn skip(&mut self, pattern: &Pattern) {
        let _ = self.try_match(pattern);
    }

    /// Consume one character already confirmed with [`Self::peek`].
    pub(crate) fn advance_one(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    /// Consume and return everything left.
    pub(crate) fn take_rest(&mut self) -> &'src str {
        let rest = self.remainder();
        self.position = self.text.len();
        rest
    }

    pub(crate) fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let remainder = (!self.at_end()).then(|| self.remainder().to_string());
        self.sink.report(Diagnostic {
            kind,
            offset: self.position(),
            message: message.into(),
            remainder,
        });
    }

    /// Report a diagnostic and build the matching error.
    pub(crate) fn fail(&mut self, kind: DiagnosticKind, message: impl Into<String>) -> ParseError {
        self.report(kind, message);
        ParseError {
            kind,
            offset: self.position(),
        }
    }
}
