use std::sync::LazyLock;

use super::cursor::Pattern;
use super::expression::EXPECTED_TERMINATOR;
use super::{ParseResult, Parser};
use crate::ast::{Node, Value};
use crate::diagnostics::DiagnosticKind;

// A double-quoted string; a backslash escapes any single character.
static STRING_LITERAL: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r#""[^"\\]*(?:\\(?s:.)[^"\\]*)*""#));

impl Parser<'_, '_> {
    pub(super) fn value(&mut self, depth: usize) -> ParseResult<Value> {
        if self.cursor.peek() == Some('"') {
            return self.string_literal();
        }

        match self.expression(depth)? {
            Node::Translate(call) => Ok(Value::Nested(call)),
            // An unquoted value without the marker falls back to a literal,
            // which swallows the rest of the input including the closing
            // brace. The enclosing block can then never be closed, so this
            // reports the same missing terminator the block would at end
            // of input.
            Node::Literal(_) => Err(self
                .cursor
                .fail(DiagnosticKind::MissingTerminator, EXPECTED_TERMINATOR)),
        }
    }

    /// The value keeps its quotes and escapes exactly as written.
    fn string_literal(&mut self) -> ParseResult<Value> {
        match self.cursor.try_match(&STRING_LITERAL) {
            Some(captures) => Ok(Value::String(captures[0].to_string())),
            None => {
                let message = format!(
                    "Expect the string from '{}' starts a double-quoted string",
                    self.cursor.remainder()
                );
                Err(self
                    .cursor
                    .fail(DiagnosticKind::MalformedStringLiteral, message))
            }
        }
    }
}
