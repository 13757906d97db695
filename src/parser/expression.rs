use std::sync::LazyLock;

use super::cursor::Pattern;
use super::{MAX_NESTING_DEPTH, ParseResult, Parser};
use crate::ast::{Node, TranslateCall};
use crate::diagnostics::DiagnosticKind;
use crate::trace::Rule;

// Capture group 1: key path. Group 2: an opening brace, if present.
static TRANSLATE_OPEN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"i18n:([A-Za-z0-9_.]+)(\{)?"));

pub(super) const EXPECTED_TERMINATOR: &str = "Expected a terminal '}'";

impl Parser<'_, '_> {
    /// Parse a translation-key reference, or take the rest of the input as a
    /// literal when no marker starts at the cursor.
    pub(super) fn expression(&mut self, depth: usize) -> ParseResult<Node> {
        self.trace
            .enter(depth, Rule::Expression, self.cursor.remainder());

        let Some(captures) = self.cursor.try_match(&TRANSLATE_OPEN) else {
            let text = self.cursor.take_rest();
            return Ok(Node::Literal(text.to_string()));
        };

        let key = captures[1].to_string();
        if captures.get(2).is_none() {
            return Ok(Node::Translate(TranslateCall::new(key)));
        }

        if self.nesting == MAX_NESTING_DEPTH {
            let message = format!(
                "Parameter blocks nested deeper than {} levels",
                MAX_NESTING_DEPTH
            );
            return Err(self.cursor.fail(DiagnosticKind::NestingTooDeep, message));
        }
        self.nesting += 1;
        let params = self.param_block(depth + 1);
        self.nesting -= 1;
        let params = params?;

        // The block stops in front of `}` without consuming it.
        if self.cursor.peek() != Some('}') {
            return Err(self
                .cursor
                .fail(DiagnosticKind::MissingTerminator, EXPECTED_TERMINATOR));
        }
        self.cursor.advance_one();

        Ok(Node::Translate(TranslateCall::with_params(key, params)))
    }
}
