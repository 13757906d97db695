use std::sync::LazyLock;

use super::cursor::Pattern;
use super::expression::EXPECTED_TERMINATOR;
use super::{ParseResult, Parser};
use crate::ast::{ParamMap, Value};
use crate::diagnostics::DiagnosticKind;
use crate::trace::Rule;

// Spacing between parameters: ASCII whitespace, Unicode space separators,
// line/paragraph separators and U+FEFF. U+0085 is not spacing here.
const SPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static WHITESPACE: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(&format!("{}*", SPACE)));

// Capture group 1: parameter name. The colon and surrounding spaces are consumed too.
static PARAM_KEY: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(&format!(r"([A-Za-z0-9_]+){0}*:{0}*", SPACE)));

// Separator after a value. Both parts are optional.
static PARAM_TAIL: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(&format!("{}*,?", SPACE)));

impl Parser<'_, '_> {
    /// Parse parameters up to, but not including, the closing `}`.
    ///
    /// Two quirks are kept on purpose:
    /// - a repeated name silently overwrites the earlier value
    ///   (see [`ParamMap::insert`]);
    /// - commas are optional, so `{a: "1" b: "2"}` is two parameters.
    pub(super) fn param_block(&mut self, depth: usize) -> ParseResult<ParamMap> {
        self.trace
            .enter(depth, Rule::ParamBlock, self.cursor.remainder());

        let mut params = ParamMap::new();
        loop {
            self.cursor.skip(&WHITESPACE);

            if self.cursor.at_end() {
                return Err(self
                    .cursor
                    .fail(DiagnosticKind::MissingTerminator, EXPECTED_TERMINATOR));
            }
            if self.cursor.peek() == Some('}') {
                return Ok(params);
            }

            let (name, value) = self.param(depth + 1)?;
            params.insert(name, value);
        }
    }

    fn param(&mut self, depth: usize) -> ParseResult<(String, Value)> {
        self.trace.enter(depth, Rule::Param, self.cursor.remainder());

        let Some(captures) = self.cursor.try_match(&PARAM_KEY) else {
            return Err(self
                .cursor
                .fail(DiagnosticKind::MalformedKey, "Expected param key"));
        };
        let name = captures[1].to_string();

        let value = self.value(depth + 1)?;
        self.cursor.skip(&PARAM_TAIL);

        Ok((name, value))
    }
}
