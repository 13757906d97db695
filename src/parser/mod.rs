//! Recursive-descent parser for i18n expressions.
//!
//! Grammar:
//!
//! ```text
//! Expression ::= "i18n:" KeyPath ("{" ParamBlock "}")? | AnyRemainingText
//! ParamBlock ::= Param*
//! Param      ::= Identifier ":" Value ","?
//! Value      ::= StringLiteral | Expression
//! ```
//!
//! All matching is anchored at the cursor. A marker that does not start
//! exactly at the current position is never recognized, so text such as
//! `"see i18n:a.b"` is a literal. The first error aborts the parse; there is
//! no recovery.

mod cursor;
mod expression;
mod params;
mod value;


use crate::ast::Node;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink, ParseError};
use crate::trace::Trace;

use cursor::Cursor;

type ParseResult<T> = Result<T, ParseError>;

/// Most parameter blocks that may be open at once. Deeper input fails with
/// [`DiagnosticKind::NestingTooDeep`] instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// State for one parse call. Not reused across inputs.
struct Parser<'src, 'a> {
    cursor: Cursor<'src, 'a>,
    trace: &'a mut dyn Trace,
    /// Parameter blocks currently open.
    nesting: usize,
}

impl<'src, 'a> Parser<'src, 'a> {
    fn new(input: &'src str, sink: &'a mut dyn DiagnosticSink, trace: &'a mut dyn Trace) -> Self {
        Self {
            cursor: Cursor::new(input, sink),
            trace,
            nesting: 0,
        }
    }
}

/// Parse `input`, discarding diagnostics.
///
/// # Example
///
/// ```
/// use i18n_expr::{Node, parse};
///
/// let node = parse("i18n:app.title").unwrap();
/// assert!(matches!(node, Node::Translate(call) if call.key == "app.title"));
///
/// assert_eq!(parse("plain text").unwrap(), Node::Literal("plain text".into()));
/// ```
pub fn parse(input: &str) -> Result<Node, ParseError> {
    parse_with(input, &mut (), &mut ())
}

/// Parse `input`, sending diagnostics to `sink` and rule entries to `trace`.
///
/// Input left over after a valid top-level expression (for example an extra
/// `}`) is reported as [`DiagnosticKind::TrailingInput`], but the tree for
/// the valid prefix is still returned as a success.
pub fn parse_with(
    input: &str,
    sink: &mut dyn DiagnosticSink,
    trace: &mut dyn Trace,
) -> Result<Node, ParseError> {
    let mut parser = Parser::new(input, sink, trace);
    let node = parser.expression(0)?;
    if !parser.cursor.at_end() {
        parser
            .cursor
            .report(DiagnosticKind::TrailingInput, "Trailing strings");
    }
    Ok(node)
}
