//! i18n-expr - parser for translation-key expressions embedded in text
//!
//! An expression names a translation key with the `i18n:` marker and may
//! carry named parameters:
//!
//! ```text
//! i18n:cart.summary{count: "3", owner: i18n:user.name}
//! ```
//!
//! Anything that does not start with the marker is passed through as a
//! literal. Resolving keys into localized text is left to the caller.
//!
//! ## Module Structure
//!
//! - `ast`: Parse tree types
//! - `parser`: The recursive-descent parser and its entry points
//! - `diagnostics`: Position-tagged diagnostics and the parse error type
//! - `trace`: Optional debug tracing of grammar rules
//! - `config`: Configuration file loading for the CLI
//! - `cli`: Command-line interface

pub mod ast;
pub mod cli;
pub mod config;
pub mod diagnostics;
mod parser;
pub mod trace;

pub use ast::{Node, ParamMap, TranslateCall, Value};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, ParseError};
pub use parser::{MAX_NESTING_DEPTH, parse, parse_with};
pub use trace::{Rule, Trace, TraceEvent};
