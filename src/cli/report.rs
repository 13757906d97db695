//! Report formatting and printing.
//!
//! Parse results go to stdout. Diagnostics, trace output and the summary go
//! to stderr, so `--format json` output stays machine-readable.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, InitSummary, ParseOutcome, ParseSummary};
use crate::ast::Node;
use crate::config::{CONFIG_FILE_NAME, OutputFormat};
use crate::diagnostics::Diagnostic;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Printed in place of a tree when an input fails to parse.
pub const FAILED: &str = "FAILED";

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    match result {
        CommandResult::Parse(summary) => print_parse(summary, out, err),
        CommandResult::Init(summary) => print_init(summary, out, err),
    }
}

fn print_parse<O: Write, E: Write>(summary: &ParseSummary, out: &mut O, err: &mut E) {
    for (index, outcome) in summary.outcomes.iter().enumerate() {
        for event in &outcome.trace {
            let _ = writeln!(err, "{}", event.to_string().dimmed());
        }
        for diagnostic in &outcome.diagnostics {
            print_diagnostic(index + 1, &outcome.input, diagnostic, summary.verbose, err);
        }
        if summary.format == OutputFormat::Text {
            print_text_result(outcome, out);
        }
    }

    if summary.format == OutputFormat::Json {
        print_json_results(&summary.outcomes, out);
    }

    print_summary(summary, err);
}

fn print_text_result<W: Write>(outcome: &ParseOutcome, writer: &mut W) {
    let tree = match &outcome.result {
        Ok(node) => node.to_string(),
        Err(_) => FAILED.to_string(),
    };
    let _ = writeln!(writer, "\"{}\" ==> {}", outcome.input, tree);
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    diagnostics: &'a [Diagnostic],
}

fn print_json_results<W: Write>(outcomes: &[ParseOutcome], writer: &mut W) {
    let entries: Vec<JsonOutcome<'_>> = outcomes
        .iter()
        .map(|outcome| JsonOutcome {
            input: &outcome.input,
            result: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(ToString::to_string),
            diagnostics: &outcome.diagnostics,
        })
        .collect();

    if serde_json::to_writer_pretty(&mut *writer, &entries).is_ok() {
        let _ = writeln!(writer);
    }
}

/// Print one diagnostic cargo-style, with a caret under the offending offset.
fn print_diagnostic<W: Write>(
    input_number: usize,
    input: &str,
    diagnostic: &Diagnostic,
    verbose: bool,
    writer: &mut W,
) {
    let is_error = diagnostic.kind.is_fatal();
    let severity = if is_error {
        "error".bold().red()
    } else {
        "warning".bold().yellow()
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        diagnostic.message,
        diagnostic.kind.to_string().dimmed().cyan()
    );

    let location = locate(input, diagnostic.offset);
    let _ = writeln!(
        writer,
        "  {} <input {}>:{}:{}",
        "-->".blue(),
        input_number,
        location.line,
        location.col
    );

    let width = location.line.to_string().len();
    let caret = if is_error { "^".red() } else { "^".yellow() };
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        location.line.to_string().blue(),
        "|".blue(),
        location.source_line,
        width = width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret,
        width = width,
        padding = location.caret_padding
    );

    if verbose {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} Current location is: '{}'",
            "",
            "=".blue(),
            "note:".bold(),
            diagnostic.remainder_or_eof(),
            width = width
        );
    }

    let _ = writeln!(writer);
}

struct Location<'a> {
    /// 1-based line number.
    line: usize,
    /// 1-based column, in chars.
    col: usize,
    source_line: &'a str,
    /// Display width of the text before the offset on its line.
    caret_padding: usize,
}

fn locate(input: &str, offset: usize) -> Location<'_> {
    let offset = offset.min(input.len());
    let before = &input[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = input[offset..]
        .find('\n')
        .map_or(input.len(), |i| offset + i);
    let prefix = &input[line_start..offset];

    Location {
        line: before.matches('\n').count() + 1,
        col: prefix.chars().count() + 1,
        source_line: &input[line_start..line_end],
        caret_padding: UnicodeWidthStr::width(prefix),
    }
}

fn print_summary<W: Write>(summary: &ParseSummary, writer: &mut W) {
    let total = summary.outcomes.len();
    let failed = summary.failed_count();
    let trailing = summary.trailing_count();
    let inputs = |n: usize| if n == 1 { "input" } else { "inputs" };

    if trailing > 0 {
        let label = if summary.deny_trailing {
            "error:".bold().red()
        } else {
            "warning:".bold().yellow()
        };
        let _ = writeln!(
            writer,
            "{} {} {} left trailing text after a valid expression",
            label,
            trailing,
            inputs(trailing)
        );
    }

    if summary.rejected_count() == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Parsed {} {}", total, inputs(total)).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} {} rejected ({} failed to parse)",
                summary.rejected_count(),
                total,
                inputs(total),
                failed
            )
            .red()
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
