use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use anyhow::{Context, Result};
use rayon::{ThreadPoolBuilder, prelude::*};

use super::{ParseOutcome, ParseSummary};
use crate::cli::args::ParseArgs;
use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::parse_with;
use crate::trace::TraceEvent;

/// Stack for each parse worker, enough for the deepest nesting the parser
/// accepts.
const PARSE_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Run the `parse` command. Flags take precedence over `config`.
pub fn parse(args: ParseArgs, config: &Config) -> Result<ParseSummary> {
    let format = args.format.unwrap_or(config.format);
    let trace = args.trace || config.trace;
    let deny_trailing = args.deny_trailing || config.deny_trailing;

    let inputs = collect_inputs(args.inputs, args.file.as_deref())?;

    // Each input gets its own parse and its own diagnostics, so the
    // report can print them in input order afterwards.
    let pool = ThreadPoolBuilder::new()
        .stack_size(PARSE_STACK_SIZE)
        .build()
        .context("Failed to start parse workers")?;
    let outcomes = pool.install(|| {
        inputs
            .into_par_iter()
            .map(|input| parse_one(input, trace))
            .collect()
    });

    Ok(ParseSummary {
        outcomes,
        format,
        deny_trailing,
        verbose: args.verbose,
    })
}

pub fn parse_one(input: String, trace: bool) -> ParseOutcome {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut events: Vec<TraceEvent> = Vec::new();
    let result = if trace {
        parse_with(&input, &mut diagnostics, &mut events)
    } else {
        parse_with(&input, &mut diagnostics, &mut ())
    };

    ParseOutcome {
        input,
        result,
        diagnostics,
        trace: events,
    }
}

fn collect_inputs(mut inputs: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path))?;
        inputs.extend(non_blank_lines(content.lines().map(str::to_string)));
    } else if inputs.is_empty() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read from stdin")?;
        inputs.extend(non_blank_lines(lines));
    }
    Ok(inputs)
}

fn non_blank_lines(lines: impl IntoIterator<Item = String>) -> impl Iterator<Item = String> {
    lines.into_iter().filter(|line| !line.trim().is_empty())
}
