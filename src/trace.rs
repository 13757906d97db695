//! Debug tracing of grammar rule entry.
//!
//! The parser calls [`Trace::enter`] whenever it enters a traced rule. Pass
//! `&mut ()` to disable tracing, or a `Vec<TraceEvent>` to record events.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Expression,
    ParamBlock,
    Param,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Expression => "expression",
            Self::ParamBlock => "params",
            Self::Param => "param",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    /// Nesting depth of grammar rules; the top-level expression is 0.
    pub depth: usize,
    pub rule: Rule,
    /// Unconsumed input when the rule was entered.
    pub remainder: String,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Parsing {} 【{}】",
            "  ".repeat(self.depth),
            self.rule,
            self.remainder
        )
    }
}

pub trait Trace {
    fn enter(&mut self, depth: usize, rule: Rule, remainder: &str);
}

impl Trace for () {
    fn enter(&mut self, _depth: usize, _rule: Rule, _remainder: &str) {}
}

impl Trace for Vec<TraceEvent> {
    fn enter(&mut self, depth: usize, rule: Rule, remainder: &str) {
        self.push(TraceEvent {
            depth,
            rule,
            remainder: remainder.to_string(),
        });
    }
}
