//! Ordered rewrite tables.
//!
//! Order is load-bearing at every level: passes run in a fixed sequence, and
//! within a pass each rule sees the output of the rules before it. Several
//! entries exist only to catch text produced by an earlier entry, and some
//! earlier entries deliberately shadow later, more specific ones.

pub mod defines;
pub mod enumerations;
pub mod inlines;
pub mod keyboard;
pub mod namespace;

use crate::rewrite::{noop, refactor, substitute, ArgumentScan, PatternRule};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Largest arity a call rule may declare; placeholders are single digits.
pub const MAX_ARITY: usize = 9;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("call rule '{name}' declares arity {arity}, at most {MAX_ARITY} is supported")]
    ArityTooLarge { name: String, arity: usize },

    #[error("rule in pass '{pass}' has an empty match text")]
    EmptyMatch { pass: &'static str },
}

/// One rewrite rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Exact text replacement, optionally capped to the first `limit` hits.
    Literal {
        from: String,
        to: String,
        limit: Option<usize>,
    },
    /// Rewrite `name(a1..aN)` calls of the given arity through a template.
    Call {
        name: String,
        template: String,
        arity: usize,
    },
    /// Delete whole `name(...);` statements.
    Erase { name: String },
    /// Regex rewrite.
    Pattern(PatternRule),
}

impl Rule {
    pub fn literal(from: &str, to: &str) -> Self {
        Rule::Literal {
            from: from.to_string(),
            to: to.to_string(),
            limit: None,
        }
    }

    pub fn literal_n(from: &str, to: &str, limit: usize) -> Self {
        Rule::Literal {
            from: from.to_string(),
            to: to.to_string(),
            limit: Some(limit),
        }
    }

    pub fn call(name: &str, template: &str, arity: usize) -> Self {
        Rule::Call {
            name: name.to_string(),
            template: template.to_string(),
            arity,
        }
    }

    pub fn erase(name: &str) -> Self {
        Rule::Erase {
            name: name.to_string(),
        }
    }

    pub fn apply(&self, text: &str, scan: ArgumentScan) -> String {
        match self {
            Rule::Literal { from, to, limit } => substitute(text, from, to, *limit),
            Rule::Call {
                name,
                template,
                arity,
            } => refactor(text, name, template, *arity, scan),
            Rule::Erase { name } => noop(text, name, scan),
            Rule::Pattern(rule) => rule.apply(text),
        }
    }

    fn validate(&self, pass: &'static str) -> Result<(), RuleError> {
        match self {
            Rule::Literal { from, .. } | Rule::Erase { name: from } if from.is_empty() => {
                Err(RuleError::EmptyMatch { pass })
            }
            Rule::Call { name, .. } if name.is_empty() => Err(RuleError::EmptyMatch { pass }),
            Rule::Call { name, arity, .. } if *arity > MAX_ARITY => Err(RuleError::ArityTooLarge {
                name: name.clone(),
                arity: *arity,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal {
                from,
                to,
                limit: None,
            } => write!(f, "literal  {from:?} -> {to:?}"),
            Rule::Literal {
                from,
                to,
                limit: Some(n),
            } => write!(f, "literal  {from:?} -> {to:?} (first {n})"),
            Rule::Call {
                name,
                template,
                arity,
            } => write!(f, "call     {name}/{arity} -> {template:?}"),
            Rule::Erase { name } => write!(f, "erase    {name}(...);"),
            Rule::Pattern(rule) => write!(f, "pattern  {} /{}/", rule.name, rule.regex.as_str()),
        }
    }
}

/// A named, ordered group of rules applied as one pipeline step.
#[derive(Debug, Clone)]
pub struct Pass {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl Pass {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    /// Run every rule in order over `text`.
    pub fn run(&self, text: &str, scan: ArgumentScan) -> String {
        let mut current = text.to_string();
        let mut changed = 0usize;
        for rule in &self.rules {
            let next = rule.apply(&current, scan);
            if next != current {
                changed += 1;
                current = next;
            }
        }
        debug!(pass = self.name, rules_fired = changed, "pass complete");
        current
    }
}

/// Options that parameterize the built-in tables.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    /// Identifiers the `Fl_` de-prefix rule must not touch.
    pub deprefix_exempt: Vec<String>,
}

/// The full ordered pipeline of passes.
#[derive(Debug, Clone)]
pub struct RuleSet {
    passes: Vec<Pass>,
}

impl RuleSet {
    /// Build from explicit passes, validating every rule.
    pub fn new(passes: Vec<Pass>) -> Result<Self, RuleError> {
        for pass in &passes {
            for rule in &pass.rules {
                rule.validate(pass.name)?;
            }
        }
        Ok(Self { passes })
    }

    /// The FLTK 1.x to FLTK 2 tables, in pipeline order.
    pub fn builtin(options: &RuleOptions) -> Result<Self, RuleError> {
        Self::new(vec![
            defines::pass(),
            inlines::pass(),
            keyboard::pass(),
            enumerations::pass(),
            namespace::pass(options)?,
        ])
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn rule_count(&self) -> usize {
        self.passes.iter().map(|p| p.rules.len()).sum()
    }

    /// Run all passes in order.
    pub fn apply(&self, text: &str, scan: ArgumentScan) -> String {
        self.passes
            .iter()
            .fold(text.to_string(), |acc, pass| pass.run(&acc, scan))
    }
}
