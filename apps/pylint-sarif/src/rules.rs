//! Rule catalog built from `pylint --list-msgs`.
//!
//! The listing is a sequence of header lines followed by free-form
//! description lines:
//!
//! ```text
//! :bad-whitespace (C0326): *%s space %s %s %s*
//!   Used when a wrong number of spaces is used around an operator,
//!   bracket or block opener.
//! ```
//!
//! A rule is only complete once the next header (or the end of the
//! stream) is reached, so parsing is a two-state machine: `Idle` until
//! the first header, then `Accumulating` a pending rule.

use crate::error::{Error, Result};
use crate::message::clean_sentence;
use crate::models::{Level, RuleDescriptor, Significance};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_HELP_URI_BASE: &str = "http://pylint-messages.wikidot.com/messages:";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:([^(]*) \(([^)]+)\):( \*([^*]+)\*)?$").expect("valid rule header regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRule {
    id: String,
    name: String,
    short_description: Option<String>,
    description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogState {
    Idle,
    Accumulating(PendingRule),
}

/// Incremental catalog builder; feed lines with [`push_line`], then
/// call [`finish`].
///
/// [`push_line`]: CatalogBuilder::push_line
/// [`finish`]: CatalogBuilder::finish
pub struct CatalogBuilder {
    help_uri_base: String,
    state: CatalogState,
    rules: Vec<RuleDescriptor>,
    positions: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new(help_uri_base: &str) -> Self {
        Self {
            help_uri_base: help_uri_base.to_string(),
            state: CatalogState::Idle,
            rules: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Classify one line and advance the state machine.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim_end();
        let state = std::mem::replace(&mut self.state, CatalogState::Idle);
        self.state = match (state, parse_header(line)) {
            (CatalogState::Accumulating(done), Some(next)) => {
                self.finalize(done);
                CatalogState::Accumulating(next)
            }
            (CatalogState::Idle, Some(next)) => CatalogState::Accumulating(next),
            (CatalogState::Accumulating(mut pending), None) => {
                let piece = line.trim();
                if !piece.is_empty() {
                    if !pending.description.is_empty() {
                        pending.description.push(' ');
                    }
                    pending.description.push_str(piece);
                }
                CatalogState::Accumulating(pending)
            }
            (CatalogState::Idle, None) => {
                if !line.trim().is_empty() {
                    log::debug!("ignoring line before first rule header: {:?}", line);
                }
                CatalogState::Idle
            }
        };
    }

    /// Finalize the pending rule and return the catalog in first-seen order.
    pub fn finish(mut self) -> Result<Vec<RuleDescriptor>> {
        match std::mem::replace(&mut self.state, CatalogState::Idle) {
            CatalogState::Accumulating(pending) => self.finalize(pending),
            CatalogState::Idle => return Err(Error::NoRuleHeader),
        }
        Ok(self.rules)
    }

    fn finalize(&mut self, pending: PendingRule) {
        let description = if pending.description.is_empty() {
            pending.short_description.clone().unwrap_or_default()
        } else {
            pending.description
        };
        let rule = RuleDescriptor {
            level: Level::from_rule_id(&pending.id),
            significance: Significance::from_rule_id(&pending.id),
            help_uri: format!("{}{}", self.help_uri_base, pending.id),
            full_description: clean_sentence(&description),
            short_description: pending.short_description,
            name: pending.name,
            id: pending.id,
        };
        // A repeated id keeps its first position but takes the latest content.
        match self.positions.get(&rule.id) {
            Some(&idx) => {
                log::debug!("rule {} listed more than once; keeping last", rule.id);
                self.rules[idx] = rule;
            }
            None => {
                self.positions.insert(rule.id.clone(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }
}

fn parse_header(line: &str) -> Option<PendingRule> {
    let caps = HEADER_RE.captures(line)?;
    Some(PendingRule {
        name: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
        id: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
        short_description: caps.get(4).map(|m| m.as_str().to_string()),
        description: String::new(),
    })
}

/// Build the rule catalog from the full text of a `--list-msgs` run.
pub fn parse_rule_listing(text: &str, help_uri_base: &str) -> Result<Vec<RuleDescriptor>> {
    let mut builder = CatalogBuilder::new(help_uri_base);
    for line in text.lines() {
        builder.push_line(line);
    }
    let rules = builder.finish()?;
    log::info!("parsed {} rule descriptors", rules.len());
    Ok(rules)
}
