//! Conversion pipeline from captured pylint output to a SARIF log.
//!
//! `run` feeds this from live pylint invocations, `convert` from files
//! captured earlier; both go through [`convert`].

use crate::error::Result;
use crate::exit_code::PylintExit;
use crate::models::sarif::SarifLog;
use crate::output::{assemble_log, build_invocation};
use crate::results::parse_diagnostics;
use crate::rules::parse_rule_listing;
use std::path::Path;

/// Settings that shape the emitted document.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub tool_name: String,
    pub help_uri_base: String,
    pub allow_unknown_rules: bool,
}

/// Everything captured from one pylint run.
#[derive(Debug, Clone)]
pub struct Captured<'a> {
    /// stdout of `pylint --list-msgs`.
    pub rule_listing: &'a str,
    /// stdout of `pylint -f json -r n ...`.
    pub diagnostics: &'a str,
    /// The JSON-reporter command line, program first.
    pub command: &'a [String],
    pub exit: PylintExit,
    pub cwd: &'a Path,
    pub machine: &'a str,
}

/// Build the catalog, the results and the invocation, and assemble the log.
pub fn convert(captured: &Captured<'_>, opts: &ConvertOptions) -> Result<SarifLog> {
    let rules = parse_rule_listing(captured.rule_listing, &opts.help_uri_base)?;
    let results = parse_diagnostics(captured.diagnostics, captured.cwd)?;
    let invocation = build_invocation(
        captured.command,
        captured.exit,
        captured.cwd,
        captured.machine,
    );
    assemble_log(
        &opts.tool_name,
        &rules,
        results,
        invocation,
        opts.allow_unknown_rules,
    )
}
