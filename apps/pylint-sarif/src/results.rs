//! SARIF results from pylint's JSON reporter output.

use crate::error::{Error, Result};
use crate::message::sanitize;
use crate::models::pylint::PylintMessage;
use crate::models::sarif::{
    ArtifactLocation, Location, Message, PhysicalLocation, Region, SarifResult,
};
use crate::uri::file_uri;
use std::path::Path;

/// Convert one pylint message into a SARIF result.
///
/// pylint columns are 0-based and are shifted to SARIF's 1-based
/// `startColumn`; lines are already 1-based. A column at `i64::MAX`
/// saturates here, [`parse_diagnostics`] rejects it before that.
pub fn build_result(msg: &PylintMessage, cwd: &Path) -> SarifResult {
    SarifResult {
        message: Message {
            text: sanitize(&msg.message),
        },
        rule_id: msg.message_id.clone(),
        locations: vec![Location {
            physical_location: PhysicalLocation {
                artifact_location: ArtifactLocation {
                    uri: file_uri(&msg.path, cwd),
                },
                region: Region {
                    start_line: msg.line,
                    start_column: msg.column.saturating_add(1),
                },
            },
        }],
    }
}

/// Parse the JSON array pylint printed and convert every record.
///
/// A malformed or out-of-range record fails the whole conversion; no
/// diagnostic is ever dropped silently.
pub fn parse_diagnostics(json: &str, cwd: &Path) -> Result<Vec<SarifResult>> {
    // pylint prints nothing at all when there are no files to report on
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let messages: Vec<PylintMessage> = serde_json::from_str(json)?;
    let mut out = Vec::with_capacity(messages.len());
    for (index, msg) in messages.iter().enumerate() {
        check_record(index, msg)?;
        out.push(build_result(msg, cwd));
    }
    log::info!("converted {} pylint messages", out.len());
    Ok(out)
}

fn check_record(index: usize, msg: &PylintMessage) -> Result<()> {
    let reason = if msg.line < 1 {
        format!("line {} is not 1-based", msg.line)
    } else if msg.column < 0 {
        format!("column {} is negative", msg.column)
    } else if msg.column.checked_add(1).is_none() {
        format!("column {} overflows a 1-based column", msg.column)
    } else if msg.message_id.is_empty() {
        "empty message-id".to_string()
    } else if msg.path.is_empty() {
        "empty path".to_string()
    } else {
        return Ok(());
    };
    Err(Error::InvalidRecord { index, reason })
}
