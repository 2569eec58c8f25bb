//! Records emitted by `pylint -f json`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// One diagnostic from pylint's JSON reporter.
///
/// `line` is 1-based and `column` is 0-based, as pylint prints them.
/// Extra fields (`type`, `module`, `obj`, `symbol`, ...) are accepted
/// and ignored.
pub struct PylintMessage {
    pub path: String,
    pub line: i64,
    pub column: i64,
    pub message: String,
    #[serde(rename = "message-id")]
    pub message_id: String,
}
