//! Message text normalization.
//!
//! pylint sometimes renders a message as a summary followed by the
//! offending source line and a caret marker:
//!
//! ```text
//! Exactly one space required after comma
//! os.path.join(os.environ['x'],"four","five")
//!                             ^
//! ```
//!
//! Outside a fixed-width font this reads badly, and the region already
//! carries the coordinates, so only the summary is kept.

use regex::Regex;
use std::sync::LazyLock;

static CARET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*)\n.*\n[ |]*\^.*\z").expect("valid caret regex"));

/// Strip an embedded source excerpt and caret line, if present.
pub fn remove_caret_part(message: &str) -> &str {
    match CARET_RE.captures(message).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => message,
    }
}

/// Sanitize a result message: drop the caret excerpt, terminate with a period.
pub fn sanitize(message: &str) -> String {
    let mut text = remove_caret_part(message).to_string();
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Normalize a rule description into a single sentence: no leading
/// whitespace, no trailing whitespace or periods, then exactly one period.
pub fn clean_sentence(text: &str) -> String {
    let core = text
        .trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.');
    format!("{}.", core)
}
