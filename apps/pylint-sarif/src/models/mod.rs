//! Shared data models: pylint input records, rule descriptors, and the
//! SARIF document structures.

pub mod pylint;
pub mod sarif;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// SARIF `level` used in a rule's default configuration.
pub enum Level {
    Note,
    Warning,
    Error,
}

impl Level {
    /// Level implied by the first character of a pylint message id.
    ///
    /// Unrecognized prefixes (and empty ids) fall back to `note`.
    pub fn from_rule_id(id: &str) -> Self {
        match id.chars().next() {
            Some('E') | Some('F') => Level::Error,
            Some('W') => Level::Warning,
            _ => Level::Note,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Note => "note",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Coarse triage category attached to a rule for downstream consumers.
pub enum Significance {
    Style,
    Reliability,
    Diagnostic,
    Security,
    Redundancy,
    FromManifest,
    Unspecified,
}

impl Significance {
    /// Significance implied by the first character of a pylint message id.
    ///
    /// Returns `None` for prefixes pylint does not define; callers omit the
    /// classification rather than inventing one.
    pub fn from_rule_id(id: &str) -> Option<Self> {
        match id.chars().next()? {
            'C' | 'R' | 'I' => Some(Significance::Style),
            'E' | 'W' => Some(Significance::Reliability),
            'F' => Some(Significance::Diagnostic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One entry of the rule catalog.
pub struct RuleDescriptor {
    pub id: String,
    pub name: String,
    /// The `*...*` text of the header line, when pylint printed one.
    pub short_description: Option<String>,
    pub full_description: String,
    pub level: Level,
    pub significance: Option<Significance>,
    pub help_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_table() {
        let expected = [
            ("C0326", Level::Note),
            ("E1101", Level::Error),
            ("R0201", Level::Note),
            ("W0611", Level::Warning),
            ("I0011", Level::Note),
            ("F0001", Level::Error),
            ("X9999", Level::Note),
            ("", Level::Note),
        ];
        for (id, lvl) in expected {
            assert_eq!(Level::from_rule_id(id), lvl, "id {}", id);
        }
    }

    #[test]
    fn test_significance_table() {
        let expected = [
            ("C0326", Some(Significance::Style)),
            ("E1101", Some(Significance::Reliability)),
            ("R0201", Some(Significance::Style)),
            ("W0611", Some(Significance::Reliability)),
            ("I0011", Some(Significance::Style)),
            ("F0001", Some(Significance::Diagnostic)),
            ("X9999", None),
            ("", None),
        ];
        for (id, sig) in expected {
            assert_eq!(Significance::from_rule_id(id), sig, "id {}", id);
        }
    }

    #[test]
    fn test_significance_serializes_kebab_case() {
        let v = serde_json::to_value(Significance::FromManifest).unwrap();
        assert_eq!(v, "from-manifest");
        let v = serde_json::to_value(Level::Warning).unwrap();
        assert_eq!(v, "warning");
    }
}
