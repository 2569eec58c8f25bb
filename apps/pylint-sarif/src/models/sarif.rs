//! SARIF 2.1.0 structures, limited to what one pylint run needs.
//!
//! Field declaration order is the serialization order, which keeps the
//! emitted document stable byte for byte.

use super::{Level, Significance};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SARIF_VERSION: &str = "2.1.0";
pub const SARIF_SCHEMA: &str = "https://json.schemastore.org/sarif-2.1.0.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Top-level SARIF log.
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub tool: Tool,
    pub invocations: Vec<Invocation>,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub driver: ToolComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolComponent {
    pub name: String,
    pub rules: Vec<ReportingDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingDescriptor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub message_strings: BTreeMap<String, MultiformatMessageString>,
    pub full_description: MultiformatMessageString,
    pub default_configuration: ReportingConfiguration,
    pub properties: PropertyBag,
    pub help_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiformatMessageString {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingConfiguration {
    pub level: Level,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Rule property bag. Carries the CodeSonar significance when known and
/// serializes as `{}` otherwise.
pub struct PropertyBag {
    #[serde(rename = "CodeSonar", skip_serializing_if = "Option::is_none")]
    pub codesonar: Option<CodeSonarProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeSonarProperties {
    pub significance: Significance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub command_line: String,
    pub arguments: Vec<String>,
    pub machine: String,
    pub working_directory: ArtifactLocation,
    pub execution_successful: bool,
    pub exit_code: i32,
    pub exit_code_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub message: Message,
    pub rule_id: String,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub physical_location: PhysicalLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    pub artifact_location: ArtifactLocation,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub start_line: i64,
    pub start_column: i64,
}

impl From<&super::RuleDescriptor> for ReportingDescriptor {
    fn from(rule: &super::RuleDescriptor) -> Self {
        let mut message_strings = BTreeMap::new();
        if let Some(short) = rule.short_description.as_ref() {
            message_strings.insert(
                "default".to_string(),
                MultiformatMessageString {
                    text: short.clone(),
                },
            );
        }
        ReportingDescriptor {
            id: rule.id.clone(),
            name: rule.name.clone(),
            message_strings,
            full_description: MultiformatMessageString {
                text: rule.full_description.clone(),
            },
            default_configuration: ReportingConfiguration { level: rule.level },
            properties: PropertyBag {
                codesonar: rule
                    .significance
                    .map(|significance| CodeSonarProperties { significance }),
            },
            help_uri: rule.help_uri.clone(),
        }
    }
}
