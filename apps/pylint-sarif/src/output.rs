//! SARIF log assembly, validation, serialization, and console printers.
//!
//! Validation runs against the bundled `assets/sarif-2.1.0-subset.json`,
//! the part of the OASIS SARIF 2.1.0 schema this tool emits.
//!
//! The document is validated and fully serialized in memory before any
//! file is touched, so a failed run never leaves a partial log behind.

use crate::error::{Error, Result};
use crate::exit_code::PylintExit;
use crate::models::sarif::{
    ArtifactLocation, Invocation, ReportingDescriptor, Run, SarifLog, SarifResult, Tool,
    ToolComponent, SARIF_SCHEMA, SARIF_VERSION,
};
use crate::models::RuleDescriptor;
use crate::uri::path_to_uri;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Build the `invocations[]` entry for one pylint run.
pub fn build_invocation(
    command: &[String],
    exit: PylintExit,
    cwd: &Path,
    machine: &str,
) -> Invocation {
    Invocation {
        command_line: crate::utils::join_command(command),
        arguments: command.iter().skip(1).cloned().collect(),
        machine: machine.to_string(),
        working_directory: ArtifactLocation {
            uri: path_to_uri(&cwd.to_string_lossy()),
        },
        execution_successful: exit.execution_successful(),
        exit_code: exit.code(),
        exit_code_description: exit.description(),
    }
}

/// Compose the log from the catalog, results and invocation, then validate it.
pub fn assemble_log(
    tool_name: &str,
    rules: &[RuleDescriptor],
    results: Vec<SarifResult>,
    invocation: Invocation,
    allow_unknown_rules: bool,
) -> Result<SarifLog> {
    let log = SarifLog {
        schema: SARIF_SCHEMA.to_string(),
        version: SARIF_VERSION.to_string(),
        runs: vec![Run {
            tool: Tool {
                driver: ToolComponent {
                    name: tool_name.to_string(),
                    rules: rules.iter().map(ReportingDescriptor::from).collect(),
                },
            },
            invocations: vec![invocation],
            results,
        }],
    };
    validate(&log, allow_unknown_rules)?;
    Ok(log)
}

static SARIF_VALIDATOR: LazyLock<std::result::Result<jsonschema::Validator, String>> =
    LazyLock::new(|| {
        let schema: serde_json::Value =
            serde_json::from_str(include_str!("assets/sarif-2.1.0-subset.json"))
                .map_err(|e| format!("load SARIF schema: {e}"))?;
        jsonschema::validator_for(&schema).map_err(|e| format!("compile SARIF schema: {e}"))
    });

/// Validate the document: schema conformance first, then rule references.
pub fn validate(log: &SarifLog, allow_unknown_rules: bool) -> Result<()> {
    check_schema(log)?;
    check_rule_references(log, allow_unknown_rules)
}

/// Validate the serialized document against the bundled SARIF 2.1.0 schema.
///
/// Any violation means the model drifted from the schema and is reported
/// as a fatal schema error instead of being coerced.
pub fn check_schema(log: &SarifLog) -> Result<()> {
    let validator = SARIF_VALIDATOR
        .as_ref()
        .map_err(|e| Error::Schema(e.clone()))?;
    let value = serde_json::to_value(log)
        .map_err(|e| Error::Schema(format!("serialization failed: {e}")))?;
    let errors: Vec<String> = validator
        .iter_errors(&value)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();
    if !errors.is_empty() {
        return Err(Error::Schema(errors.join("; ")));
    }
    Ok(())
}

/// Rule ids must be unique per driver, and every `ruleId` must name one
/// of them unless unknown rules are allowed.
pub fn check_rule_references(log: &SarifLog, allow_unknown_rules: bool) -> Result<()> {
    for (ri, run) in log.runs.iter().enumerate() {
        let mut ids: HashSet<&str> = HashSet::new();
        for (i, rule) in run.tool.driver.rules.iter().enumerate() {
            if !ids.insert(rule.id.as_str()) {
                return Err(Error::Schema(format!(
                    "runs[{ri}].tool.driver.rules[{i}].id {:?} is not unique",
                    rule.id
                )));
            }
        }
        if allow_unknown_rules {
            continue;
        }
        if let Some((index, res)) = run
            .results
            .iter()
            .enumerate()
            .find(|(_, res)| !ids.contains(res.rule_id.as_str()))
        {
            return Err(Error::UnknownRule {
                index,
                rule_id: res.rule_id.clone(),
            });
        }
    }
    Ok(())
}

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_sarif_string(log: &SarifLog) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    log.serialize(&mut ser)
        .map_err(|e| Error::Schema(format!("serialization failed: {e}")))?;
    let mut out = String::from_utf8(buf)
        .map_err(|e| Error::Schema(format!("serialized log is not UTF-8: {e}")))?;
    out.push('\n');
    Ok(out)
}

/// Serialize and write the log, creating parent directories as needed.
pub fn write_log(path: &Path, sarif: &SarifLog) -> Result<()> {
    let text = to_sarif_string(sarif)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    log::info!("wrote {}", path.to_string_lossy());
    Ok(())
}

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the rule catalog in the requested format (`human` or `json`).
pub fn print_rules(rules: &[RuleDescriptor], output: &str) -> Result<()> {
    match output {
        "json" => {
            let text = serde_json::to_string_pretty(rules)
                .map_err(|e| Error::Schema(format!("serialization failed: {e}")))?;
            println!("{}", text);
        }
        _ => {
            let color = use_colors(output);
            for r in rules {
                let level = if color {
                    match r.level.as_str() {
                        "error" => r.level.as_str().red().bold().to_string(),
                        "warning" => r.level.as_str().yellow().bold().to_string(),
                        other => other.blue().bold().to_string(),
                    }
                } else {
                    r.level.as_str().to_string()
                };
                let id = if color {
                    r.id.clone().bold().to_string()
                } else {
                    r.id.clone()
                };
                println!("{} {:<7} {} — {}", id, level, r.name, r.full_description);
            }
            println!("— Summary — rules={}", rules.len());
        }
    }
    Ok(())
}

/// Print the outcome of a conversion to stdout.
pub fn print_summary(sarif: &SarifLog, path: &Path) {
    let (rules, results) = sarif
        .runs
        .first()
        .map(|r| (r.tool.driver.rules.len(), r.results.len()))
        .unwrap_or((0, 0));
    let line = format!(
        "— Summary — rules={} results={} output={}",
        rules,
        results,
        path.to_string_lossy()
    );
    if use_colors("human") {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sarif::{Location, Message, PhysicalLocation, Region};
    use crate::models::{Level, Significance};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn rule(id: &str) -> RuleDescriptor {
        RuleDescriptor {
            id: id.into(),
            name: "bad-whitespace".into(),
            short_description: None,
            full_description: "Used when a wrong number of spaces is used.".into(),
            level: Level::from_rule_id(id),
            significance: Significance::from_rule_id(id),
            help_uri: format!("http://pylint-messages.wikidot.com/messages:{}", id),
        }
    }

    fn result(rule_id: &str, line: i64, column: i64) -> SarifResult {
        SarifResult {
            message: Message {
                text: "Exactly one space required after comma.".into(),
            },
            rule_id: rule_id.into(),
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: "file:///repo/demo.py".into(),
                    },
                    region: Region {
                        start_line: line,
                        start_column: column,
                    },
                },
            }],
        }
    }

    fn invocation() -> Invocation {
        let cmd: Vec<String> = ["pylint", "-f", "json", "-r", "n", "demo.py"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        build_invocation(&cmd, PylintExit(16), Path::new("/repo"), "builder")
    }

    #[test]
    fn test_build_invocation_fields() {
        let inv = invocation();
        assert_eq!(inv.command_line, "pylint -f json -r n demo.py");
        assert_eq!(inv.arguments, vec!["-f", "json", "-r", "n", "demo.py"]);
        assert_eq!(inv.working_directory.uri, "file:///repo");
        assert!(inv.execution_successful);
        assert_eq!(inv.exit_code, 16);
        assert_eq!(inv.exit_code_description, "Convention message issued. ");
    }

    #[test]
    fn test_serialized_document_layout() {
        let log = assemble_log(
            "pylint",
            &[rule("C0326")],
            vec![result("C0326", 10, 5)],
            invocation(),
            false,
        )
        .unwrap();
        let text = to_sarif_string(&log).unwrap();
        let expected = r#"{
    "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
    "version": "2.1.0",
    "runs": [
        {
            "tool": {
                "driver": {
                    "name": "pylint",
                    "rules": [
                        {
                            "id": "C0326",
                            "name": "bad-whitespace",
                            "fullDescription": {
                                "text": "Used when a wrong number of spaces is used."
                            },
                            "defaultConfiguration": {
                                "level": "note"
                            },
                            "properties": {
                                "CodeSonar": {
                                    "significance": "style"
                                }
                            },
                            "helpUri": "http://pylint-messages.wikidot.com/messages:C0326"
                        }
                    ]
                }
            },
            "invocations": [
                {
                    "commandLine": "pylint -f json -r n demo.py",
                    "arguments": [
                        "-f",
                        "json",
                        "-r",
                        "n",
                        "demo.py"
                    ],
                    "machine": "builder",
                    "workingDirectory": {
                        "uri": "file:///repo"
                    },
                    "executionSuccessful": true,
                    "exitCode": 16,
                    "exitCodeDescription": "Convention message issued. "
                }
            ],
            "results": [
                {
                    "message": {
                        "text": "Exactly one space required after comma."
                    },
                    "ruleId": "C0326",
                    "locations": [
                        {
                            "physicalLocation": {
                                "artifactLocation": {
                                    "uri": "file:///repo/demo.py"
                                },
                                "region": {
                                    "startLine": 10,
                                    "startColumn": 5
                                }
                            }
                        }
                    ]
                }
            ]
        }
    ]
}
"#;
        assert_eq!(text, expected);
        // identical input, identical bytes
        assert_eq!(to_sarif_string(&log).unwrap(), text);
    }

    #[test]
    fn test_dangling_rule_id_rejected_unless_allowed() {
        let err = assemble_log(
            "pylint",
            &[rule("C0326")],
            vec![result("E0602", 1, 1)],
            invocation(),
            false,
        )
        .unwrap_err();
        match err {
            Error::UnknownRule { index, rule_id } => {
                assert_eq!(index, 0);
                assert_eq!(rule_id, "E0602");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(assemble_log(
            "pylint",
            &[rule("C0326")],
            vec![result("E0602", 1, 1)],
            invocation(),
            true,
        )
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_based_region_and_duplicate_rules() {
        let err = assemble_log(
            "pylint",
            &[rule("C0326")],
            vec![result("C0326", 1, 0)],
            invocation(),
            false,
        )
        .unwrap_err();
        match err {
            Error::Schema(msg) => assert!(msg.contains("/region/startColumn"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
        // identical descriptors already break the schema's uniqueItems
        let err = assemble_log(
            "pylint",
            &[rule("C0326"), rule("C0326")],
            vec![],
            invocation(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
        let mut renamed = rule("C0326");
        renamed.name = "bad-continuation".into();
        let err = assemble_log(
            "pylint",
            &[rule("C0326"), renamed],
            vec![],
            invocation(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not unique"));
        let err = assemble_log("", &[rule("C0326")], vec![], invocation(), false).unwrap_err();
        assert!(err.to_string().contains("/tool/driver/name"));
    }

    #[test]
    fn test_schema_rejects_empty_message_text() {
        let mut log =
            assemble_log("pylint", &[rule("C0326")], vec![], invocation(), false).unwrap();
        log.runs[0].results.push(SarifResult {
            message: Message { text: String::new() },
            ..result("C0326", 2, 1)
        });
        let err = check_schema(&log).unwrap_err();
        assert!(err.to_string().contains("/results/0/message/text"));
        // references are a separate concern and still hold
        assert!(check_rule_references(&log, false).is_ok());
    }

    #[test]
    fn test_check_rule_references_ignores_schema_shape() {
        let mut log =
            assemble_log("pylint", &[rule("W0611")], vec![], invocation(), false).unwrap();
        log.runs[0].results.push(result("W0611", 1, 1));
        log.runs[0].results.push(result("Z9001", 4, 2));
        match check_rule_references(&log, false).unwrap_err() {
            Error::UnknownRule { index, rule_id } => {
                assert_eq!(index, 1);
                assert_eq!(rule_id, "Z9001");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(check_rule_references(&log, true).is_ok());
        assert!(check_schema(&log).is_ok());
    }

    #[test]
    fn test_write_log_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/nested/pylint.sarif");
        let log = assemble_log("pylint", &[rule("W0611")], vec![], invocation(), false).unwrap();
        write_log(&path, &log).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_sarif_string(&log).unwrap());
    }
}
