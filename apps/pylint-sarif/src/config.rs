//! Configuration discovery and effective settings resolution.
//!
//! `pylint-sarif.toml|yaml|yml` is read from the repository root (or the
//! closest ancestor) and merged with CLI flags into an `Effective` config.
//! Defaults:
//! - `pylint`: `pylint` (looked up on PATH)
//! - `sarifOutput`: `pylint.sarif`
//! - `toolName`: `pylint`
//! - `helpUriBase`: `http://pylint-messages.wikidot.com/messages:`
//! - `pylintArgs`: none
//! - `allowUnknownRules`: false
//!
//! Overrides precedence: CLI > config file > defaults. A `project` name
//! replaces the output file with `<project>.pylint.sarif`.

use crate::error::{Error, Result};
use crate::rules::DEFAULT_HELP_URI_BASE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["pylint-sarif.toml", "pylint-sarif.yaml", "pylint-sarif.yml"];
pub const DEFAULT_SARIF_OUTPUT: &str = "pylint.sarif";
pub const DEFAULT_TOOL_NAME: &str = "pylint";
pub const DEFAULT_PYLINT: &str = "pylint";

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Root configuration loaded from `pylint-sarif.toml|yaml`.
pub struct SarifConfig {
    pub pylint: Option<String>,
    pub sarif_output: Option<String>,
    pub project: Option<String>,
    pub tool_name: Option<String>,
    pub help_uri_base: Option<String>,
    #[serde(default)]
    pub pylint_args: Option<Vec<String>>,
    pub allow_unknown_rules: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub pylint: String,
    pub sarif_output: PathBuf,
    pub tool_name: String,
    pub help_uri_base: String,
    pub pylint_args: Vec<String>,
    pub allow_unknown_rules: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load the config from `root` if one of the known files exists.
///
/// A file that exists but does not parse is an error rather than being
/// silently replaced by defaults.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, SarifConfig)>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<SarifConfig>(&text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<SarifConfig>(&text).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(Error::Config {
                path: path.to_string_lossy().to_string(),
                message,
            }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_pylint: Option<&str>,
    cli_sarif_output: Option<&str>,
    cli_project: Option<&str>,
    cli_allow_unknown_rules: Option<bool>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, SarifConfig::default()),
    };

    let pylint = cli_pylint
        .map(|s| s.to_string())
        .or(cfg.pylint)
        .unwrap_or_else(|| DEFAULT_PYLINT.to_string());

    let project = cli_project.map(|s| s.to_string()).or(cfg.project);
    let sarif_output = match project {
        Some(p) => PathBuf::from(project_sarif_name(&p)),
        None => PathBuf::from(
            cli_sarif_output
                .map(|s| s.to_string())
                .or(cfg.sarif_output)
                .unwrap_or_else(|| DEFAULT_SARIF_OUTPUT.to_string()),
        ),
    };

    let tool_name = cfg
        .tool_name
        .unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string());
    let help_uri_base = cfg
        .help_uri_base
        .unwrap_or_else(|| DEFAULT_HELP_URI_BASE.to_string());
    let pylint_args = cfg.pylint_args.unwrap_or_default();
    let allow_unknown_rules = cli_allow_unknown_rules
        .or(cfg.allow_unknown_rules)
        .unwrap_or(false);

    Ok(Effective {
        repo_root,
        config_path,
        pylint,
        sarif_output,
        tool_name,
        help_uri_base,
        pylint_args,
        allow_unknown_rules,
    })
}

/// File name a CodeSonar import step expects for `project`.
pub fn project_sarif_name(project: &str) -> String {
    format!("{}.pylint.sarif", project)
}
