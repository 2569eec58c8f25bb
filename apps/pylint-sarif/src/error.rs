//! Error taxonomy for the conversion pipeline.
//!
//! Every variant is fatal for the run: the binary prints it with an
//! `error:` prefix and exits non-zero without writing a document.

use thiserror::Error;

/// Errors raised while invoking pylint or building the SARIF log.
#[derive(Debug, Error)]
pub enum Error {
    /// The pylint executable could not be located.
    #[error(
        "failed to locate `{program}`.\nPlease make sure that pylint is installed and in your PATH.\nOn Windows this is likely in a location such as 'C:\\Python3\\Scripts'.\nSee https://www.pylint.org for details on how to install and use pylint."
    )]
    ToolNotFound { program: String },

    /// The process could not be started at all.
    #[error(
        "failed to invoke pylint with command line {command}.\nPlease make sure that pylint is installed and in your PATH.\nException: {source}"
    )]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// pylint ran but exited with a status that cannot be tolerated.
    #[error("pylint returned non-zero exit code {code} with command line {command}.\n{stderr}")]
    ToolFailed {
        code: i32,
        command: String,
        stderr: String,
    },

    /// pylint was killed before it produced an exit code.
    #[error("pylint terminated without an exit code (command line {command})")]
    ToolTerminated { command: String },

    /// Bit 0 of pylint's exit status: a fatal message was issued.
    #[error("pylint encountered a fatal error; its output is shown below.\n{output}")]
    PylintFatal { output: String },

    /// The `--list-msgs` stream ended before any rule header was seen.
    #[error("rule listing contained no rule header line")]
    NoRuleHeader,

    /// The diagnostics document is not a JSON array of complete records.
    #[error("invalid pylint JSON output: {0}")]
    Diagnostics(#[from] serde_json::Error),

    /// A diagnostic record parsed but carries out-of-range values.
    #[error("invalid diagnostic record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The assembled document does not satisfy the SARIF shape.
    #[error("SARIF schema violation: {0}")]
    Schema(String),

    /// A result names a rule id the catalog does not contain.
    #[error("result #{index} references rule {rule_id:?}, which has no matching entry in tool.driver.rules")]
    UnknownRule { index: usize, rule_id: String },

    /// A configuration file exists but cannot be parsed.
    #[error("invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code the binary uses for this error.
    ///
    /// Environment and configuration problems exit with 2, everything
    /// that happened after pylint was found exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolNotFound { .. } | Error::Spawn { .. } | Error::Config { .. } => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_string_lossy().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
