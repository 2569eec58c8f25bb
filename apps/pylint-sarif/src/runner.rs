//! pylint process invocation.
//!
//! Both invocations capture stdout and stderr completely via
//! `Command::output()`; the outputs are small enough to buffer and this
//! avoids pipe deadlocks. There is no timeout.

use crate::error::{Error, Result};
use crate::exit_code::PylintExit;
use crate::utils::join_command;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured output of the `-f json` run.
pub struct PylintRun {
    pub command: Vec<String>,
    pub exit: PylintExit,
    pub stdout: String,
    pub stderr: String,
}

/// Resolve the pylint executable: an explicit path is used as-is when it
/// exists, anything else is looked up on `PATH`.
pub fn locate_pylint(program: &str) -> Result<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 && as_path.is_file() {
        return Ok(as_path.to_path_buf());
    }
    which::which(program).map_err(|_| Error::ToolNotFound {
        program: program.to_string(),
    })
}

fn spawn(exe: &Path, command: &[String], cwd: &Path) -> Result<Output> {
    log::info!("invoking {:?}", command);
    Command::new(exe)
        .args(&command[1..])
        .current_dir(cwd)
        .output()
        .map_err(|source| Error::Spawn {
            command: format!("{:?}", command),
            source,
        })
}

/// Command vector for `pylint --list-msgs`.
///
/// `extra_args` are the same options given to the report run, so that
/// `--load-plugins` or `--rcfile` also contribute their messages.
pub fn list_msgs_command(program: &str, extra_args: &[String]) -> Vec<String> {
    let mut cmd = vec![program.to_string()];
    cmd.extend(extra_args.iter().cloned());
    cmd.push("--list-msgs".to_string());
    cmd
}

/// Command vector for the JSON-reporter run over `inputs`.
pub fn json_report_command(program: &str, extra_args: &[String], inputs: &[String]) -> Vec<String> {
    let mut cmd: Vec<String> = ["-f", "json", "-r", "n"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    cmd.insert(0, program.to_string());
    cmd.extend(extra_args.iter().cloned());
    cmd.extend(inputs.iter().cloned());
    cmd
}

/// Run `pylint --list-msgs` and return its stdout.
///
/// Any non-zero exit here is fatal; stderr is carried in the error and
/// only echoed directly when pylint succeeded.
pub fn list_msgs(exe: &Path, program: &str, extra_args: &[String], cwd: &Path) -> Result<String> {
    let command = list_msgs_command(program, extra_args);
    let out = spawn(exe, &command, cwd)?;
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    match out.status.code() {
        Some(0) => {
            if !stderr.trim().is_empty() {
                eprint!("{}", stderr);
            }
            Ok(String::from_utf8_lossy(&out.stdout).to_string())
        }
        Some(code) => Err(Error::ToolFailed {
            code,
            command: format!("{:?}", command),
            stderr,
        }),
        None => Err(Error::ToolTerminated {
            command: join_command(&command),
        }),
    }
}

/// Run pylint with the JSON reporter over `inputs`.
///
/// Exit bits other than "fatal" are expected whenever messages are found,
/// so only the caller decides what to do with [`PylintRun::exit`].
pub fn run_json_report(
    exe: &Path,
    program: &str,
    extra_args: &[String],
    inputs: &[String],
    cwd: &Path,
) -> Result<PylintRun> {
    let command = json_report_command(program, extra_args, inputs);
    let out = spawn(exe, &command, cwd)?;
    let code = out.status.code().ok_or_else(|| Error::ToolTerminated {
        command: join_command(&command),
    })?;
    Ok(PylintRun {
        command,
        exit: PylintExit(code),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}
