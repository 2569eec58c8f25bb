//! Operator-facing message prefixes and small helpers.

use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn warn_prefix() -> String {
    if use_colors() {
        "warn:".yellow().bold().to_string()
    } else {
        "warn:".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".bright_black().to_string()
    } else {
        "note:".to_string()
    }
}

/// Host name for `invocations[].machine`, from the operating system.
pub fn machine_name() -> String {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    if name.is_empty() {
        "localhost".to_string()
    } else {
        name
    }
}

/// Join a command vector the way it is shown in logs and `commandLine`.
pub fn join_command(cmd: &[String]) -> String {
    cmd.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_command_space_separated() {
        let cmd = vec!["pylint".to_string(), "-f".into(), "json".into()];
        assert_eq!(join_command(&cmd), "pylint -f json");
    }

    #[test]
    fn test_machine_name_matches_os_host_name() {
        let name = machine_name();
        assert!(!name.is_empty());
        let os = gethostname::gethostname().to_string_lossy().trim().to_string();
        if !os.is_empty() {
            assert_eq!(name, os);
        }
    }
}
