//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pylint-sarif",
    version,
    about = "Run pylint and convert its output to SARIF",
    long_about = "pylint-sarif — run pylint and convert its rule catalog and diagnostics into a SARIF 2.1.0 log.\n\nConfiguration precedence: CLI > pylint-sarif.toml > defaults.",
    after_help = "Examples:\n  pylint-sarif run src/ tests/\n  pylint-sarif run --project demo app.py\n  pylint-sarif convert --rules msgs.txt --diagnostics out.json --exit-code 16\n  pylint-sarif rules --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current pylint-sarif version.")]
    Version,
    /// Invoke pylint and write a SARIF log
    #[command(
        about = "Run pylint and write SARIF",
        long_about = "List pylint's messages, run pylint with the JSON reporter over the inputs, and write one SARIF log. Fatal pylint exits abort without writing.",
        after_help = "Examples:\n  pylint-sarif run app.py\n  pylint-sarif run --sarif-output reports/pylint.sarif pkg/"
    )]
    Run {
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "pylint executable (default: pylint on PATH)")]
        pylint: Option<String>,
        #[arg(long, help = "The name of the SARIF file (default: pylint.sarif)")]
        sarif_output: Option<String>,
        #[arg(long, help = "Project name; writes <project>.pylint.sarif")]
        project: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept results whose rule id is missing from the catalog")]
        allow_unknown_rules: bool,
        #[arg(help = "The names of the Python files or packages")]
        inputs: Vec<String>,
    },
    /// Convert previously captured pylint output
    #[command(
        about = "Convert captured pylint output",
        long_about = "Build a SARIF log from a saved `pylint --list-msgs` listing and a saved `pylint -f json` report, without invoking pylint.",
        after_help = "Examples:\n  pylint-sarif convert --rules msgs.txt --diagnostics report.json\n  pylint-sarif convert --rules msgs.txt --diagnostics report.json --exit-code 20 -- pylint -f json -r n \"my app.py\"\n\nEverything after `--` is recorded verbatim as the captured command line, one argument per word as the shell split it."
    )]
    Convert {
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "File holding `pylint --list-msgs` output")]
        rules: String,
        #[arg(long, help = "File holding `pylint -f json` output")]
        diagnostics: String,
        #[arg(long, default_value_t = 0, help = "pylint exit code of the captured run")]
        exit_code: i32,
        #[arg(long, help = "The name of the SARIF file (default: pylint.sarif)")]
        sarif_output: Option<String>,
        #[arg(long, help = "Project name; writes <project>.pylint.sarif")]
        project: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept results whose rule id is missing from the catalog")]
        allow_unknown_rules: bool,
        #[arg(
            last = true,
            value_name = "COMMAND",
            help = "Command line of the captured run, after `--` (default: pylint -f json -r n)"
        )]
        command: Vec<String>,
    },
    /// Print pylint's rule catalog
    #[command(
        about = "List rules",
        long_about = "Parse `pylint --list-msgs` and print the resulting rule descriptors."
    )]
    Rules {
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "pylint executable (default: pylint on PATH)")]
        pylint: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_inputs() {
        let cli = Cli::try_parse_from([
            "pylint-sarif",
            "run",
            "--project",
            "demo",
            "--allow-unknown-rules",
            "a.py",
            "pkg",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Run {
                project,
                allow_unknown_rules,
                inputs,
                ..
            } => {
                assert_eq!(project.as_deref(), Some("demo"));
                assert!(allow_unknown_rules);
                assert_eq!(inputs, vec!["a.py", "pkg"]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_convert_requires_both_files() {
        assert!(Cli::try_parse_from(["pylint-sarif", "convert", "--rules", "m.txt"]).is_err());
        let cli = Cli::try_parse_from([
            "pylint-sarif",
            "convert",
            "--rules",
            "m.txt",
            "--diagnostics",
            "r.json",
            "--exit-code",
            "6",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Convert {
                exit_code, command, ..
            } => {
                assert_eq!(exit_code, 6);
                assert!(command.is_empty());
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_keeps_command_arguments_intact() {
        let cli = Cli::try_parse_from([
            "pylint-sarif",
            "convert",
            "--rules",
            "m.txt",
            "--diagnostics",
            "r.json",
            "--",
            "pylint",
            "--rcfile=my config.toml",
            "-f",
            "json",
            "my app.py",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Convert { command, .. } => assert_eq!(
                command,
                vec!["pylint", "--rcfile=my config.toml", "-f", "json", "my app.py"]
            ),
            _ => panic!("expected convert"),
        }
    }
}
