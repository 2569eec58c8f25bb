//! pylint-sarif CLI binary entry point.
//! Resolves configuration, drives pylint, and writes the SARIF log.

use clap::{CommandFactory, Parser};
use pylint_sarif::cli::{Cli, Commands};
use pylint_sarif::config::{self, Effective};
use pylint_sarif::convert::{convert, Captured, ConvertOptions};
use pylint_sarif::exit_code::PylintExit;
use pylint_sarif::utils::{error_prefix, info_prefix, machine_name, note_prefix, warn_prefix};
use pylint_sarif::{output, runner, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let outcome = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Run {
            repo_root,
            pylint,
            sarif_output,
            project,
            allow_unknown_rules,
            inputs,
        } => {
            if inputs.is_empty() {
                eprintln!("{} no inputs were specified", error_prefix());
                let mut cmd = Cli::command();
                if let Some(sub) = cmd.find_subcommand_mut("run") {
                    eprintln!("{}", sub.render_help());
                }
                std::process::exit(2);
            }
            config::resolve_effective(
                repo_root.as_deref(),
                pylint.as_deref(),
                sarif_output.as_deref(),
                project.as_deref(),
                allow_unknown_rules.then_some(true),
            )
            .and_then(|eff| run_pylint(&eff, &inputs))
        }
        Commands::Convert {
            repo_root,
            rules,
            diagnostics,
            exit_code,
            command,
            sarif_output,
            project,
            allow_unknown_rules,
        } => config::resolve_effective(
            repo_root.as_deref(),
            None,
            sarif_output.as_deref(),
            project.as_deref(),
            allow_unknown_rules.then_some(true),
        )
        .and_then(|eff| {
            convert_captured(
                &eff,
                Path::new(&rules),
                Path::new(&diagnostics),
                PylintExit(exit_code),
                &command,
            )
        }),
        Commands::Rules {
            repo_root,
            pylint,
            output,
        } => config::resolve_effective(repo_root.as_deref(), pylint.as_deref(), None, None, None)
            .and_then(|eff| list_rules(&eff, output.as_deref().unwrap_or("human"))),
    };
    if let Err(e) = outcome {
        eprintln!("{} {}", error_prefix(), e);
        std::process::exit(e.exit_code());
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| Error::Io {
        path: ".".to_string(),
        source: e,
    })
}

fn announce_config(eff: &Effective) {
    match eff.config_path.as_ref() {
        Some(p) => log::info!("using config {}", p.to_string_lossy()),
        None => eprintln!(
            "{} No pylint-sarif.toml found; using defaults.",
            note_prefix()
        ),
    }
}

fn convert_options(eff: &Effective) -> ConvertOptions {
    ConvertOptions {
        tool_name: eff.tool_name.clone(),
        help_uri_base: eff.help_uri_base.clone(),
        allow_unknown_rules: eff.allow_unknown_rules,
    }
}

/// Report the exit status; a fatal bit aborts with pylint's output.
fn check_exit(exit: PylintExit, output: &str) -> Result<()> {
    eprintln!(
        "{} pylint returned an exit code of {}, indicating: '{}'",
        info_prefix(),
        exit.code(),
        exit.description()
    );
    if exit.is_fatal() {
        return Err(Error::PylintFatal {
            output: output.to_string(),
        });
    }
    Ok(())
}

fn run_pylint(eff: &Effective, inputs: &[String]) -> Result<()> {
    announce_config(eff);
    let cwd = current_dir()?;
    let exe = runner::locate_pylint(&eff.pylint)?;
    log::info!("using pylint at {}", exe.to_string_lossy());

    let listing = runner::list_msgs(&exe, &eff.pylint, &eff.pylint_args, &cwd)?;
    let run = runner::run_json_report(&exe, &eff.pylint, &eff.pylint_args, inputs, &cwd)?;
    check_exit(run.exit, &format!("{}{}", run.stdout, run.stderr))?;
    if !run.stderr.trim().is_empty() {
        eprintln!("{} pylint wrote to stderr:\n{}", warn_prefix(), run.stderr.trim_end());
    }

    let machine = machine_name();
    let captured = Captured {
        rule_listing: &listing,
        diagnostics: &run.stdout,
        command: &run.command,
        exit: run.exit,
        cwd: &cwd,
        machine: &machine,
    };
    let sarif = convert(&captured, &convert_options(eff))?;
    output::write_log(&eff.sarif_output, &sarif)?;
    output::print_summary(&sarif, &eff.sarif_output);
    Ok(())
}

fn convert_captured(
    eff: &Effective,
    rules_path: &Path,
    diagnostics_path: &Path,
    exit: PylintExit,
    command: &[String],
) -> Result<()> {
    announce_config(eff);
    let cwd = current_dir()?;
    let listing = fs::read_to_string(rules_path).map_err(|e| Error::Io {
        path: rules_path.to_string_lossy().to_string(),
        source: e,
    })?;
    let diagnostics = fs::read_to_string(diagnostics_path).map_err(|e| Error::Io {
        path: diagnostics_path.to_string_lossy().to_string(),
        source: e,
    })?;
    check_exit(exit, &diagnostics)?;

    let command: Vec<String> = if command.is_empty() {
        runner::json_report_command(&eff.pylint, &eff.pylint_args, &[])
    } else {
        command.to_vec()
    };
    let machine = machine_name();
    let captured = Captured {
        rule_listing: &listing,
        diagnostics: &diagnostics,
        command: &command,
        exit,
        cwd: &cwd,
        machine: &machine,
    };
    let sarif = convert(&captured, &convert_options(eff))?;
    output::write_log(&eff.sarif_output, &sarif)?;
    output::print_summary(&sarif, &eff.sarif_output);
    Ok(())
}

fn list_rules(eff: &Effective, output_mode: &str) -> Result<()> {
    let cwd = current_dir()?;
    let exe = runner::locate_pylint(&eff.pylint)?;
    let listing = runner::list_msgs(&exe, &eff.pylint, &eff.pylint_args, &cwd)?;
    let rules = pylint_sarif::rules::parse_rule_listing(&listing, &eff.help_uri_base)?;
    output::print_rules(&rules, output_mode)
}
