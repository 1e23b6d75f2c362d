//! RDE dataset template generator CLI.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::{ColorChoice, Parser};
use tracing::{error, level_filters::LevelFilter};

use rde_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use rde_cli::commands::{discover_workbooks, run_workbook};
use rde_cli::logging::{LogConfig, LogFormat, init_logging};
use rde_cli::summary::{HardFailure, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }

    let exit_code = match run(&cli) {
        Ok(any_failed) => i32::from(any_failed),
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };

    if cli.pause {
        pause_for_enter();
    }
    std::process::exit(exit_code);
}

/// Process every requested workbook. Returns whether any workbook failed a
/// fail-fast step.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let workbooks = if cli.inputs.is_empty() {
        let cwd = std::env::current_dir()?;
        discover_workbooks(&cwd)?
    } else {
        cli.inputs.clone()
    };

    if workbooks.is_empty() {
        println!("No workbooks found.");
        return Ok(false);
    }

    let date_submitted = chrono::Local::now().date_naive();
    let mut outcomes = Vec::new();
    let mut hard_failures: Vec<HardFailure> = Vec::new();
    for path in &workbooks {
        match run_workbook(path, date_submitted) {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                error!(workbook = %name, error = %err, "workbook aborted");
                hard_failures.push((name, format!("{err:#}")));
            }
        }
    }

    print_summary(&outcomes, &hard_failures);
    Ok(!hard_failures.is_empty())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

fn pause_for_enter() {
    print!("Press Enter to exit.");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
