mod cli;
mod command;
mod errors;
mod escape;
mod format;
mod options;
mod runner;
mod types;

use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::errors::{ChangelogError, ChangelogResult};
use crate::runner::{CommandRunner, DryRun, ShellRunner};

fn main() {
    reset_sigpipe();

    let cli = cli::Cli::parse();

    let tracing_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };

    // RUST_LOG takes precedence over --debug/--quiet
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(tracing_level).into())
        .from_env_lossy();

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            let _ = print_stdout(&output);
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: &cli::Cli) -> ChangelogResult<String> {
    let options = cli.to_options()?;
    debug!(?options, "resolved options");

    if !options.path.is_dir() {
        return Err(ChangelogError::PathNotFound(options.path));
    }

    let runner: Box<dyn CommandRunner> = if cli.dry_run {
        Box::new(DryRun)
    } else {
        Box::new(ShellRunner::new(&options.path))
    };

    let changelog = command::collect(&options, runner.as_ref())?;

    if cli.json {
        format::format_json(&changelog)
    } else {
        Ok(format::format_plain(&changelog))
    }
}

fn print_stdout(s: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", s)?;
    out.flush()
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
