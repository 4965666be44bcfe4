//! Spell out numbers passed as arguments, or read from standard input.

mod args;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;

use numwords::logging::set_up_logging;
use numwords::transform;

use crate::args::Args;

#[derive(Copy, Clone)]
enum ExitStatus {
    /// Every input value was spelled out.
    Success,
    /// The run failed before any output was produced.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    // support FORCE_COLOR env var
    if let Some(force_color) = std::env::var_os("FORCE_COLOR") {
        if !force_color.is_empty() {
            colored::control::set_override(true);
        }
    }

    let args = Args::parse();

    match run(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{}", "numwords failed".red().bold());
                for cause in err.chain() {
                    eprintln!("  {} {cause}", "Cause:".bold());
                }
            }
            ExitStatus::Error.into()
        }
    }
}

fn run(args: &Args) -> Result<ExitStatus> {
    set_up_logging(args.log_level())?;

    let values = if args.values.is_empty() {
        read_stdin_values()?
    } else {
        args.values.clone()
    };
    debug!("spelling out {} value(s)", values.len());

    let words = transform(Some(&values))?;

    let mut stdout = io::stdout().lock();
    for line in &words {
        writeln!(stdout, "{line}")?;
    }

    Ok(ExitStatus::Success)
}

/// Reads whitespace-separated numbers from standard input. A single
/// malformed token aborts the run before anything is printed.
fn read_stdin_values() -> Result<Vec<f64>> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    buffer
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid number: `{token}`"))
        })
        .collect()
}
