use clap::Parser;

use numwords::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "numwords",
    about = "Spell out numbers as English words.",
    after_help = "With no VALUES, numbers are read from standard input, separated by whitespace.",
    version
)]
pub(crate) struct Args {
    /// Numbers to spell out. Read from standard input when omitted.
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub(crate) values: Vec<f64>,
    #[clap(flatten)]
    log_level_args: LogLevelArgs,
}

impl Args {
    pub(crate) fn log_level(&self) -> LogLevel {
        LogLevel::from(&self.log_level_args)
    }
}

#[derive(Debug, Default, Clone, clap::Args)]
pub(crate) struct LogLevelArgs {
    /// Enable verbose logging.
    #[arg(
        short,
        long,
        global = true,
        group = "verbosity",
        help_heading = "Log levels"
    )]
    pub(crate) verbose: bool,
    /// Print results, but nothing else.
    #[arg(
        short,
        long,
        global = true,
        group = "verbosity",
        help_heading = "Log levels"
    )]
    pub(crate) quiet: bool,
    /// Disable all logging.
    #[arg(
        short,
        long,
        global = true,
        group = "verbosity",
        help_heading = "Log levels"
    )]
    pub(crate) silent: bool,
}

impl From<&LogLevelArgs> for LogLevel {
    fn from(args: &LogLevelArgs) -> Self {
        if args.silent {
            Self::Silent
        } else if args.quiet {
            Self::Quiet
        } else if args.verbose {
            Self::Verbose
        } else {
            Self::Default
        }
    }
}
