//! Command-line interface.

use crate::report::ReportConfig;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Report open file descriptors of every process against its limits.
#[derive(Parser, Debug)]
#[command(
    name = "ofilemax",
    version,
    about = "Report open file descriptors of every process against its limits",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Print no header line at all.
    #[arg(short = 'n', long)]
    pub no_headers: bool,

    /// Print additional (warning) messages if any.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to /proc filesystem (for a copied or host-mounted proc tree).
    #[arg(long, default_value = "/proc", value_name = "PATH")]
    pub proc_path: String,

    /// Show usage.
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Display version information.
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    /// Builds the run configuration; diagnostics are prefixed with `program_name`.
    pub fn to_config(&self, program_name: impl Into<String>) -> ReportConfig {
        ReportConfig {
            show_headers: !self.no_headers,
            verbose: self.verbose,
            program_name: program_name.into(),
        }
    }
}

/// A parsed command line together with the name diagnostics are prefixed with.
#[derive(Debug)]
pub struct Invocation {
    pub args: Args,
    pub program_name: String,
}

impl Invocation {
    pub fn config(&self) -> ReportConfig {
        self.args.to_config(self.program_name.as_str())
    }
}

/// Why the process ends without producing a report.
#[derive(Debug)]
pub enum EarlyExit {
    /// `--help` or `--version`: clap prints it to stdout and exits 0.
    Informational(clap::Error),
    /// Rejected command line: `message` goes to stderr, exit with `code`.
    Invalid { code: u8, message: String },
}

/// Parses `argv` (program name first), mapping every parse error to the
/// single `<program>: invalid option` diagnostic with exit status 1.
pub fn parse_or_diagnose<I, T>(argv: I) -> Result<Invocation, EarlyExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program_name = program_name(argv.first().map(OsString::as_os_str));

    match Args::try_parse_from(&argv) {
        Ok(args) => Ok(Invocation { args, program_name }),
        Err(e) if is_informational(&e) => Err(EarlyExit::Informational(e)),
        Err(_) => Err(EarlyExit::Invalid {
            code: 1,
            message: format!("{}: invalid option", program_name),
        }),
    }
}

/// True for the "errors" clap raises to print `--help` or `--version`.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Base name of `argv[0]`, falling back to the package name.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
