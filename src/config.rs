//! Runtime configuration from command line and environment.
//!
//! Values resolve in order: command line flag, environment variable (a `.env`
//! file is loaded by `main` before parsing), built-in default.

use crate::input::DEFAULT_SHEET_NAME;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ip-cidr-aggregate")]
#[command(about = "Aggregate a list of IPv4 addresses into the fewest CIDR blocks covering exactly them.")]
pub struct CommandLine {
    /// Input file: spreadsheet (xlsx, xlsm, xls, ods) or text/CSV, addresses in the first column
    pub input: PathBuf,

    /// Worksheet holding the address list
    #[arg(long, env = "IPLIST_SHEET", default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    /// Output format: quoted, plain or json
    #[arg(long, env = "IPLIST_FORMAT", default_value = "quoted")]
    pub format: OutputFormat,

    /// Fail on the first entry that is not an IPv4 address instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolved settings for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    /// Worksheet read from spreadsheet input.
    pub sheet_name: String,
    pub format: OutputFormat,
    /// Fail instead of skipping entries that do not parse.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::new(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}

impl From<CommandLine> for Config {
    fn from(cmd: CommandLine) -> Self {
        Config {
            input: cmd.input,
            sheet_name: cmd.sheet,
            format: cmd.format,
            strict: cmd.strict,
        }
    }
}
