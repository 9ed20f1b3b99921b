// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Environment variable naming the acknowledgment sink.
pub const ACK_ENV: &str = "ACK_FH";

#[derive(Parser, Debug)]
#[command(
    name = "line_tally",
    version,
    about = "Count distinct trimmed lines from stdin, most frequent first",
    long_about = "Reads lines from standard input, copies each one verbatim to an \
                  optional acknowledgment file, and prints `<line> <count>` for every \
                  distinct trimmed line, most frequent first. Ties keep the order in \
                  which lines first appeared."
)]
pub struct Args {
    /// File receiving a verbatim copy of every input line (empty = discard)
    #[arg(
        long,
        env = ACK_ENV,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        value_hint = ValueHint::FilePath,
        help_heading = "Input/Output"
    )]
    pub ack_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Input/Output")]
    pub format: OutputFormat,

    /// Increase diagnostic verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "Diagnostics")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Diagnostics")]
    pub quiet: bool,
}
