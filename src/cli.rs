//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "qsoconv",
    version,
    about = "Convert contact logs into contest submission logs and tally them",
    long_about = "Convert ADIF exchange files or per-station fixed-token exports into \
                  Cabrillo submission logs, and count submission-log contacts by band and mode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Stop at the first bad record instead of skipping it.
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an ADIF file into a Cabrillo log.
    Adif(AdifArgs),

    /// Convert a directory of `<call>-<band>-<mode>.txt` station logs into one
    /// Cabrillo log.
    Squirl(SquirlArgs),

    /// Count QSO lines of a Cabrillo log by band and mode.
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct HeaderArgs {
    /// JSON file with header fields (object or list of [key, value] pairs).
    #[arg(long = "header", value_name = "FILE")]
    pub header: Option<PathBuf>,

    /// Station callsign (CALLSIGN).
    #[arg(long)]
    pub callsign: Option<String>,

    /// Category, class first (CATEGORY), e.g. "6A".
    #[arg(long)]
    pub category: Option<String>,

    /// Section (LOCATION), e.g. "NNJ".
    #[arg(long)]
    pub location: Option<String>,

    /// Keep dashes in ADIF comments instead of reading them as spaces.
    #[arg(long = "keep-comment-dashes")]
    pub keep_comment_dashes: bool,
}

#[derive(Args)]
pub struct AdifArgs {
    /// ADIF source file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Cabrillo output file.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    #[command(flatten)]
    pub header: HeaderArgs,
}

#[derive(Args)]
pub struct SquirlArgs {
    /// Cabrillo output file; `.cab` is appended when missing.
    #[arg(value_name = "OUTPUT", default_value = "output.cab")]
    pub output: PathBuf,

    /// Directory holding the station logs.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub header: HeaderArgs,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Cabrillo log to tally.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the count matrix as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
