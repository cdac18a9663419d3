//! qsoconv command-line tool.

use std::{
    fs::File,
    io::{self, BufWriter, IsTerminal},
    path::Path,
};

use anyhow::Context;
use clap::Parser;
use qsoconv::{
    build::BuildOptions,
    convert::{Conversion, ConvertConfig, ErrorPolicy, convert_adif, convert_station_logs},
    emit::cabrillo_path,
    header::{CREATED_BY_ADIF, CREATED_BY_FIXED, SessionHeader},
    logging::{LogConfig, LogFormat, init_logging},
    report::{aggregate, render_table},
    runtime::loader::{LoaderConfig, load_station_logs},
    source::{DirectoryScanner, LogSource},
};
use tracing::info;

mod cli;

use crate::cli::{AdifArgs, Cli, Command, HeaderArgs, LogFormatArg, SquirlArgs, StatsArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet);
    log_config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    log_config.with_ansi = io::stderr().is_terminal();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let policy = if cli.strict {
        ErrorPolicy::Abort
    } else {
        ErrorPolicy::Skip
    };
    let result = match cli.command {
        Command::Adif(args) => run_adif(&args, policy),
        Command::Squirl(args) => run_squirl(&args, policy).await,
        Command::Stats(args) => run_stats(&args),
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn load_header(args: &HeaderArgs, created_by: &str) -> anyhow::Result<SessionHeader> {
    let mut header = match &args.header {
        Some(path) => SessionHeader::load(path, created_by)
            .with_context(|| format!("reading header {}", path.display()))?,
        None => SessionHeader::field_day(created_by),
    };
    for (key, value) in [
        ("CALLSIGN", &args.callsign),
        ("CATEGORY", &args.category),
        ("LOCATION", &args.location),
    ] {
        if let Some(value) = value {
            header.set(key, value.as_str());
        }
    }
    Ok(header)
}

fn convert_config(args: &HeaderArgs, on_error: ErrorPolicy) -> ConvertConfig {
    ConvertConfig {
        on_error,
        build: BuildOptions {
            comment_dash_as_space: !args.keep_comment_dashes,
        },
    }
}

fn write_output(conversion: &Conversion, header: &SessionHeader, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    conversion.write_cabrillo(BufWriter::new(file), header)?;
    if !conversion.skipped.is_empty() {
        eprintln!(
            "warning: {} record(s) skipped; run with -v for details",
            conversion.skipped.len()
        );
        for skipped in &conversion.skipped {
            eprintln!("  {}:{}: {}", skipped.source_name, skipped.line, skipped.error);
        }
    }
    Ok(())
}

fn run_adif(args: &AdifArgs, on_error: ErrorPolicy) -> anyhow::Result<()> {
    let header = load_header(&args.header, CREATED_BY_ADIF)?;
    let text = std::fs::read_to_string(&args.source)
        .with_context(|| format!("reading {}", args.source.display()))?;
    let source_name = args.source.display().to_string();
    let conversion = convert_adif(
        &text,
        &source_name,
        &header.session_context(),
        convert_config(&args.header, on_error),
    )?;
    write_output(&conversion, &header, &args.target)?;
    println!(
        "Wrote {} QSOs to {}",
        conversion.records.len(),
        args.target.display()
    );
    Ok(())
}

async fn run_squirl(args: &SquirlArgs, on_error: ErrorPolicy) -> anyhow::Result<()> {
    let header = load_header(&args.header, CREATED_BY_FIXED)?;
    let files = DirectoryScanner::new(&args.dir)
        .list_candidate_log_files()
        .with_context(|| format!("scanning {}", args.dir.display()))?;
    info!(count = files.len(), dir = %args.dir.display(), "found station logs");

    let logs = load_station_logs(files, LoaderConfig::default()).await?;
    let conversion = convert_station_logs(
        &logs,
        &header.session_context(),
        convert_config(&args.header, on_error),
    )?;

    let output = cabrillo_path(&args.output);
    write_output(&conversion, &header, &output)?;
    println!("Output written to {}", output.display());
    Ok(())
}

fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let tally = aggregate(text.lines());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("QSO Counts by Band and Mode:");
        println!("{}", render_table(&tally.matrix));
        if tally.dropped > 0 {
            println!("{} QSO line(s) not counted", tally.dropped);
        }
    }
    Ok(())
}
