// Command-line front end: resolve message identifiers given as arguments.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use wm2str::{parse_message, Report, Result};

#[derive(Debug, Parser)]
#[command(name = "wm2str")]
#[command(version, about = "Print the WM_* constant name for Win32 window message identifiers.")]
struct Cli {
    /// Messages to resolve: decimal (`513`), hex (`0x0201`) or a constant
    /// name (`WM_LBUTTONDOWN`).
    #[arg(value_name = "MESSAGE", required_unless_present = "list")]
    messages: Vec<String>,

    /// Print nothing for very frequent messages (WM_MOUSEMOVE, WM_NCHITTEST, …).
    #[arg(long)]
    hide_frequent: bool,

    /// Emit a JSON array instead of tab-separated lines.
    #[arg(long)]
    json: bool,

    /// Print every message compiled into the table and exit.
    #[arg(long, conflicts_with_all = ["messages", "hide_frequent"])]
    list: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let reports = if cli.list {
        wm2str::messages().map(Report::from).collect()
    } else {
        match lookup_all(&cli.messages, !cli.hide_frequent) {
            Ok(reports) => reports,
            Err(e) => {
                debug!(error = %e, "argument rejected");
                eprintln!("wm2str: {e}");
                return ExitCode::from(2);
            }
        }
    };
    debug!(count = reports.len(), json = cli.json, "resolved");

    match write_reports(&reports, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream (`| head`) stopped reading; nothing left to report.
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wm2str: {e}");
            ExitCode::FAILURE
        }
    }
}

fn lookup_all(inputs: &[String], show_frequent: bool) -> Result<Vec<Report>> {
    inputs
        .iter()
        .map(|text| {
            let id = parse_message(text)?;
            debug!(input = %text, id, "parsed");
            Ok(Report::lookup(id, show_frequent))
        })
        .collect()
}

fn write_reports(reports: &[Report], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        serde_json::to_writer_pretty(&mut out, reports)?;
        writeln!(out)?;
    } else {
        for report in reports {
            writeln!(out, "{}", report.to_line())?;
        }
    }

    out.flush()?;
    Ok(())
}
