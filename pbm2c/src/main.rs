use libpbm::{EncodeOptions, PayloadLayout};
use pbm2c::pbm_to_bitmask;
use std::{path::PathBuf, process::ExitCode};
use tracing::Level;

use anyhow::Result;
use clap::{CommandFactory, Parser};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 2;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

/// Converts a 1-bit binary PBM (P4) image into a C array of inverted byte bitmasks
#[derive(Parser)]
#[command(version, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Read ceil(width / 8) * height payload bytes, as netpbm pads rows,
    /// instead of width * height
    #[arg(long)]
    row_padded: bool,

    /// Number of literals per line of the generated array
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    per_line: u16,

    /// <input.pbm> <output.c>
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let [pbm_file, output] = cli.files.as_slice() else {
        // wrong argument count is informational, not a failure
        Cli::command().print_help()?;
        return Ok(());
    };

    let layout = if cli.row_padded {
        PayloadLayout::RowPadded
    } else {
        PayloadLayout::Unpadded
    };
    let options = EncodeOptions::builder()
        .literals_per_line(usize::from(cli.per_line))
        .build();
    pbm_to_bitmask(pbm_file, output, layout, &options)
}
