//! Command-line front end for `mdt`.
//!
//! Argument parsing lives here together with the command runners so they
//! can be driven with in-memory input and output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdt_csv::CsvOptions;
use mdt_table::{Alignment, Table};
use tracing::debug;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "mdt", version)]
#[command(about = "Convert markdown tables between markdown and the CSV format")]
pub struct Args {
    /// Path to the FILE from which to read or - to read from stdin
    #[arg(short, long, value_name = "FILE", default_value = STDIN_PATH, global = true)]
    pub file: PathBuf,

    /// Do not interpret the first row as the table header
    #[arg(long, global = true)]
    pub no_header: bool,

    /// CSV field delimiter character
    #[arg(long, default_value = ",", value_parser = mdt_csv::delimiter_from_str, global = true)]
    pub delimiter: u8,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert CSV formatted data into a markdown table
    Md {
        /// Sequence of alignment characters for each column: default (d), left (l), right (r) and center (c)
        #[arg(long, value_name = "dlrc")]
        align: Option<AlignSpec>,
    },
    /// Convert a markdown table into the CSV format
    Csv,
    /// Reformat a markdown table, keeping its alignment unless --align is given
    Fmt {
        /// Sequence of alignment characters for each column: default (d), left (l), right (r) and center (c)
        #[arg(long, value_name = "dlrc")]
        align: Option<AlignSpec>,
    },
}

/// Column alignments given as specifier characters, one per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignSpec(pub Vec<Alignment>);

impl FromStr for AlignSpec {
    type Err = mdt_table::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::parse_spec(s).map(Self)
    }
}

impl Args {
    fn csv_options(&self) -> CsvOptions {
        CsvOptions::with_delimiter(self.delimiter)
    }
}

/// Opens the input named on the command line.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new(STDIN_PATH) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Runs the selected command against the configured input and stdout.
pub fn run(args: &Args) -> Result<()> {
    let input = open_input(&args.file)?;
    execute(args, input, io::stdout().lock())
}

/// Runs the selected command, reading `input` and writing to `output`.
pub fn execute<R: BufRead, W: Write>(args: &Args, input: R, mut output: W) -> Result<()> {
    debug!(command = ?args.command, file = %args.file.display(), "running command");

    match &args.command {
        Command::Md { align } => {
            let alignments = align.clone().unwrap_or_default().0;
            let table = mdt_csv::read_table(input, &args.csv_options(), alignments, !args.no_header)
                .context("failed to read CSV input")?;
            writeln!(output, "{table}")?;
        }
        Command::Csv => {
            let table = Table::parse(input, args.no_header).context("failed to read markdown input")?;
            mdt_csv::write_table(&mut output, &table, &args.csv_options())?;
        }
        Command::Fmt { align } => {
            let mut table = Table::parse(input, args.no_header).context("failed to read markdown input")?;
            // An empty --align keeps the parsed alignments.
            if let Some(AlignSpec(alignments)) = align.as_ref().filter(|a| !a.0.is_empty()) {
                table.alignments = alignments.clone();
            }
            writeln!(output, "{table}")?;
        }
    }

    output.flush()?;
    Ok(())
}
