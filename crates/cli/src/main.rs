// CellGrid CLI - headless spreadsheet operations
//
// A thin adapter over an explicit engine handle: every subcommand opens a
// document, operates through the engine's public surface, and saves if it
// mutated anything. Mutating commands print the affected cells in
// recomputation order.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;

use cellgrid_engine::{cell_name, Spreadsheet};
use cellgrid_io::{document, json};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(about = "Incremental spreadsheet engine (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty document
    New {
        file: PathBuf,

        /// Cell-name validator pattern recorded in the document
        #[arg(long)]
        validator: Option<String>,
    },

    /// Set a cell's contents and recompute its dependents
    Set {
        file: PathBuf,
        cell: String,
        contents: String,
    },

    /// Print a cell's value
    Get {
        file: PathBuf,
        cell: String,

        /// Print the textual contents instead of the value
        #[arg(long)]
        contents: bool,
    },

    /// List non-empty cells with their values
    Cells { file: PathBuf },

    /// Export the document as JSON
    Export {
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::New { file, validator } => {
            let validator = match validator {
                Some(pattern) => Regex::new(&pattern)
                    .with_context(|| format!("invalid validator pattern {pattern:?}"))?,
                None => cell_name::default_validator(),
            };
            let mut sheet = Spreadsheet::with_validator(validator);
            document::save(&mut sheet, &file)
                .with_context(|| format!("cannot write {}", file.display()))?;
            Ok(())
        }

        Commands::Set { file, cell, contents } => {
            let mut sheet = open(&file)?;
            let affected = sheet.set_contents_of_cell(&cell, &contents)?;
            document::save(&mut sheet, &file)
                .with_context(|| format!("cannot write {}", file.display()))?;
            println!("{}", affected.join(" "));
            Ok(())
        }

        Commands::Get { file, cell, contents } => {
            let sheet = open(&file)?;
            if contents {
                println!("{}", sheet.get_cell_contents(&cell)?.raw_text());
            } else {
                println!("{}", sheet.get_cell_value(&cell)?);
            }
            Ok(())
        }

        Commands::Cells { file } => {
            let sheet = open(&file)?;
            let mut names: Vec<&str> = sheet.cell_names().collect();
            names.sort();
            for name in names {
                println!("{name}\t{}", sheet.get_cell_value(name)?);
            }
            Ok(())
        }

        Commands::Export { file, output } => {
            let sheet = open(&file)?;
            match output {
                Some(path) => {
                    let dest = File::create(&path)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    json::export(&sheet, BufWriter::new(dest))?;
                }
                None => json::export(&sheet, std::io::stdout().lock())?,
            }
            Ok(())
        }
    }
}

/// Open a document under its own recorded validator.
fn open(path: &Path) -> anyhow::Result<Spreadsheet> {
    let validator = document::recorded_validator(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let sheet = document::open(path, validator)
        .with_context(|| format!("cannot open {}", path.display()))?;
    Ok(sheet)
}
