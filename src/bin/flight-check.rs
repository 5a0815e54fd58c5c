//! CLI tool to check a flight manifest file and write the takeoff summary.

use clap::Parser;
use flight_check::process_manifest;
use std::fs;
use std::path::Path;
use std::process;

/// Check a flight manifest and write its takeoff eligibility summary.
///
/// Reads the manifest line by line, reports every invalid instruction, and
/// writes the ten-field summary only when the whole file is valid.
#[derive(Parser)]
#[command(name = "flight-check")]
struct Cli {
    /// Manifest file with one `add <kind> ...` instruction per line
    input: String,

    /// File the summary line is written to
    output: String,

    /// Show paths and progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("input: {}, output: {}", cli.input, cli.output);
    }

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    let summary = match process_manifest(&input_text) {
        Ok(summary) => summary,
        Err(errors) => {
            if cli.verbose {
                eprintln!("completed reading file");
            }
            for error in &errors {
                eprintln!("{error}");
            }
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("completed reading file");
    }

    if let Some(parent) = Path::new(&cli.output).parent()
        && !parent.as_os_str().is_empty()
        && fs::create_dir_all(parent).is_err()
    {
        eprintln!("Error creating output directory for '{}'", cli.output);
        process::exit(1);
    }
    if let Err(e) = fs::write(&cli.output, &summary) {
        eprintln!("Error writing output file '{}': {e}", cli.output);
        process::exit(1);
    }

    if cli.verbose {
        eprintln!("Summary written to {}", cli.output);
    }
}
