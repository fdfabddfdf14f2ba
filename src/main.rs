//! kringla - saga chapter extraction CLI

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kringla")]
#[command(version, about = "Extract chapter/sentence structure from saga HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    kringla saga.html                    Print chapters as JSON
    kringla -p saga.html -o saga.json    Pretty-print to a file
    kringla -n saga.html                 Cross-reference number words")]
struct Cli {
    /// Input HTML file (.htm or .html)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Find spelled-out number words instead of extracting chapters
    #[arg(short = 'n', long)]
    numbers: bool,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    check_extension(&cli.input)?;

    let bytes =
        fs::read(&cli.input).map_err(|e| format!("{}: {e}", cli.input.display()))?;
    let html = kringla::decode_html(&bytes);

    let json = if cli.numbers {
        to_json(&kringla::analyze(&html), cli.pretty)?
    } else {
        to_json(&kringla::parse(&html), cli.pretty)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| format!("{}: {e}", path.display()))?;
            if !cli.quiet {
                println!("Output written to {}", path.display());
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| e.to_string())
}

fn check_extension(path: &Path) -> Result<(), String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("htm") || ext.eq_ignore_ascii_case("html") => Ok(()),
        _ => Err(format!(
            "{}: expected an .htm or .html file",
            path.display()
        )),
    }
}
