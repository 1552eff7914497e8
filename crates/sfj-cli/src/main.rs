/// `sfj` command-line tool — decode Splunk frozen-bucket journals into
/// JSONL.
///
/// # Command overview
///
/// ```text
/// sfj decode <SOURCE> --output-bucket <DIR> [OPTIONS]
///
/// Arguments:
///   <SOURCE>             A journal file, or a directory of journal files
///
/// Options:
///   --output-bucket <DIR>   Where decoded JSONL files are written
///   --output-prefix <DIR>   Subdirectory under the output bucket (default: decoded/)
///   -v, --verbose           Emit a log line per journal, not just the batch summary
///   -h, --help              Print help
///   -V, --version           Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                                        |
/// |------|----------------------------------------------------------------|
/// | 0    | At least one journal was driven with no fatal infrastructure error (per-journal parse failures never change this) |
/// | 1    | The source or output bucket could not be opened/created         |
///
/// All diagnostics are written to stderr so stdout stays clean for piping.
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;

#[derive(Parser)]
#[command(name = "sfj", version, about = "Splunk frozen-bucket journal decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one journal file or a directory of journal files to JSONL.
    Decode(cmd_decode::DecodeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Decode(args) => cmd_decode::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
