/// Implementation of `sfj decode`.
///
/// Enumerates the journals under `<SOURCE>` (a single file, or every
/// regular file directly inside a directory), drives each one through
/// `sfj-driver`, and writes one `<output-bucket>/<output-prefix>/<name>.jsonl`
/// file per journal. Per-journal decode failures are reported in the
/// batch summary printed at the end; they never change the process exit
/// code — only a setup failure (can't read the source, can't create the
/// output directory) does.
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sfj_driver::{drive_many, DriverConfig, JsonlSink, LocalFileJournalSource};

#[derive(clap::Args)]
pub struct DecodeArgs {
    /// A single journal file, or a directory containing journal files.
    pub source: PathBuf,

    /// Directory decoded JSONL files are written under.
    #[arg(long)]
    pub output_bucket: PathBuf,

    /// Subdirectory of `--output-bucket` the JSONL files land in.
    #[arg(long, default_value = "decoded/")]
    pub output_prefix: String,

    /// Emit one log line per journal in addition to the final summary.
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: &DecodeArgs) -> Result<()> {
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let sources: Vec<Arc<dyn sfj_driver::JournalSource>> = if args.source.is_dir() {
        LocalFileJournalSource::list_dir(&args.source)
            .with_context(|| format!("cannot list journals in {}", args.source.display()))?
            .into_iter()
            .map(|s| Arc::new(s) as Arc<dyn sfj_driver::JournalSource>)
            .collect()
    } else {
        vec![Arc::new(LocalFileJournalSource::new(&args.source))]
    };

    let output_dir = args.output_bucket.join(&args.output_prefix);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create output directory {}", output_dir.display()))?;

    let config = DriverConfig {
        output_prefix: args.output_prefix.clone(),
        verbose: args.verbose,
        ..DriverConfig::default()
    };

    let output_dir_for_sink = output_dir.clone();
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    let summary = runtime
        .block_on(drive_many(sources, &config, move |name| {
            let path = output_dir_for_sink.join(format!("{name}.jsonl"));
            let file = File::create(&path).map_err(|source| sfj_driver::DriverError::CreateSink {
                path: path.clone(),
                source,
            })?;
            Ok(JsonlSink::new(file))
        }))
        .context("decode batch failed")?;

    println!(
        "decoded {} journal(s), {} event(s), {} failed",
        summary.journals, summary.events, summary.failed
    );

    Ok(())
}
