/// Configuration for a batch run of the journal driver.
///
/// ```text
/// ┌────────────────┬────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                        │
/// ├────────────────┼────────────────────────────────────────────────┤
/// │ output_prefix  │ Subdirectory under the output bucket for JSONL  │
/// │ concurrency    │ Max journals driven in parallel                │
/// │ verbose        │ Emit a per-journal log line, not just a summary │
/// └────────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Output path prefix for decoded JSONL files, joined under the
    /// output bucket: `<output_bucket>/<output_prefix>/<journal>.jsonl`.
    pub output_prefix: String,

    /// Maximum number of journals driven concurrently.
    pub concurrency: usize,

    /// Emit one log line per journal in addition to the final summary.
    pub verbose: bool,
}

impl Default for DriverConfig {
    /// `decoded/` output prefix, one task per available core, verbose
    /// per-journal logging on.
    fn default() -> Self {
        Self {
            output_prefix: "decoded/".to_string(),
            concurrency: std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(4),
            verbose: true,
        }
    }
}
