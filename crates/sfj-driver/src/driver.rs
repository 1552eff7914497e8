use std::io::Write;
use std::sync::Arc;

use sfj_decoder::{zstd_reader, DecodeError, ErrorKind, JournalDecoder};

use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::journal_source::JournalSource;
use crate::sink::JsonlSink;

/// The terminal state of one journal after being driven to completion
/// or first failure.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalStatus {
    /// Every opcode was consumed cleanly; no event was lost.
    Ok,
    /// Decoding stopped at `approx_offset` with the given failure kind.
    /// Every event emitted before that point is complete and correct.
    Failed { kind: ErrorKind, approx_offset: u64 },
}

/// One journal's outcome: its name, how many events it yielded, and how
/// it ended. This is exactly the `(name, events-decoded, final-status)`
/// tuple the per-journal log line reports.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalOutcome {
    pub name: String,
    pub events_decoded: usize,
    pub status: JournalStatus,
}

/// Totals across a whole batch run, emitted once after every journal has
/// been driven.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub journals: usize,
    pub events: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &JournalOutcome) {
        self.journals += 1;
        self.events += outcome.events_decoded;
        if matches!(outcome.status, JournalStatus::Failed { .. }) {
            self.failed += 1;
        }
    }
}

/// Drives one journal from `source` to completion, writing every
/// decoded event to `sink` as it's produced. A decode failure partway
/// through is captured in the returned [`JournalOutcome`] rather than
/// propagated — per-journal failures are never fatal to the surrounding
/// batch. Only failing to *open* the source is a [`DriverError`].
pub fn decode_journal_to_sink<W: Write>(
    source: &dyn JournalSource,
    sink: &mut JsonlSink<W>,
) -> Result<JournalOutcome, DriverError> {
    let name = source.name().to_string();
    let raw = source.open()?;
    let reader = zstd_reader::open_journal_reader(raw).map_err(|source| DriverError::OpenSource {
        name: name.clone(),
        source,
    })?;
    let mut decoder = JournalDecoder::new(reader);

    let mut events_decoded = 0usize;
    loop {
        match decoder.next_event() {
            Ok(Some(event)) => {
                events_decoded += 1;
                if let Err(io_err) = sink.write_event(&event) {
                    return Err(DriverError::Io(io_err));
                }
            }
            Ok(None) => {
                return Ok(JournalOutcome {
                    name: name.clone(),
                    events_decoded,
                    status: JournalStatus::Ok,
                });
            }
            Err(err) => {
                let kind = err.kind();
                tracing::warn!(
                    journal = %name,
                    events_decoded,
                    ?kind,
                    error = %err,
                    "journal decode stopped early"
                );
                return Ok(JournalOutcome {
                    name: name.clone(),
                    events_decoded,
                    status: JournalStatus::Failed {
                        kind,
                        approx_offset: decoder.position(),
                    },
                });
            }
        }
    }
}


/// Drives every source in `sources`, each on its own `spawn_blocking`
/// task bounded by `config.concurrency`, and returns the aggregate
/// [`BatchSummary`]. `make_sink` is called once per journal to produce
/// the `JsonlSink` it should write to (typically a fresh output file per
/// journal).
///
/// This realizes the "independent decoder instances run in parallel
/// across journals, no shared state, no ordering guarantee" concurrency
/// model: each task owns its own `JournalDecoder` end to end.
pub async fn drive_many<F, W>(
    sources: Vec<Arc<dyn JournalSource>>,
    config: &DriverConfig,
    make_sink: F,
) -> Result<BatchSummary, DriverError>
where
    F: Fn(&str) -> Result<JsonlSink<W>, DriverError> + Send + Sync + 'static,
    W: Write + Send + 'static,
{
    let make_sink = Arc::new(make_sink);
    let semaphore = Arc::new(tokio::sync::Semaphore::new(config.concurrency.max(1)));
    let mut handles = Vec::with_capacity(sources.len());

    for source in sources {
        let permit = Arc::clone(&semaphore);
        let make_sink = Arc::clone(&make_sink);
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit.acquire_owned();
            let mut sink = make_sink(source.name())?;
            decode_journal_to_sink(source.as_ref(), &mut sink)
        }));
    }

    let mut summary = BatchSummary::default();
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| DriverError::Io(std::io::Error::other(e)))??;
        if config.verbose {
            tracing::info!(
                journal = %outcome.name,
                events_decoded = outcome.events_decoded,
                status = ?outcome.status,
                "journal decoded"
            );
        }
        summary.record(&outcome);
    }

    tracing::info!(
        journals = summary.journals,
        events = summary.events,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}
