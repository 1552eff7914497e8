#![warn(clippy::pedantic)]

//! Drives one or many Splunk frozen-bucket journals to completion,
//! writing decoded events to a JSONL sink and reporting per-journal and
//! batch-level outcomes.

pub mod config;
pub mod driver;
pub mod error;
pub mod journal_source;
pub mod sink;

pub use config::DriverConfig;
pub use driver::{decode_journal_to_sink, drive_many, BatchSummary, JournalOutcome, JournalStatus};
pub use error::DriverError;
pub use journal_source::{JournalSource, LocalFileJournalSource};
pub use sink::JsonlSink;
