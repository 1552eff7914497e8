#![warn(clippy::pedantic)]

//! Decodes Splunk frozen-bucket journals: a zstd-optional, opcode-dispatched,
//! delta-encoded event stream.
//!
//! [`JournalDecoder`] is the entry point — construct one per journal byte
//! source (after passing it through [`zstd_reader::open_journal_reader`]
//! if the bytes might be zstd-compressed) and pull [`DecodedEvent`]s from
//! it with [`JournalDecoder::next_event`] or by iterating it directly.

pub mod decoder;
pub mod error;
pub mod event;
pub mod opcode;
pub mod state;
pub mod zstd_reader;

pub use decoder::JournalDecoder;
pub use error::{DecodeError, DictKind, ErrorKind};
pub use event::DecodedEvent;
pub use state::DecoderState;
