use std::io::Read;

use sfj_wire::PrimitiveReader;

use crate::error::{DecodeError, DictKind};
use crate::event::{parse_event, DecodedEvent};
use crate::opcode::Opcode;
use crate::state::DecoderState;

/// Drives one journal's opcode stream to completion (or first failure),
/// yielding events as they're parsed.
///
/// `DecoderState` is threaded through as an explicit value rather than
/// hidden behind interior mutability — every opcode handler below either
/// reads it or mutates it directly, and nothing about its lifecycle
/// survives past this `JournalDecoder`.
pub struct JournalDecoder<R: Read> {
    reader: PrimitiveReader<R>,
    state: DecoderState,
    failed: bool,
}

impl<R: Read> JournalDecoder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: PrimitiveReader::new(inner),
            state: DecoderState::new(),
            failed: false,
        }
    }

    /// Offset into the (decompressed) journal stream the decoder has
    /// read up to — used by the journal driver's log line when a
    /// journal is abandoned mid-stream.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Reads and dispatches opcodes until an `Event` opcode produces a
    /// record, a clean end of journal is reached (`Ok(None)`), or a
    /// failure is encountered. Once a failure is returned, every
    /// subsequent call also returns `Ok(None)` without touching the
    /// reader again — the journal is considered abandoned at the point
    /// of first failure, matching the journal driver's recovery policy.
    pub fn next_event(&mut self) -> Result<Option<DecodedEvent>, DecodeError> {
        if self.failed {
            return Ok(None);
        }
        match self.next_event_inner() {
            Ok(v) => Ok(v),
            Err(e) => {
                self.failed = true;
                Err(e)
            }
        }
    }

    fn next_event_inner(&mut self) -> Result<Option<DecodedEvent>, DecodeError> {
        loop {
            let Some(opcode_byte) = self.reader.peek_u8()? else {
                // Clean end of stream at an opcode boundary: not an error.
                return Ok(None);
            };
            self.reader.read_u8()?;

            match Opcode::classify(opcode_byte) {
                Opcode::Nop => continue,
                Opcode::NewStringHost | Opcode::NewStringHostAlias => {
                    let bytes = self.reader.read_lp_bytes()?;
                    self.state.hosts.push(String::from_utf8_lossy(&bytes).into_owned());
                }
                Opcode::NewStringSource => {
                    let bytes = self.reader.read_lp_bytes()?;
                    self.state.sources.push(String::from_utf8_lossy(&bytes).into_owned());
                }
                Opcode::NewStringSourcetype => {
                    let bytes = self.reader.read_lp_bytes()?;
                    self.state
                        .sourcetypes
                        .push(String::from_utf8_lossy(&bytes).into_owned());
                }
                Opcode::SetActiveHost => {
                    let idx = self.reader.read_varint()?;
                    self.state.active_host_idx =
                        Some(Self::check_index(idx, self.state.hosts.len(), DictKind::Host)?);
                }
                Opcode::SetActiveSource => {
                    let idx = self.reader.read_varint()?;
                    self.state.active_source_idx = Some(Self::check_index(
                        idx,
                        self.state.sources.len(),
                        DictKind::Source,
                    )?);
                }
                Opcode::SetActiveSourcetype => {
                    let idx = self.reader.read_varint()?;
                    self.state.active_sourcetype_idx = Some(Self::check_index(
                        idx,
                        self.state.sourcetypes.len(),
                        DictKind::Sourcetype,
                    )?);
                }
                Opcode::SetBaseTime => {
                    let secs = self.reader.read_varint()?;
                    self.state.base_time = Some(secs);
                }
                Opcode::Reserved(_) => {
                    // Forward-compatibility: absorb exactly one varint
                    // and move on, whatever it means to a future writer.
                    let _ = self.reader.read_varint()?;
                }
                Opcode::Event(_) => {
                    let len = self.reader.read_varint()?;
                    let window = self.reader.read_exact(len as usize)?;
                    let event = parse_event(&window, &self.state)?;
                    return Ok(Some(event));
                }
                Opcode::Unknown(opcode) => {
                    return Err(DecodeError::UnknownOpcode { opcode });
                }
            }
        }
    }

    fn check_index(idx: u64, len: usize, dict: DictKind) -> Result<usize, DecodeError> {
        let idx_usize = usize::try_from(idx).unwrap_or(usize::MAX);
        if idx_usize >= len {
            Err(DecodeError::OutOfRange { dict, idx, len })
        } else {
            Ok(idx_usize)
        }
    }
}

impl<R: Read> Iterator for JournalDecoder<R> {
    type Item = Result<DecodedEvent, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}
