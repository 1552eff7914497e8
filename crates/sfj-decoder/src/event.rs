use std::io::Cursor;

use serde::Serialize;
use sfj_wire::PrimitiveReader;

use crate::error::DecodeError;
use crate::state::DecoderState;

/// Bit in the event flags byte indicating extended headers follow the
/// fixed fields before the metadata block.
const FLAG_EXTENDED_HEADERS: u8 = 0b0000_0001;

/// A fully decoded event record, carrying owned copies of every field —
/// no borrowed references back into `DecoderState`'s dictionaries, so an
/// event outlives the journal it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedEvent {
    pub host: String,
    pub source: String,
    pub sourcetype: String,
    pub index_time: u64,
    pub message: String,
    pub stream_id: u64,
    pub stream_offset: u64,
}

/// Parses one event record out of the bytes following an `Event` opcode.
///
/// The window is exactly `L0` bytes, already pulled off the outer
/// journal stream — every read here is bounded by that slice. Running
/// out of window bytes mid-field is `Malformed` (the window itself was
/// framed correctly; its contents were not), matching the spec's
/// distinction between an outer framing truncation and an inner
/// semantic one.
pub fn parse_event(window: &[u8], state: &DecoderState) -> Result<DecodedEvent, DecodeError> {
    let mut r = PrimitiveReader::new(Cursor::new(window));

    let flags = read_byte(&mut r)?;

    if flags & FLAG_EXTENDED_HEADERS != 0 {
        skip_extended_headers(&mut r)?;
    }

    let stream_id = read_varint(&mut r)?;
    let stream_offset = read_varint(&mut r)?;
    let index_time_delta = read_varint(&mut r)?;

    let base_time = state
        .base_time
        .ok_or(DecodeError::Malformed {
            reason: "index_time_delta encountered before any SetBaseTime",
        })?;
    let index_time = base_time.saturating_add(index_time_delta);

    let mut overrides = read_metadata(&mut r)?;

    let default_host = state.active_host().unwrap_or("");
    let default_source = state.active_source().unwrap_or("");
    let default_sourcetype = state.active_sourcetype().unwrap_or("");

    let host = overrides.remove("host").unwrap_or_else(|| default_host.to_string());
    let source = overrides
        .remove("source")
        .unwrap_or_else(|| default_source.to_string());
    let sourcetype = overrides
        .remove("sourcetype")
        .unwrap_or_else(|| default_sourcetype.to_string());

    let remaining = read_remaining(&mut r)?;
    let message = overrides
        .remove("_raw")
        .unwrap_or_else(|| String::from_utf8_lossy(&remaining).into_owned());

    Ok(DecodedEvent {
        host,
        source,
        sourcetype,
        index_time,
        message,
        stream_id,
        stream_offset,
    })
}

/// Consumes the terminated list of `(varint key, lp-bytes value)` pairs.
/// Header contents are not surfaced in [`DecodedEvent`] — no currently
/// recognized header id affects the baseline schema — so this only
/// needs to advance the reader past them.
fn skip_extended_headers(r: &mut PrimitiveReader<Cursor<&[u8]>>) -> Result<(), DecodeError> {
    loop {
        let key = read_varint(r)?;
        if key == 0 {
            return Ok(());
        }
        let _value = r.read_lp_bytes().map_err(window_truncated)?;
    }
}

/// Reads the metadata block: a varint count followed by that many
/// `(lp-bytes key, lp-bytes value)` pairs. Recognized keys
/// (`host`/`source`/`sourcetype`/`_raw`) override the active dictionary
/// value for this event only — they never mutate `DecoderState`.
fn read_metadata(
    r: &mut PrimitiveReader<Cursor<&[u8]>>,
) -> Result<std::collections::HashMap<String, String>, DecodeError> {
    let count = read_varint(r)?;
    let mut overrides = std::collections::HashMap::new();
    for _ in 0..count {
        let key = r.read_lp_bytes().map_err(window_truncated)?;
        let value = r.read_lp_bytes().map_err(window_truncated)?;
        let key = String::from_utf8_lossy(&key).into_owned();
        match key.as_str() {
            "host" | "source" | "sourcetype" | "_raw" => {
                overrides.insert(key, String::from_utf8_lossy(&value).into_owned());
            }
            _ => {}
        }
    }
    Ok(overrides)
}

fn read_remaining(r: &mut PrimitiveReader<Cursor<&[u8]>>) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    while let Some(b) = r.read_u8().map_err(window_truncated)? {
        out.push(b);
    }
    Ok(out)
}

fn read_byte(r: &mut PrimitiveReader<Cursor<&[u8]>>) -> Result<u8, DecodeError> {
    r.read_u8()
        .map_err(window_truncated)?
        .ok_or(DecodeError::Malformed {
            reason: "event window ended before the flags byte",
        })
}

fn read_varint(r: &mut PrimitiveReader<Cursor<&[u8]>>) -> Result<u64, DecodeError> {
    r.read_varint().map_err(window_truncated)
}

fn window_truncated(_: sfj_wire::WireError) -> DecodeError {
    DecodeError::Malformed {
        reason: "event window ended before a fixed field was fully read",
    }
}
