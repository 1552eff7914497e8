use sfj_wire::WireError;

/// The dictionary an out-of-range `SetActive` index pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictKind {
    Host,
    Source,
    Sourcetype,
}

impl std::fmt::Display for DictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DictKind::Host => "host",
            DictKind::Source => "source",
            DictKind::Sourcetype => "sourcetype",
        };
        f.write_str(s)
    }
}

/// The severity bucket a [`DecodeError`] belongs to, for the journal
/// driver's per-journal log line. `EndOfStream` is deliberately not a
/// variant here — a clean end of journal is not an error at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Truncated,
    Malformed,
    OutOfRange,
    UnknownOpcode,
    Io,
}

/// Errors that can occur while decoding one journal.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)         ← framing: truncated reads, varint overflow
///   ├── Malformed                ← structurally present but semantically broken
///   ├── OutOfRange                ← SetActive referenced an unknown dictionary index
///   ├── UnknownOpcode             ← an opcode byte outside every known class
///   └── Decompression              ← the zstd adapter failed mid-stream
/// ```
///
/// Every variant maps to one of the five recovery-policy buckets of the
/// journal driver (see [`DecodeError::kind`]); none of them are fatal to
/// the surrounding batch, only to the journal currently being decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A wire-level framing error: a read ran off the end of the journal,
    /// or a varint exceeded 10 bytes.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The bytes were present and well-framed but did not satisfy the
    /// format's semantic rules (e.g. an `index_time_delta` before any
    /// `SetBaseTime`, or an event window that still had unread bytes).
    #[error("malformed: {reason}")]
    Malformed { reason: &'static str },

    /// A `SetActive` opcode referenced a dictionary index that has not
    /// been defined yet in this journal.
    #[error("{dict} index {idx} out of range (dictionary has {len} entries)")]
    OutOfRange {
        dict: DictKind,
        idx: u64,
        len: usize,
    },

    /// An opcode byte outside of every known class (NOP, NewString,
    /// SetActive, SetBaseTime, Reserved, Event).
    #[error("unknown opcode {opcode:#04x}")]
    UnknownOpcode { opcode: u8 },

    /// The zstd streaming adapter failed to produce further bytes.
    #[error("decompression failed: {0}")]
    Decompression(std::io::Error),
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Wire(WireError::Io(_)) => ErrorKind::Io,
            DecodeError::Wire(WireError::VarintTooLong) => ErrorKind::Malformed,
            DecodeError::Wire(WireError::Truncated { .. }) => ErrorKind::Truncated,
            DecodeError::Malformed { .. } => ErrorKind::Malformed,
            DecodeError::OutOfRange { .. } => ErrorKind::OutOfRange,
            DecodeError::UnknownOpcode { .. } => ErrorKind::UnknownOpcode,
            DecodeError::Decompression(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_wire_error_is_truncated_kind() {
        let err = DecodeError::Wire(WireError::Truncated {
            needed: 2,
            available: 1,
        });
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn varint_too_long_is_malformed_kind_not_truncated() {
        // spec.md §7 lists "varint overflow" under Malformed, not
        // Truncated — a >10-byte continuation run is a format
        // violation, not a short read.
        let err = DecodeError::Wire(WireError::VarintTooLong);
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
