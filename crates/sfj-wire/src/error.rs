#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Varint encoding exceeded 10 bytes without terminating.
    #[error("varint too long: exceeded 10-byte limit")]
    VarintTooLong,

    /// Input ended before a complete varint or length-prefixed field could
    /// be read in full.
    #[error("truncated: needed {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },

    /// I/O error during read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// #[derive(thiserror::Error)] generates Display + std::error::Error for us;
// #[from] on Io means any fallible std::io read can use `?` and convert
// automatically. `Truncated` carries enough context (needed vs available)
// for the journal driver's per-journal log line to say where decoding
// stopped.
