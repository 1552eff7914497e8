use std::io::Read;

use crate::error::WireError;

const MAX_VARINT_BYTES: usize = 10;

/// A buffered, stream-oriented reader over the primitives the journal
/// format is built from: single bytes, fixed-length runs, varints, and
/// varint-length-prefixed byte strings.
///
/// The same type backs both the outer journal stream (wrapping whatever
/// `Read` the byte source hands us, zstd-decompressed or not) and the
/// bounded sub-reader used to parse a single event's `L0` window — wrap a
/// `std::io::Cursor<&[u8]>` over the window bytes and every primitive
/// below works unchanged.
pub struct PrimitiveReader<R: Read> {
    inner: R,
    peeked: Option<u8>,
    pos: u64,
}

impl<R: Read> PrimitiveReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
            pos: 0,
        }
    }

    /// Current byte offset into the stream, for error reporting.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Read one byte, returning `Ok(None)` at a clean end of stream
    /// (no bytes consumed, no error) rather than `Truncated`.
    pub fn read_u8(&mut self) -> Result<Option<u8>, WireError> {
        if let Some(b) = self.peeked.take() {
            self.pos += 1;
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf)? {
            0 => Ok(None),
            _ => {
                self.pos += 1;
                Ok(Some(buf[0]))
            }
        }
    }

    /// Look at the next byte without consuming it. Used by the opcode
    /// loop to tell a clean end-of-journal apart from a present opcode
    /// byte before committing to reading it.
    pub fn peek_u8(&mut self) -> Result<Option<u8>, WireError> {
        if self.peeked.is_none() {
            let mut buf = [0u8; 1];
            match self.inner.read(&mut buf)? {
                0 => return Ok(None),
                _ => self.peeked = Some(buf[0]),
            }
        }
        Ok(self.peeked)
    }

    pub fn at_end(&mut self) -> Result<bool, WireError> {
        Ok(self.peek_u8()?.is_none())
    }

    /// Read exactly `n` bytes, or fail `Truncated` if the stream ends
    /// first.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, WireError> {
        let mut out = Vec::with_capacity(n);
        if let Some(b) = self.peeked.take() {
            out.push(b);
        }
        while out.len() < n {
            let mut chunk = vec![0u8; n - out.len()];
            let read = self.inner.read(&mut chunk)?;
            if read == 0 {
                return Err(WireError::Truncated {
                    needed: n,
                    available: out.len(),
                });
            }
            out.extend_from_slice(&chunk[..read]);
        }
        self.pos += out.len() as u64;
        Ok(out)
    }

    /// Read an unsigned LEB128 varint directly off the stream.
    pub fn read_varint(&mut self) -> Result<u64, WireError> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;

        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_u8()?.ok_or(WireError::Truncated {
                needed: i + 1,
                available: i,
            })?;

            let data = u64::from(byte & 0x7F);
            result |= data << shift;
            shift += 7;

            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }

        Err(WireError::VarintTooLong)
    }

    /// Read a varint-length-prefixed byte string.
    pub fn read_lp_bytes(&mut self) -> Result<Vec<u8>, WireError> {
        let len = self.read_varint()?;
        self.read_exact(len as usize)
    }
}
