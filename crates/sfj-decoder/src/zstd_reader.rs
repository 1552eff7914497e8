use std::io::{self, Read};

/// The four bytes every zstd frame starts with.
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// A `Read` adapter that replays up to four bytes it peeked at
/// construction time before falling through to the wrapped reader.
/// `std::io::Read` has no native peek, so detecting the zstd magic
/// without losing those bytes to whatever reads next needs this much
/// buffering and no more.
struct MagicPeekReader<R: Read> {
    peeked: Vec<u8>,
    pos: usize,
    inner: R,
}

impl<R: Read> Read for MagicPeekReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.peeked.len() {
            let n = (buf.len()).min(self.peeked.len() - self.pos);
            buf[..n].copy_from_slice(&self.peeked[self.pos..self.pos + n]);
            self.pos += n;
            return Ok(n);
        }
        self.inner.read(buf)
    }
}

/// Opens a journal's byte source, transparently unwrapping zstd
/// compression if the stream starts with the zstd magic.
///
/// This is pull-based: the zstd case wraps `inner` in
/// `zstd::stream::read::Decoder`, which only decompresses as many bytes
/// as the caller asks for, rather than inflating the whole journal into
/// memory up front. `window_log_max(31)` tolerates frames written
/// without a declared content size while keeping the working set bounded
/// to the window rather than unbounded.
pub fn open_journal_reader<'a, R: Read + 'a>(mut inner: R) -> io::Result<Box<dyn Read + 'a>> {
    let mut magic = [0u8; 4];
    let mut read = 0;
    while read < magic.len() {
        let n = inner.read(&mut magic[read..])?;
        if n == 0 {
            break;
        }
        read += n;
    }

    let peeked = MagicPeekReader {
        peeked: magic[..read].to_vec(),
        pos: 0,
        inner,
    };

    if read == magic.len() && magic == ZSTD_MAGIC {
        let mut decoder = zstd::stream::read::Decoder::new(peeked)?;
        decoder.window_log_max(31)?;
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(peeked))
    }
}
