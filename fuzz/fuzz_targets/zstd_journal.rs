#![no_main]

use libfuzzer_sys::fuzz_target;
use sfj_decoder::{zstd_reader, JournalDecoder};

// Fuzz target: arbitrary bytes pushed through the magic-detecting zstd
// adapter before decoding. Most inputs won't start with the zstd magic
// and just exercise the passthrough path; libFuzzer will eventually
// discover the magic bytes and start exercising real decompression
// too. Catches bugs in:
// - MagicPeekReader replay correctness
// - zstd decompression errors surfacing as DecodeError::Decompression
//   rather than panicking
fuzz_target!(|data: &[u8]| {
    let Ok(reader) = zstd_reader::open_journal_reader(data) else {
        return;
    };
    for result in JournalDecoder::new(reader) {
        if result.is_err() {
            break;
        }
    }
});
