#![no_main]

use libfuzzer_sys::fuzz_target;
use sfj_decoder::JournalDecoder;

// Fuzz target: the opcode dispatcher and state machine in isolation
// from compression. Catches bugs in:
// - SetActive out-of-range bookkeeping
// - reserved-opcode varint absorption
// - unknown-opcode detection
// - decoder termination after the first failure (no panics, no hangs)
fuzz_target!(|data: &[u8]| {
    let mut decoder = JournalDecoder::new(data);
    loop {
        match decoder.next_event() {
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(_) => break,
        }
    }
});
